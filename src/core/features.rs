//! Feature maps as declared by adapters.
//!
//! Adapters may leave any entry out. Nothing downstream of [`FeatureMap::resolve`]
//! ever sees a missing entry: absent support kinds become `unsupported` and an
//! absent assets record becomes [`ResolvedAssets::UNSUPPORTED`].

use serde::{Deserialize, Serialize};

use crate::core::support::{Feature, SupportKind};

/// Asset pipeline support as declared by an adapter.
///
/// Every field is optional, including inside a declared record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssetsFeature {
    /// Generic support level for asset handling
    #[serde(alias = "support_kind", skip_serializing_if = "Option::is_none")]
    pub support_kind: Option<SupportKind>,

    /// Works with the Sharp image service
    #[serde(
        rename = "isSharpCompatible",
        alias = "sharpCompatible",
        alias = "sharp_compatible",
        skip_serializing_if = "Option::is_none"
    )]
    pub sharp_compatible: Option<bool>,

    /// Works with the Squoosh image service
    #[serde(
        rename = "isSquooshCompatible",
        alias = "squooshCompatible",
        alias = "squoosh_compatible",
        skip_serializing_if = "Option::is_none"
    )]
    pub squoosh_compatible: Option<bool>,
}

impl AssetsFeature {
    /// Create an assets record with the given support kind and no image service claims.
    pub fn new(support_kind: SupportKind) -> Self {
        AssetsFeature {
            support_kind: Some(support_kind),
            ..Default::default()
        }
    }

    /// Declare Sharp compatibility.
    pub fn with_sharp(mut self, compatible: bool) -> Self {
        self.sharp_compatible = Some(compatible);
        self
    }

    /// Declare Squoosh compatibility.
    pub fn with_squoosh(mut self, compatible: bool) -> Self {
        self.squoosh_compatible = Some(compatible);
        self
    }

    /// Fill in missing fields with their fail-closed defaults.
    pub fn resolve(&self) -> ResolvedAssets {
        ResolvedAssets {
            support_kind: self.support_kind.unwrap_or_default(),
            sharp_compatible: self.sharp_compatible.unwrap_or(false),
            squoosh_compatible: self.squoosh_compatible.unwrap_or(false),
        }
    }
}

/// The set of features an adapter declares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureMap {
    #[serde(alias = "static_output", skip_serializing_if = "Option::is_none")]
    pub static_output: Option<SupportKind>,

    #[serde(alias = "hybrid_output", skip_serializing_if = "Option::is_none")]
    pub hybrid_output: Option<SupportKind>,

    #[serde(alias = "server_output", skip_serializing_if = "Option::is_none")]
    pub server_output: Option<SupportKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<AssetsFeature>,
}

impl FeatureMap {
    /// Create an empty feature map (everything unsupported).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_static_output(mut self, kind: SupportKind) -> Self {
        self.static_output = Some(kind);
        self
    }

    pub fn with_hybrid_output(mut self, kind: SupportKind) -> Self {
        self.hybrid_output = Some(kind);
        self
    }

    pub fn with_server_output(mut self, kind: SupportKind) -> Self {
        self.server_output = Some(kind);
        self
    }

    pub fn with_assets(mut self, assets: AssetsFeature) -> Self {
        self.assets = Some(assets);
        self
    }

    /// Produce a fully populated map, defaulting every missing entry to unsupported.
    pub fn resolve(&self) -> ResolvedFeatureMap {
        let resolved = ResolvedFeatureMap {
            static_output: self.static_output.unwrap_or_default(),
            hybrid_output: self.hybrid_output.unwrap_or_default(),
            server_output: self.server_output.unwrap_or_default(),
            assets: self
                .assets
                .as_ref()
                .map(AssetsFeature::resolve)
                .unwrap_or(ResolvedAssets::UNSUPPORTED),
        };
        tracing::trace!(?resolved, "resolved feature map");
        resolved
    }
}

/// Asset support with every field decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAssets {
    pub support_kind: SupportKind,
    #[serde(rename = "isSharpCompatible")]
    pub sharp_compatible: bool,
    #[serde(rename = "isSquooshCompatible")]
    pub squoosh_compatible: bool,
}

impl ResolvedAssets {
    /// What an adapter gets when it says nothing about assets.
    pub const UNSUPPORTED: ResolvedAssets = ResolvedAssets {
        support_kind: SupportKind::Unsupported,
        sharp_compatible: false,
        squoosh_compatible: false,
    };
}

/// A feature map with no missing entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedFeatureMap {
    pub static_output: SupportKind,
    pub hybrid_output: SupportKind,
    pub server_output: SupportKind,
    pub assets: ResolvedAssets,
}

impl ResolvedFeatureMap {
    /// The declared support kind for a feature.
    pub fn support_kind(&self, feature: Feature) -> SupportKind {
        match feature {
            Feature::StaticOutput => self.static_output,
            Feature::HybridOutput => self.hybrid_output,
            Feature::ServerOutput => self.server_output,
            Feature::Assets => self.assets.support_kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_map_resolves_to_unsupported() {
        let resolved = FeatureMap::new().resolve();
        for feature in Feature::ALL {
            assert_eq!(resolved.support_kind(feature), SupportKind::Unsupported);
        }
        assert_eq!(resolved.assets, ResolvedAssets::UNSUPPORTED);
    }

    #[test]
    fn test_partial_assets_record_defaults_per_field() {
        let map = FeatureMap::new().with_assets(AssetsFeature {
            sharp_compatible: Some(true),
            ..Default::default()
        });
        let assets = map.resolve().assets;
        assert_eq!(assets.support_kind, SupportKind::Unsupported);
        assert!(assets.sharp_compatible);
        assert!(!assets.squoosh_compatible);
    }

    #[test]
    fn test_declared_entries_are_kept() {
        let resolved = FeatureMap::new()
            .with_static_output(SupportKind::Stable)
            .with_server_output(SupportKind::Experimental)
            .resolve();
        assert_eq!(resolved.static_output, SupportKind::Stable);
        assert_eq!(resolved.hybrid_output, SupportKind::Unsupported);
        assert_eq!(resolved.server_output, SupportKind::Experimental);
    }

    #[test]
    fn test_deserialize_camel_case_and_aliases() {
        let map: FeatureMap = toml::from_str(
            r#"
            staticOutput = "stable"
            server_output = "deprecated"

            [assets]
            supportKind = "experimental"
            isSharpCompatible = true
            squooshCompatible = false
            "#,
        )
        .unwrap();

        assert_eq!(map.static_output, Some(SupportKind::Stable));
        assert_eq!(map.hybrid_output, None);
        assert_eq!(map.server_output, Some(SupportKind::Deprecated));
        let assets = map.assets.unwrap();
        assert_eq!(assets.support_kind, Some(SupportKind::Experimental));
        assert_eq!(assets.sharp_compatible, Some(true));
        assert_eq!(assets.squoosh_compatible, Some(false));
    }

    #[test]
    fn test_unknown_support_kind_is_rejected() {
        let result: Result<FeatureMap, _> = toml::from_str(r#"staticOutput = "beta""#);
        assert!(result.is_err());
    }
}
