//! Adapter manifests.
//!
//! An adapter manifest names the adapter and carries the feature map it
//! declares:
//!
//! ```toml
//! name = "@example/node"
//! version = "6.0.0"
//!
//! [features]
//! staticOutput = "stable"
//! serverOutput = "stable"
//!
//! [features.assets]
//! supportKind = "stable"
//! isSharpCompatible = true
//! ```

use serde::{Deserialize, Serialize};

use crate::core::features::FeatureMap;

/// A declared adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterManifest {
    /// Adapter name, used in every diagnostic
    pub name: String,

    /// Adapter version (informational)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<semver::Version>,

    /// Declared features; missing entries are unsupported
    #[serde(default, alias = "supportedFeatures", alias = "supported_features")]
    pub features: FeatureMap,
}

impl AdapterManifest {
    /// Create a manifest with no declared features.
    pub fn new(name: impl Into<String>) -> Self {
        AdapterManifest {
            name: name.into(),
            version: None,
            features: FeatureMap::default(),
        }
    }

    pub fn with_features(mut self, features: FeatureMap) -> Self {
        self.features = features;
        self
    }

    /// `name@version`, or just the name when unversioned.
    pub fn display_name(&self) -> String {
        match &self.version {
            Some(version) => format!("{}@{}", self.name, version),
            None => self.name.clone(),
        }
    }
}
