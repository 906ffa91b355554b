//! The support-kind policy.
//!
//! Pure decision functions: each returns a [`Verdict`] holding the outcome and
//! the diagnostics to report, in order. Nothing here logs.

use crate::core::features::ResolvedAssets;
use crate::core::project::ImageService;
use crate::core::support::{Feature, SupportKind};
use crate::validate::diagnostic::{FeatureDiagnostic, KnownImageService};

/// Outcome of checking one feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// `false` only when the feature is used but disallowed
    pub allowed: bool,
    pub diagnostics: Vec<FeatureDiagnostic>,
}

impl Verdict {
    fn allowed(diagnostics: Vec<FeatureDiagnostic>) -> Self {
        Verdict {
            allowed: true,
            diagnostics,
        }
    }

    fn denied(diagnostics: Vec<FeatureDiagnostic>) -> Self {
        Verdict {
            allowed: false,
            diagnostics,
        }
    }
}

/// Apply the generic policy to one feature.
///
/// `stable` is always allowed and silent. `deprecated` and `experimental`
/// warn whether or not the feature is used. `unsupported` fails only when
/// `is_used` says the configuration depends on the feature.
pub fn check_support_kind(
    kind: SupportKind,
    feature: Feature,
    is_used: impl FnOnce() -> bool,
) -> Verdict {
    let diagnostics = match kind {
        SupportKind::Stable => return Verdict::allowed(Vec::new()),
        SupportKind::Deprecated => vec![FeatureDiagnostic::Deprecated { feature }],
        SupportKind::Experimental => vec![FeatureDiagnostic::Experimental { feature }],
        SupportKind::Unsupported => Vec::new(),
    };

    if kind == SupportKind::Unsupported && is_used() {
        return Verdict::denied(vec![FeatureDiagnostic::Unsupported { feature }]);
    }

    Verdict::allowed(diagnostics)
}

/// Check the asset pipeline.
///
/// An incompatible built-in image service fails immediately with a warning,
/// without consulting the support kind. Otherwise assets count as always in
/// use and the generic policy decides.
pub fn check_assets(assets: &ResolvedAssets, image_service: Option<&ImageService>) -> Verdict {
    let incompatible = match image_service {
        Some(ImageService::Sharp) if !assets.sharp_compatible => Some(KnownImageService::Sharp),
        Some(ImageService::Squoosh) if !assets.squoosh_compatible => {
            Some(KnownImageService::Squoosh)
        }
        _ => None,
    };

    if let Some(service) = incompatible {
        return Verdict::denied(vec![FeatureDiagnostic::IncompatibleImageService { service }]);
    }

    check_support_kind(assets.support_kind, Feature::Assets, || true)
}
