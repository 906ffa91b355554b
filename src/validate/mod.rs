//! Feature validation.
//!
//! Checks a project configuration against the features an adapter declares.
//!
//! # Stages
//!
//! 1. **Resolve** - fill every missing feature entry with `unsupported`
//! 2. **Evaluate** - apply the support-kind policy to each feature
//!    independently (static, hybrid, server, assets)
//! 3. **Emit** - render diagnostics and hand them to a [`Logger`]
//!
//! Validation itself never fails. A feature the configuration uses but the
//! adapter cannot provide shows up as `false` in the [`ValidationResult`]
//! plus a diagnostic; whether that aborts anything is the caller's call.
//!
//! # Usage
//!
//! ```
//! use adapter_features::core::{AssetsFeature, FeatureMap, OutputMode, ProjectConfig, SupportKind};
//! use adapter_features::util::logger::RecordingLogger;
//! use adapter_features::validate::validate_supported_features;
//!
//! let features = FeatureMap::new()
//!     .with_server_output(SupportKind::Unsupported)
//!     .with_assets(AssetsFeature::new(SupportKind::Stable));
//! let config = ProjectConfig::new(OutputMode::Server);
//! let logger = RecordingLogger::new();
//!
//! let result = validate_supported_features("@example/static", &features, &config, &logger);
//! assert!(!result.server_output);
//! assert_eq!(logger.errors().len(), 1);
//! ```

pub mod diagnostic;
pub mod policy;

use miette::Diagnostic as MietteDiagnostic;
use serde::Serialize;
use thiserror::Error;

use crate::core::features::{FeatureMap, ResolvedFeatureMap};
use crate::core::project::{OutputMode, ProjectConfig};
use crate::core::support::Feature;
use crate::util::logger::Logger;

pub use diagnostic::{FeatureDiagnostic, KnownImageService, CONFIG_SCOPE};
pub use policy::{check_assets, check_support_kind, Verdict};

/// Per-feature outcome of validation.
///
/// `true` means the feature is either not used, or used and permitted
/// (possibly with a warning).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub static_output: bool,
    pub hybrid_output: bool,
    pub server_output: bool,
    pub assets: bool,
}

impl ValidationResult {
    pub fn get(&self, feature: Feature) -> bool {
        match feature {
            Feature::StaticOutput => self.static_output,
            Feature::HybridOutput => self.hybrid_output,
            Feature::ServerOutput => self.server_output,
            Feature::Assets => self.assets,
        }
    }

    /// Check if every feature passed.
    pub fn is_valid(&self) -> bool {
        Feature::ALL.iter().all(|feature| self.get(*feature))
    }

    /// Features that failed, in evaluation order.
    pub fn unsupported_features(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|feature| !self.get(*feature))
            .collect()
    }
}

/// Result plus the diagnostics that explain it, before anything is logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub result: ValidationResult,
    pub diagnostics: Vec<FeatureDiagnostic>,
}

impl ValidationReport {
    /// Send every diagnostic to the logger, in evaluation order.
    pub fn emit(&self, adapter_name: &str, logger: &dyn Logger) {
        for diagnostic in &self.diagnostics {
            diagnostic.emit(adapter_name, logger);
        }
    }
}

/// Evaluate all features without logging.
pub fn evaluate(features: &ResolvedFeatureMap, config: &ProjectConfig) -> ValidationReport {
    let mut diagnostics = Vec::new();
    let mut record = |feature: Feature, verdict: Verdict| {
        tracing::debug!(
            feature = feature.as_str(),
            support = %features.support_kind(feature),
            allowed = verdict.allowed,
            "checked feature"
        );
        diagnostics.extend(verdict.diagnostics);
        verdict.allowed
    };

    let static_output = record(
        Feature::StaticOutput,
        check_support_kind(features.static_output, Feature::StaticOutput, || {
            config.output == OutputMode::Static
        }),
    );
    let hybrid_output = record(
        Feature::HybridOutput,
        check_support_kind(features.hybrid_output, Feature::HybridOutput, || {
            config.output == OutputMode::Hybrid
        }),
    );
    let server_output = record(
        Feature::ServerOutput,
        check_support_kind(features.server_output, Feature::ServerOutput, || {
            config.output == OutputMode::Server
        }),
    );
    let image_service = config.image_service();
    let assets = record(
        Feature::Assets,
        check_assets(&features.assets, image_service.as_ref()),
    );

    ValidationReport {
        result: ValidationResult {
            static_output,
            hybrid_output,
            server_output,
            assets,
        },
        diagnostics,
    }
}

/// Check whether an adapter supports the features a configuration turns on.
///
/// Diagnostics go to `logger` as they are found; the returned record always
/// covers all four features.
pub fn validate_supported_features(
    adapter_name: &str,
    features: &FeatureMap,
    config: &ProjectConfig,
    logger: &dyn Logger,
) -> ValidationResult {
    let report = evaluate(&features.resolve(), config);
    report.emit(adapter_name, logger);
    report.result
}

/// Returned by callers that treat any failed feature as fatal.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("adapter `{adapter}` does not support: {}", features_list(.features))]
#[diagnostic(
    code(adapter_features::validate::unsupported),
    help("Choose an adapter that supports these features, or change the project configuration")
)]
pub struct UnsupportedFeaturesError {
    pub adapter: String,
    pub features: Vec<Feature>,
}

impl UnsupportedFeaturesError {
    /// `None` when every feature passed.
    pub fn from_result(adapter: &str, result: &ValidationResult) -> Option<Self> {
        let features = result.unsupported_features();
        if features.is_empty() {
            None
        } else {
            Some(UnsupportedFeaturesError {
                adapter: adapter.to_string(),
                features,
            })
        }
    }
}

fn features_list(features: &[Feature]) -> String {
    features
        .iter()
        .map(Feature::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
