//! Diagnostic intents produced by the feature policy.
//!
//! The policy decides *what* to report; rendering the message and handing it
//! to a [`Logger`] happens here, separately, so the decision logic can be
//! tested without a logger.

use serde::Serialize;

use crate::core::support::Feature;
use crate::util::logger::{Level, Logger};

/// Scope tag used for support-kind diagnostics.
pub const CONFIG_SCOPE: &str = "config";

/// Image services that have a compatibility flag in the feature map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KnownImageService {
    Sharp,
    Squoosh,
}

impl KnownImageService {
    pub fn as_str(&self) -> &'static str {
        match self {
            KnownImageService::Sharp => "Sharp",
            KnownImageService::Squoosh => "Squoosh",
        }
    }
}

/// Something the policy wants reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FeatureDiagnostic {
    /// The configuration uses a feature the adapter does not support.
    Unsupported { feature: Feature },
    /// The adapter declares the feature experimental.
    Experimental { feature: Feature },
    /// The adapter declares the feature deprecated.
    Deprecated { feature: Feature },
    /// The configured image service is one the adapter cannot run.
    IncompatibleImageService { service: KnownImageService },
}

impl FeatureDiagnostic {
    pub fn level(&self) -> Level {
        match self {
            FeatureDiagnostic::Unsupported { .. } => Level::Error,
            FeatureDiagnostic::Experimental { .. }
            | FeatureDiagnostic::Deprecated { .. }
            | FeatureDiagnostic::IncompatibleImageService { .. } => Level::Warn,
        }
    }

    pub fn scope(&self) -> Option<&'static str> {
        match self {
            FeatureDiagnostic::IncompatibleImageService { .. } => None,
            _ => Some(CONFIG_SCOPE),
        }
    }

    /// The feature this diagnostic is about.
    pub fn feature(&self) -> Feature {
        match self {
            FeatureDiagnostic::Unsupported { feature }
            | FeatureDiagnostic::Experimental { feature }
            | FeatureDiagnostic::Deprecated { feature } => *feature,
            FeatureDiagnostic::IncompatibleImageService { .. } => Feature::Assets,
        }
    }

    /// Render the user-facing message for an adapter.
    pub fn message(&self, adapter_name: &str) -> String {
        match self {
            FeatureDiagnostic::Unsupported { feature } => format!(
                "The feature {} is not supported (used by {}).",
                feature, adapter_name
            ),
            FeatureDiagnostic::Experimental { .. } => format!(
                "The feature is experimental and subject to change (used by {}).",
                adapter_name
            ),
            FeatureDiagnostic::Deprecated { .. } => format!(
                "The feature is deprecated and will be removed in the future (used by {}).",
                adapter_name
            ),
            FeatureDiagnostic::IncompatibleImageService { service } => format!(
                "The currently selected adapter `{}` is not compatible with the image service \"{}\".",
                adapter_name,
                service.as_str()
            ),
        }
    }

    /// Render and send to the logger.
    pub fn emit(&self, adapter_name: &str, logger: &dyn Logger) {
        logger.log(self.level(), self.scope(), &self.message(adapter_name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::logger::RecordingLogger;

    #[test]
    fn test_unsupported_message() {
        let diag = FeatureDiagnostic::Unsupported {
            feature: Feature::ServerOutput,
        };
        assert_eq!(
            diag.message("@example/static"),
            "The feature serverOutput is not supported (used by @example/static)."
        );
        assert_eq!(diag.level(), Level::Error);
        assert_eq!(diag.scope(), Some("config"));
    }

    #[test]
    fn test_warning_messages() {
        let experimental = FeatureDiagnostic::Experimental {
            feature: Feature::HybridOutput,
        };
        assert_eq!(
            experimental.message("edge"),
            "The feature is experimental and subject to change (used by edge)."
        );

        let deprecated = FeatureDiagnostic::Deprecated {
            feature: Feature::StaticOutput,
        };
        assert_eq!(
            deprecated.message("edge"),
            "The feature is deprecated and will be removed in the future (used by edge)."
        );
        assert_eq!(deprecated.level(), Level::Warn);
    }

    #[test]
    fn test_image_service_message_has_no_scope() {
        let diag = FeatureDiagnostic::IncompatibleImageService {
            service: KnownImageService::Squoosh,
        };
        assert_eq!(
            diag.message("edge"),
            "The currently selected adapter `edge` is not compatible with the image service \"Squoosh\"."
        );
        assert_eq!(diag.scope(), None);
        assert_eq!(diag.level(), Level::Warn);
        assert_eq!(diag.feature(), Feature::Assets);
    }

    #[test]
    fn test_emit() {
        let logger = RecordingLogger::new();
        FeatureDiagnostic::Unsupported {
            feature: Feature::Assets,
        }
        .emit("bare", &logger);

        let records = logger.errors();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].scope.as_deref(), Some("config"));
        assert!(records[0].message.contains("assets"));
    }
}
