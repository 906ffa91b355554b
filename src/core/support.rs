//! Support levels and the features they apply to.
//!
//! A support kind is a fact an adapter declares about itself. Whether that
//! fact matters depends on what the project configuration turns on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How an adapter supports a particular feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportKind {
    /// Fully supported, no diagnostics
    Stable,
    /// Supported for now, scheduled for removal
    Deprecated,
    /// Supported, but may change without notice
    Experimental,
    /// Not supported; fails if the configuration uses it
    #[default]
    Unsupported,
}

impl SupportKind {
    /// All support kinds, in declaration order.
    pub const ALL: [SupportKind; 4] = [
        SupportKind::Stable,
        SupportKind::Deprecated,
        SupportKind::Experimental,
        SupportKind::Unsupported,
    ];

    /// Get the support kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportKind::Stable => "stable",
            SupportKind::Deprecated => "deprecated",
            SupportKind::Experimental => "experimental",
            SupportKind::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for SupportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SupportKind {
    type Err = SupportKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stable" => Ok(SupportKind::Stable),
            "deprecated" => Ok(SupportKind::Deprecated),
            "experimental" => Ok(SupportKind::Experimental),
            "unsupported" => Ok(SupportKind::Unsupported),
            _ => Err(SupportKindParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid support kind.
#[derive(Debug, Clone, Error)]
#[error(
    "invalid support kind '{0}', valid values: stable, deprecated, experimental, unsupported"
)]
pub struct SupportKindParseError(pub String);

/// One of the capabilities an adapter can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    /// Pre-rendered static output
    StaticOutput,
    /// Mostly static output with opt-in server routes
    HybridOutput,
    /// Fully server-rendered output
    ServerOutput,
    /// The image/asset pipeline
    Assets,
}

impl Feature {
    /// All features, in evaluation order.
    pub const ALL: [Feature; 4] = [
        Feature::StaticOutput,
        Feature::HybridOutput,
        Feature::ServerOutput,
        Feature::Assets,
    ];

    /// The key this feature uses in a feature map.
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::StaticOutput => "staticOutput",
            Feature::HybridOutput => "hybridOutput",
            Feature::ServerOutput => "serverOutput",
            Feature::Assets => "assets",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
