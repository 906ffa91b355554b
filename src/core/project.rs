//! Project configuration as seen by feature validation.
//!
//! Only the two settings that can activate adapter features are modelled:
//! the output mode and the image service entrypoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Entrypoint of the built-in Sharp image service.
pub const SHARP_ENTRYPOINT: &str = "astro/assets/services/sharp";

/// Entrypoint of the built-in Squoosh image service.
pub const SQUOOSH_ENTRYPOINT: &str = "astro/assets/services/squoosh";

/// How the project is rendered. Exactly one mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Static,
    Hybrid,
    Server,
}

impl OutputMode {
    /// Get the output mode as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Static => "static",
            OutputMode::Hybrid => "hybrid",
            OutputMode::Server => "server",
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputMode {
    type Err = OutputModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "static" => Ok(OutputMode::Static),
            "hybrid" => Ok(OutputMode::Hybrid),
            "server" => Ok(OutputMode::Server),
            _ => Err(OutputModeParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid output mode.
#[derive(Debug, Clone, Error)]
#[error("invalid output mode '{0}', valid values: static, hybrid, server")]
pub struct OutputModeParseError(pub String);

/// Identity of the image service a project uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageService {
    Sharp,
    Squoosh,
    /// Any other entrypoint; never checked for compatibility
    Other(String),
}

impl ImageService {
    /// Classify an entrypoint string. Only exact matches are recognized.
    pub fn from_entrypoint(entrypoint: &str) -> Self {
        match entrypoint {
            SHARP_ENTRYPOINT => ImageService::Sharp,
            SQUOOSH_ENTRYPOINT => ImageService::Squoosh,
            other => ImageService::Other(other.to_string()),
        }
    }
}

/// `[image.service]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageServiceConfig {
    /// Module the image service is loaded from
    pub entrypoint: Option<String>,
}

/// `[image]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub service: Option<ImageServiceConfig>,
}

/// Project configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Output mode (defaults to static)
    pub output: OutputMode,

    /// Image pipeline settings
    pub image: ImageConfig,
}

impl ProjectConfig {
    /// Create a config with the given output mode and no image service.
    pub fn new(output: OutputMode) -> Self {
        ProjectConfig {
            output,
            image: ImageConfig::default(),
        }
    }

    /// Set the image service entrypoint.
    pub fn with_image_service(mut self, entrypoint: impl Into<String>) -> Self {
        self.image.service = Some(ImageServiceConfig {
            entrypoint: Some(entrypoint.into()),
        });
        self
    }

    /// The configured image service entrypoint, if any.
    pub fn image_entrypoint(&self) -> Option<&str> {
        self.image
            .service
            .as_ref()
            .and_then(|service| service.entrypoint.as_deref())
    }

    /// The configured image service, if any.
    pub fn image_service(&self) -> Option<ImageService> {
        self.image_entrypoint().map(ImageService::from_entrypoint)
    }

    /// Merge overrides into this config (overrides take precedence).
    pub fn merge(&mut self, overrides: ConfigOverrides) {
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(entrypoint) = overrides.image_service {
            self.image.service = Some(ImageServiceConfig {
                entrypoint: Some(entrypoint),
            });
        }
    }
}

/// Values that override the project config, typically from the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub output: Option<OutputMode>,
    pub image_service: Option<String>,
}
