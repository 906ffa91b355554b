//! Loading adapter manifests and project configuration from disk.
//!
//! Both files are TOML:
//! - Adapter manifest: `name`, optional `version`, and a `[features]` table
//! - Project config: `output` and `[image.service]`
//!
//! Command-line overrides are merged on top of the project config.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::adapter::AdapterManifest;
use crate::core::project::{ConfigOverrides, ProjectConfig};

/// Default project config file name.
pub const PROJECT_CONFIG_NAME: &str = "project.toml";

/// Load an adapter manifest from a file.
pub fn load_adapter_manifest(path: &Path) -> Result<AdapterManifest> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read adapter manifest: {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("failed to parse adapter manifest: {}", path.display()))
}

impl ProjectConfig {
    /// Load project configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read project config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse project config: {}", path.display()))
    }

    /// Load project configuration with fallback to defaults if the file doesn't exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("no project config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

/// Load the project config and apply overrides.
///
/// Order of precedence (highest to lowest):
/// 1. Overrides (command-line flags)
/// 2. Project config file
/// 3. Defaults
pub fn load_project_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<ProjectConfig> {
    let mut config = match path {
        Some(path) => ProjectConfig::load(path)?,
        None => ProjectConfig::load_or_default(Path::new(PROJECT_CONFIG_NAME))?,
    };
    config.merge(overrides);
    Ok(config)
}
