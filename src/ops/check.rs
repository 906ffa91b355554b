//! Implementation of `adapter-features check`.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::adapter::AdapterManifest;
use crate::core::project::{ConfigOverrides, ProjectConfig};
use crate::util::config::{load_adapter_manifest, load_project_config};
use crate::util::logger::Logger;
use crate::validate::{evaluate, ValidationReport};

/// Options for checking an adapter against a project.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Adapter manifest to check
    pub adapter: PathBuf,

    /// Project config (defaults to `project.toml` in the current directory, if present)
    pub project: Option<PathBuf>,

    /// Command-line overrides for the project config
    pub overrides: ConfigOverrides,
}

/// Everything `check` produced.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub manifest: AdapterManifest,
    pub config: ProjectConfig,
    pub report: ValidationReport,
}

/// Load both inputs, validate, and emit diagnostics to `logger`.
///
/// Only loading can fail. Unsupported features are reported in the outcome.
pub fn check(opts: &CheckOptions, logger: &dyn Logger) -> Result<CheckOutcome> {
    let manifest = load_adapter_manifest(&opts.adapter)?;
    let config = load_project_config(opts.project.as_deref(), opts.overrides.clone())?;

    tracing::debug!(
        adapter = %manifest.name,
        output = %config.output,
        image_service = config.image_entrypoint().unwrap_or("<none>"),
        "validating adapter features"
    );

    let report = evaluate(&manifest.features.resolve(), &config);
    report.emit(&manifest.name, logger);

    Ok(CheckOutcome {
        manifest,
        config,
        report,
    })
}
