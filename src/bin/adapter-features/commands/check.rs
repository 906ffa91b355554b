//! `adapter-features check` command

use anyhow::Result;

use crate::cli::CheckArgs;
use adapter_features::core::{ConfigOverrides, Feature};
use adapter_features::ops::check::{check, CheckOptions};
use adapter_features::util::shell::{Shell, Status};
use adapter_features::validate::UnsupportedFeaturesError;

pub fn execute(args: CheckArgs, shell: &Shell) -> Result<()> {
    let opts = CheckOptions {
        adapter: args.adapter,
        project: args.project,
        overrides: ConfigOverrides {
            output: args.output,
            image_service: args.image_service,
        },
    };

    shell.status(
        Status::Checking,
        format!("adapter manifest {}", opts.adapter.display()),
    );

    // Diagnostics are printed by the shell as they are emitted
    let outcome = check(&opts, shell)?;
    let result = outcome.report.result;

    shell.verbose(format_args!(
        "output mode `{}`, image service `{}`",
        outcome.config.output,
        outcome.config.image_entrypoint().unwrap_or("none")
    ));
    for diagnostic in &outcome.report.diagnostics {
        shell.verbose(format_args!(
            "{} reported for {}",
            diagnostic.level(),
            diagnostic.feature()
        ));
    }

    if shell.is_json() {
        shell.json_event(&serde_json::json!({
            "reason": "validation-finished",
            "adapter": outcome.manifest.name,
            "output": outcome.config.output,
            "imageService": outcome.config.image_entrypoint(),
            "result": result,
            "valid": result.is_valid(),
        }));
    } else if !shell.is_quiet() {
        println!(
            "{} (output: {}, image service: {})",
            outcome.manifest.display_name(),
            outcome.config.output,
            outcome.config.image_entrypoint().unwrap_or("none")
        );
        let resolved = outcome.manifest.features.resolve();
        for feature in Feature::ALL {
            let verdict = if result.get(feature) { "ok" } else { "FAILED" };
            println!(
                "  {:<14} {:<13} {}",
                feature.as_str(),
                resolved.support_kind(feature).as_str(),
                verdict
            );
        }
    }

    match UnsupportedFeaturesError::from_result(&outcome.manifest.name, &result) {
        Some(err) if !args.allow_unsupported => Err(err.into()),
        Some(err) => {
            shell.note(format!("{} (allowed)", err));
            Ok(())
        }
        None => {
            shell.status(Status::Finished, "all features supported");
            Ok(())
        }
    }
}
