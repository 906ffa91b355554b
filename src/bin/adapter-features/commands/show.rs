//! `adapter-features show` command
//!
//! Prints the feature map an adapter declares, with missing entries filled in.

use anyhow::Result;

use crate::cli::ShowArgs;
use adapter_features::core::Feature;
use adapter_features::util::config::load_adapter_manifest;
use adapter_features::util::shell::Shell;

pub fn execute(args: ShowArgs, shell: &Shell) -> Result<()> {
    let manifest = load_adapter_manifest(&args.adapter)?;
    let resolved = manifest.features.resolve();

    if shell.is_json() {
        shell.json_event(&serde_json::json!({
            "reason": "adapter-features",
            "adapter": manifest.name,
            "version": manifest.version.as_ref().map(|v| v.to_string()),
            "features": resolved,
        }));
        return Ok(());
    }

    println!("Adapter: {}", manifest.display_name());
    println!();

    println!("Features:");
    for feature in Feature::ALL {
        let declared = match feature {
            Feature::StaticOutput => manifest.features.static_output.is_some(),
            Feature::HybridOutput => manifest.features.hybrid_output.is_some(),
            Feature::ServerOutput => manifest.features.server_output.is_some(),
            Feature::Assets => manifest.features.assets.is_some(),
        };
        let suffix = if declared { "" } else { " (default)" };
        println!(
            "  {:<14} {}{}",
            feature.as_str(),
            resolved.support_kind(feature),
            suffix
        );
    }
    println!();

    println!("Image Services:");
    println!("  Sharp:    {}", resolved.assets.sharp_compatible);
    println!("  Squoosh:  {}", resolved.assets.squoosh_compatible);

    Ok(())
}
