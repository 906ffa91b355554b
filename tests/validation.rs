//! Feature validation behaviour as seen by library callers.

use adapter_features::core::{
    AssetsFeature, Feature, FeatureMap, OutputMode, ProjectConfig, SupportKind, SHARP_ENTRYPOINT,
    SQUOOSH_ENTRYPOINT,
};
use adapter_features::util::logger::{Level, RecordingLogger, TracingLogger};
use adapter_features::validate::{evaluate, validate_supported_features, ValidationResult};

const ADAPTER: &str = "@example/adapter";

fn map_with(feature: Feature, kind: SupportKind) -> FeatureMap {
    match feature {
        Feature::StaticOutput => FeatureMap::new().with_static_output(kind),
        Feature::HybridOutput => FeatureMap::new().with_hybrid_output(kind),
        Feature::ServerOutput => FeatureMap::new().with_server_output(kind),
        Feature::Assets => FeatureMap::new().with_assets(AssetsFeature::new(kind)),
    }
}

fn mode_for(feature: Feature) -> Option<OutputMode> {
    match feature {
        Feature::StaticOutput => Some(OutputMode::Static),
        Feature::HybridOutput => Some(OutputMode::Hybrid),
        Feature::ServerOutput => Some(OutputMode::Server),
        Feature::Assets => None,
    }
}

/// Messages logged about a single feature.
fn diagnostics_for(feature: Feature, kind: SupportKind, config: &ProjectConfig) -> Vec<Level> {
    let report = evaluate(&map_with(feature, kind).resolve(), config);
    report
        .diagnostics
        .iter()
        .filter(|diag| diag.feature() == feature)
        .map(|diag| diag.level())
        .collect()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_stable_static_output_is_silent() {
    let features = FeatureMap::new().with_static_output(SupportKind::Stable);
    let config = ProjectConfig::new(OutputMode::Static);
    let logger = RecordingLogger::new();

    let result = validate_supported_features(ADAPTER, &features, &config, &logger);

    assert!(result.static_output);
    assert!(logger
        .records()
        .iter()
        .all(|record| !record.message.contains("staticOutput")));
    // Only assets (undeclared, always used) complains
    assert_eq!(logger.len(), 1);
}

#[test]
fn test_unsupported_server_output_is_an_error() {
    let features = FeatureMap::new().with_server_output(SupportKind::Unsupported);
    let config = ProjectConfig::new(OutputMode::Server);
    let logger = RecordingLogger::new();

    let result = validate_supported_features(ADAPTER, &features, &config, &logger);

    assert!(!result.server_output);
    let errors: Vec<_> = logger
        .errors()
        .into_iter()
        .filter(|record| record.message.contains("serverOutput"))
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "The feature serverOutput is not supported (used by @example/adapter)."
    );
    assert_eq!(errors[0].scope.as_deref(), Some("config"));
}

#[test]
fn test_sharp_incompatibility_overrides_stable_assets() {
    let features =
        FeatureMap::new().with_assets(AssetsFeature::new(SupportKind::Stable).with_sharp(false));
    let config = ProjectConfig::new(OutputMode::Static).with_image_service(SHARP_ENTRYPOINT);
    let logger = RecordingLogger::new();

    let result = validate_supported_features(ADAPTER, &features, &config, &logger);

    assert!(!result.assets);
    let warnings: Vec<_> = logger
        .warnings()
        .into_iter()
        .filter(|record| record.message.contains("image service"))
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].message,
        "The currently selected adapter `@example/adapter` is not compatible \
         with the image service \"Sharp\"."
    );
    assert_eq!(warnings[0].scope, None);
    assert!(logger
        .errors()
        .iter()
        .all(|record| !record.message.contains("assets")));
}

#[test]
fn test_deprecated_hybrid_warns_when_unused() {
    let features = FeatureMap::new().with_hybrid_output(SupportKind::Deprecated);
    let config = ProjectConfig::new(OutputMode::Static);
    let logger = RecordingLogger::new();

    let result = validate_supported_features(ADAPTER, &features, &config, &logger);

    assert!(result.hybrid_output);
    let warnings = logger.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].message,
        "The feature is deprecated and will be removed in the future (used by @example/adapter)."
    );
}

#[test]
fn test_empty_map_fails_everything_in_use() {
    let config = ProjectConfig::new(OutputMode::Static).with_image_service(SQUOOSH_ENTRYPOINT);
    let logger = RecordingLogger::new();

    let result = validate_supported_features(ADAPTER, &FeatureMap::new(), &config, &logger);

    assert_eq!(
        result,
        ValidationResult {
            static_output: false,
            hybrid_output: true,
            server_output: true,
            assets: false,
        }
    );
    // static output error + Squoosh incompatibility warning
    assert_eq!(logger.errors().len(), 1);
    assert_eq!(logger.warnings().len(), 1);
}

#[test]
fn test_empty_map_with_sharp_passes_inactive_output_modes() {
    let config = ProjectConfig::new(OutputMode::Static).with_image_service(SHARP_ENTRYPOINT);
    let logger = RecordingLogger::new();

    let result = validate_supported_features(ADAPTER, &FeatureMap::new(), &config, &logger);

    // Undeclared hybrid and server output are unsupported but not activated
    assert!(result.hybrid_output);
    assert!(result.server_output);
    assert!(!result.static_output);
    assert!(!result.assets);
    assert_eq!(
        result.unsupported_features(),
        vec![Feature::StaticOutput, Feature::Assets]
    );

    let errors = logger.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("staticOutput"));
    let warnings = logger.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.ends_with("the image service \"Sharp\"."));
}

#[test]
fn test_squoosh_compatible_adapter_passes() {
    let features = FeatureMap::new()
        .with_static_output(SupportKind::Stable)
        .with_assets(
            AssetsFeature::new(SupportKind::Stable)
                .with_sharp(false)
                .with_squoosh(true),
        );
    let config = ProjectConfig::new(OutputMode::Static).with_image_service(SQUOOSH_ENTRYPOINT);
    let logger = RecordingLogger::new();

    let result = validate_supported_features(ADAPTER, &features, &config, &logger);

    assert!(result.is_valid());
    assert!(logger.is_empty());
}

// ============================================================================
// Policy properties
// ============================================================================

#[test]
fn test_stable_is_always_allowed_and_silent() {
    for feature in Feature::ALL {
        for output in [OutputMode::Static, OutputMode::Hybrid, OutputMode::Server] {
            let config = ProjectConfig::new(output);
            let report = evaluate(&map_with(feature, SupportKind::Stable).resolve(), &config);
            assert!(report.result.get(feature), "{} in {}", feature, output);
            assert!(diagnostics_for(feature, SupportKind::Stable, &config).is_empty());
        }
    }
}

#[test]
fn test_deprecated_and_experimental_warn_exactly_once() {
    for kind in [SupportKind::Deprecated, SupportKind::Experimental] {
        for feature in Feature::ALL {
            for output in [OutputMode::Static, OutputMode::Hybrid, OutputMode::Server] {
                let config = ProjectConfig::new(output);
                let report = evaluate(&map_with(feature, kind).resolve(), &config);
                assert!(report.result.get(feature));
                assert_eq!(
                    diagnostics_for(feature, kind, &config),
                    vec![Level::Warn],
                    "{} declared {} in {}",
                    feature,
                    kind,
                    output
                );
            }
        }
    }
}

#[test]
fn test_unsupported_fails_iff_used() {
    for feature in Feature::ALL {
        for output in [OutputMode::Static, OutputMode::Hybrid, OutputMode::Server] {
            let config = ProjectConfig::new(output);
            let used = mode_for(feature).map_or(true, |mode| mode == output);
            let report = evaluate(&map_with(feature, SupportKind::Unsupported).resolve(), &config);

            assert_eq!(report.result.get(feature), !used, "{} in {}", feature, output);
            let expected = if used { vec![Level::Error] } else { vec![] };
            assert_eq!(
                diagnostics_for(feature, SupportKind::Unsupported, &config),
                expected
            );
        }
    }
}

#[test]
fn test_validation_is_idempotent_but_logs_again() {
    let features = FeatureMap::new()
        .with_static_output(SupportKind::Experimental)
        .with_server_output(SupportKind::Unsupported);
    let config = ProjectConfig::new(OutputMode::Server).with_image_service(SHARP_ENTRYPOINT);
    let logger = RecordingLogger::new();

    let first = validate_supported_features(ADAPTER, &features, &config, &logger);
    let first_records = logger.records();
    let second = validate_supported_features(ADAPTER, &features, &config, &logger);
    let all_records = logger.records();

    assert_eq!(first, second);
    assert_eq!(all_records.len(), first_records.len() * 2);
    assert_eq!(&all_records[first_records.len()..], first_records.as_slice());
}

#[test]
fn test_inputs_are_not_modified() {
    let features = FeatureMap::new().with_hybrid_output(SupportKind::Deprecated);
    let config = ProjectConfig::new(OutputMode::Hybrid);
    let (features_before, config_before) = (features.clone(), config.clone());

    validate_supported_features(ADAPTER, &features, &config, &TracingLogger);

    assert_eq!(features, features_before);
    assert_eq!(config, config_before);
}
