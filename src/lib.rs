//! Adapter feature validation.
//!
//! Adapters declare which features they support (static, hybrid and server
//! output, and the asset pipeline) and at what level. This crate checks a
//! project configuration against those declarations and reports, per feature,
//! whether the adapter can serve it, with warnings for deprecated and
//! experimental support.

pub mod core;
pub mod ops;
pub mod util;
pub mod validate;

pub use crate::core::{
    AdapterManifest, AssetsFeature, Feature, FeatureMap, ImageService, OutputMode, ProjectConfig,
    SupportKind,
};

pub use util::logger::Logger;
pub use validate::{validate_supported_features, ValidationReport, ValidationResult};
