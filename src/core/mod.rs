//! Core data structures.
//!
//! This module contains the inputs to feature validation:
//! - Support kinds and feature identities
//! - Adapter feature maps (declared and resolved)
//! - Project configuration
//! - Adapter manifests

pub mod adapter;
pub mod features;
pub mod project;
pub mod support;

pub use adapter::AdapterManifest;
pub use features::{AssetsFeature, FeatureMap, ResolvedAssets, ResolvedFeatureMap};
pub use project::{
    ConfigOverrides, ImageService, OutputMode, OutputModeParseError, ProjectConfig,
    SHARP_ENTRYPOINT, SQUOOSH_ENTRYPOINT,
};
pub use support::{Feature, SupportKind, SupportKindParseError};
