//! Config composition and persistence
//!
//! This module provides:
//! - Per-type config templates
//! - Module and project config composition
//! - Idempotent config file writing

pub mod composer;
pub mod template;
pub mod writer;

pub use composer::{
    compose_module, compose_project, describe, ComposedModuleConfig, EnvironmentConfig,
    ModuleDraft, ProjectConfig, ProviderConfig,
};
pub use writer::{write_config, WriteOutcome, CONFIG_FILE_NAME};
