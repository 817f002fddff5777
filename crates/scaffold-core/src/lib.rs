//! Scaffold Core - Shared library for project and module scaffolding CLIs
//!
//! This library turns user answers (module name, module type, target
//! directory) into composed config documents and writes them to disk
//! without ever overwriting an existing config file.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Name validation, the module type registry,
//!   config composition, directory scanning and idempotent config writing
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and the
//!   `new_module` / `new_project` flows, driven through the `Prompter` and
//!   `Reporter` traits
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompter and reporter
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffold_core::config::{compose_module, write_config, ModuleDraft};
//! use scaffold_core::ModuleType;
//!
//! let draft = ModuleDraft::new("my-api", ModuleType::Container, "/proj");
//! let module = compose_module(&draft);
//! let outcome = write_config(&module.document(), &module.config_path("garden.yml")).await?;
//! ```

pub mod config;
pub mod error;
pub mod product;
pub mod prompt;
pub mod registry;
pub mod report;
pub mod scaffold;
pub mod scan;
pub mod validate;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types for convenience
pub use config::{ComposedModuleConfig, ModuleDraft, ProjectConfig, WriteOutcome};
pub use error::{Result, ScaffoldError};
pub use product::ProductConfig;
pub use prompt::Prompter;
pub use registry::ModuleType;
pub use report::{Activity, Reporter};
pub use scaffold::{new_module, new_project, NewModuleArgs, NewProjectArgs, ProjectReport};
pub use validate::NameContext;
