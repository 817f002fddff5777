//! Error types for the scaffolding engine

use crate::validate::NameContext;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scaffolding a project or module
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Missing or contradictory command input
    #[error("{0}")]
    Parameter(String),

    /// A name failed the identifier grammar
    #[error("{name} is an invalid {context} name: {reason}")]
    Validation {
        name: String,
        context: NameContext,
        reason: String,
    },

    #[error("Filesystem error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config for {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Prompt or terminal output failure
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ScaffoldError {
    pub(crate) fn parameter(message: impl Into<String>) -> Self {
        Self::Parameter(message.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
