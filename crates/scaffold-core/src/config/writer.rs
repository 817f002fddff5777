//! Non-destructive config file writing

use crate::error::{Result, ScaffoldError};
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Default file name for module and project configs
pub const CONFIG_FILE_NAME: &str = "garden.yml";

/// Result of a config write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// A file already existed at the destination and was left untouched
    SkippedExisting,
}

/// Write `config` as YAML to `destination` unless a file is already there.
///
/// Parent directories are created first. Serialization happens before the
/// file is opened, so a config that fails to serialize leaves nothing behind.
pub async fn write_config<T: Serialize>(config: &T, destination: &Path) -> Result<WriteOutcome> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| ScaffoldError::io(parent, e))?;
    }

    let exists = fs::try_exists(destination)
        .await
        .map_err(|e| ScaffoldError::io(destination, e))?;
    if exists {
        tracing::debug!(path = %destination.display(), "config exists, skipping");
        return Ok(WriteOutcome::SkippedExisting);
    }

    let contents = serde_yaml::to_string(config).map_err(|source| ScaffoldError::Serialize {
        path: destination.to_path_buf(),
        source,
    })?;

    create_new(destination, contents.as_bytes()).await
}

/// Create `destination` with `contents`, or skip if it appeared meanwhile
async fn create_new(destination: &Path, contents: &[u8]) -> Result<WriteOutcome> {
    let mut file = match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(destination)
        .await
    {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            tracing::debug!(path = %destination.display(), "config exists, skipping");
            return Ok(WriteOutcome::SkippedExisting);
        }
        Err(e) => return Err(ScaffoldError::io(destination, e)),
    };

    file.write_all(contents)
        .await
        .map_err(|e| ScaffoldError::io(destination, e))?;
    file.flush()
        .await
        .map_err(|e| ScaffoldError::io(destination, e))?;
    tracing::debug!(path = %destination.display(), "config written");

    Ok(WriteOutcome::Written)
}
