//! Discovery of module directories under a parent directory

use crate::error::{Result, ScaffoldError};
use std::path::{Component, Path};
use tokio::fs;
use walkdir::WalkDir;

/// List the direct child directories of `parent` that could hold a module.
///
/// Hidden entries are skipped. Candidates are checked concurrently but
/// returned in directory-listing order.
pub async fn scan(parent: &Path) -> Result<Vec<String>> {
    let metadata = match fs::metadata(parent).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ScaffoldError::parameter(format!(
                "Module directory {} not found",
                parent.display()
            )));
        }
        Err(e) => return Err(ScaffoldError::io(parent, e)),
    };
    if !metadata.is_dir() {
        return Err(ScaffoldError::parameter(format!(
            "Module directory {} is not a directory",
            parent.display()
        )));
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(parent).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(parent).to_path_buf();
            ScaffoldError::io(path, e.into())
        })?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    let checks: Vec<_> = names
        .into_iter()
        .map(|name| {
            let path = parent.join(&name);
            tokio::spawn(async move {
                let valid = is_valid_module_dir(&path).await;
                (name, valid)
            })
        })
        .collect();

    let mut candidates = Vec::new();
    for check in checks {
        let (name, valid) = check.await?;
        if valid? {
            candidates.push(name);
        } else {
            tracing::debug!(entry = %name, "not a module directory candidate");
        }
    }

    Ok(candidates)
}

async fn is_valid_module_dir(path: &Path) -> Result<bool> {
    if path.file_name().map(Path::new).is_some_and(is_hidden) {
        return Ok(false);
    }
    let metadata = fs::metadata(path)
        .await
        .map_err(|e| ScaffoldError::io(path, e))?;
    Ok(metadata.is_dir())
}

/// True if any segment of `path` starts with a dot (`.` and `..` excluded).
///
/// Names such as `..foo` count as hidden too.
pub fn is_hidden(path: &Path) -> bool {
    path.components().any(|c| match c {
        Component::Normal(segment) => segment.to_string_lossy().starts_with('.'),
        _ => false,
    })
}
