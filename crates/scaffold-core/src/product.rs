//! Product configuration trait for CLI binaries
//!
//! This trait defines the conventions a product built on this library
//! scaffolds with: its identity, where config files go and how the project
//! root is resolved.

use crate::config::CONFIG_FILE_NAME;
use crate::error::{Result, ScaffoldError};
use std::path::PathBuf;

/// Configuration trait for CLI products
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Environment variable name for overriding the project root
    fn project_root_env(&self) -> &'static str;

    /// File name used for module and project configs
    fn config_file_name(&self) -> &'static str {
        CONFIG_FILE_NAME
    }

    /// Project root: the override from the environment if set, else the
    /// current working directory
    fn project_root(&self) -> Result<PathBuf> {
        let current_dir = std::env::current_dir().map_err(|e| ScaffoldError::io(".", e))?;
        match std::env::var(self.project_root_env()) {
            Ok(root) if !root.trim().is_empty() => {
                let p = PathBuf::from(root.trim());
                Ok(if p.is_absolute() { p } else { current_dir.join(p) })
            }
            _ => Ok(current_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct EnvProduct(&'static str);

    impl ProductConfig for EnvProduct {
        fn display_name(&self) -> &'static str {
            "Test"
        }

        fn docs_url(&self) -> &'static str {
            "https://example.com/docs"
        }

        fn cli_description(&self) -> &'static str {
            "test product"
        }

        fn project_root_env(&self) -> &'static str {
            self.0
        }
    }

    #[test]
    fn test_project_root_absolute_override() {
        let product = EnvProduct("SCAFFOLD_TEST_ROOT_ABSOLUTE");
        let root = std::env::temp_dir().join("scaffold-root");
        std::env::set_var(product.0, &root);

        assert_eq!(product.project_root().unwrap(), root);
        std::env::remove_var(product.0);
    }

    #[test]
    fn test_project_root_relative_override() {
        let product = EnvProduct("SCAFFOLD_TEST_ROOT_RELATIVE");
        std::env::set_var(product.0, " projects/demo ");

        let expected = std::env::current_dir().unwrap().join("projects/demo");
        assert_eq!(product.project_root().unwrap(), expected);
        std::env::remove_var(product.0);
    }

    #[test]
    fn test_project_root_blank_override_uses_current_dir() {
        let product = EnvProduct("SCAFFOLD_TEST_ROOT_BLANK");
        std::env::set_var(product.0, "   ");

        assert_eq!(
            product.project_root().unwrap(),
            std::env::current_dir().unwrap()
        );
        std::env::remove_var(product.0);
    }

    #[test]
    fn test_project_root_unset_uses_current_dir() {
        let product = EnvProduct("SCAFFOLD_TEST_ROOT_UNSET");
        std::env::remove_var(product.0);

        assert_eq!(
            product.project_root().unwrap(),
            std::env::current_dir().unwrap()
        );
    }
}
