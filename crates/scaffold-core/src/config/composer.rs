//! Composition of module and project config documents

use super::template::capitalize;
use crate::registry::ModuleType;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

/// Name of the only environment in a freshly scaffolded project
pub const LOCAL_ENVIRONMENT: &str = "local";

/// A module selected for scaffolding, not yet composed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDraft {
    pub name: String,
    pub module_type: ModuleType,
    /// Directory the module directory is created in
    pub target_dir: PathBuf,
}

impl ModuleDraft {
    pub fn new(
        name: impl Into<String>,
        module_type: ModuleType,
        target_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            module_type,
            target_dir: target_dir.into(),
        }
    }
}

/// A module config ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedModuleConfig {
    pub name: String,
    pub module_type: ModuleType,
    pub description: String,
    pub path: PathBuf,
    /// Base descriptor overlaid with the type template
    pub body: Mapping,
}

/// On-disk shape of a module config file
#[derive(Debug, Serialize)]
pub struct ModuleDocument<'a> {
    pub module: &'a Mapping,
}

impl ComposedModuleConfig {
    pub fn module_dir(&self) -> PathBuf {
        self.path.join(&self.name)
    }

    pub fn config_path(&self, file_name: &str) -> PathBuf {
        self.module_dir().join(file_name)
    }

    pub fn document(&self) -> ModuleDocument<'_> {
        ModuleDocument { module: &self.body }
    }
}

/// Project-level config listing the providers each module needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub environments: Vec<EnvironmentConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub name: String,
    pub providers: Vec<ProviderConfig>,
    pub variables: Mapping,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub name: String,
}

/// Compose the config for a single module.
///
/// Template keys replace base keys of the same name; nested values are
/// never merged.
pub fn compose_module(draft: &ModuleDraft) -> ComposedModuleConfig {
    let description = describe(&draft.name, draft.module_type);

    let mut body = Mapping::new();
    body.insert("name".into(), Value::from(draft.name.as_str()));
    body.insert("type".into(), Value::from(draft.module_type.id()));
    body.insert("description".into(), Value::from(description.as_str()));

    for (key, value) in draft.module_type.template(&draft.name) {
        body.insert(key, value);
    }

    ComposedModuleConfig {
        name: draft.name.clone(),
        module_type: draft.module_type,
        description,
        path: draft.target_dir.clone(),
        body,
    }
}

/// Compose the project config, one provider entry per module (in order,
/// duplicates kept).
pub fn compose_project(name: &str, module_types: &[ModuleType]) -> ProjectConfig {
    let providers = module_types
        .iter()
        .map(|t| ProviderConfig {
            name: t.provider().to_string(),
        })
        .collect();

    ProjectConfig {
        name: name.to_string(),
        environments: vec![EnvironmentConfig {
            name: LOCAL_ENVIRONMENT.to_string(),
            providers,
            variables: Mapping::new(),
        }],
    }
}

/// Human description, e.g. `my-api` + container -> `My Api Container`
pub fn describe(name: &str, module_type: ModuleType) -> String {
    format!("{} {}", title_case(name), title_case(module_type.id()))
}

fn title_case(input: &str) -> String {
    input
        .split(|c: char| c == '-' || c == '_')
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Directory name used as the default project or module name
pub fn default_name(dir: &Path) -> Option<String> {
    dir.file_name().map(|n| n.to_string_lossy().into_owned())
}
