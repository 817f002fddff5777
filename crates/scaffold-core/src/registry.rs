//! Registry of the module types that can be scaffolded
//!
//! The set of module types is closed: each variant knows the provider it
//! needs and the config template it contributes (see `config::template`).

use std::fmt;
use std::str::FromStr;

/// Supported module types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleType {
    Container,
    Function,
    NpmPackage,
}

impl ModuleType {
    /// All module types, in presentation order
    pub const ALL: [ModuleType; 3] = [
        ModuleType::Container,
        ModuleType::Function,
        ModuleType::NpmPackage,
    ];

    /// Identifier used in config files and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            ModuleType::Container => "container",
            ModuleType::Function => "function",
            ModuleType::NpmPackage => "npm-package",
        }
    }

    /// Provider required to run this module type locally
    pub fn provider(&self) -> &'static str {
        match self {
            ModuleType::Container => "local-kubernetes",
            ModuleType::Function => "local-google-cloud-functions",
            ModuleType::NpmPackage => "npm-package",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModuleType::Container => "container",
            ModuleType::Function => "google-cloud-function",
            ModuleType::NpmPackage => "npm package",
        }
    }

    pub fn is_experimental(&self) -> bool {
        !matches!(self, ModuleType::Container)
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for ModuleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s).ok_or_else(|| {
            let available: Vec<&str> = ModuleType::ALL.iter().map(|t| t.id()).collect();
            format!(
                "Module type '{}' not available. Available types: {}",
                s,
                available.join(", ")
            )
        })
    }
}

/// A module type as presented in a selection prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeChoice {
    pub label: &'static str,
    pub module_type: ModuleType,
    pub experimental: bool,
}

/// Look up a module type by identifier
pub fn lookup(type_id: &str) -> Option<ModuleType> {
    ModuleType::ALL.into_iter().find(|t| t.id() == type_id)
}

/// Choices for the module type prompt
pub fn list_choices() -> Vec<TypeChoice> {
    ModuleType::ALL
        .iter()
        .map(|t| TypeChoice {
            label: t.label(),
            module_type: *t,
            experimental: t.is_experimental(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_types() {
        for id in ["container", "function", "npm-package"] {
            let module_type = lookup(id).unwrap();
            assert_eq!(module_type.id(), id);
        }
    }

    #[test]
    fn test_lookup_unknown_type() {
        assert!(lookup("helm").is_none());
        assert!(lookup("Container").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_providers() {
        assert_eq!(ModuleType::Container.provider(), "local-kubernetes");
        assert_eq!(ModuleType::Function.provider(), "local-google-cloud-functions");
        assert_eq!(ModuleType::NpmPackage.provider(), "npm-package");
    }

    #[test]
    fn test_choices_follow_registry_order() {
        let choices = list_choices();
        let types: Vec<ModuleType> = choices.iter().map(|c| c.module_type).collect();
        assert_eq!(types, ModuleType::ALL.to_vec());
        assert!(!choices[0].experimental);
        assert!(choices[1].experimental);
    }

    #[test]
    fn test_from_str_lists_available_types() {
        let err = "helm".parse::<ModuleType>().unwrap_err();
        assert!(err.contains("container, function, npm-package"));
        assert_eq!("function".parse::<ModuleType>(), Ok(ModuleType::Function));
    }
}
