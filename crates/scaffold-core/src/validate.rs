//! Identifier validation for project, module and directory names
//!
//! Names end up in paths and config files, so they follow a DNS-label style
//! grammar: lowercase letters, digits and dashes, starting with a letter,
//! never ending with a dash or containing consecutive dashes, at most
//! 63 characters long.

use crate::error::{Result, ScaffoldError};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Maximum identifier length
pub const MAX_IDENTIFIER_LEN: usize = 63;

/// What kind of name is being validated, used in user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameContext {
    Project,
    Module,
}

impl NameContext {
    pub fn label(&self) -> &'static str {
        match self {
            NameContext::Project => "project",
            NameContext::Module => "module",
        }
    }
}

impl fmt::Display for NameContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lowercase DNS-label grammar; length is checked separately
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z](?:[a-z0-9]|-[a-z0-9])*$").expect("identifier pattern compiles")
});

/// Check a name against the identifier grammar.
///
/// Returns a description of the first violation found.
pub fn check_identifier(name: &str) -> std::result::Result<(), String> {
    if name.len() > MAX_IDENTIFIER_LEN {
        return Err(format!(
            "must be at most {} characters long",
            MAX_IDENTIFIER_LEN
        ));
    }

    if IDENTIFIER.is_match(name) {
        return Ok(());
    }

    Err(describe_violation(name))
}

fn describe_violation(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        None => return "must not be empty".to_string(),
        Some(c) if !c.is_ascii_lowercase() => {
            return "must start with a lowercase letter".to_string()
        }
        Some(_) => {}
    }

    if let Some(c) = chars.find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')) {
        return format!(
            "may only contain lowercase letters, numbers and dashes (found '{}')",
            c
        );
    }

    if name.contains("--") {
        return "must not contain consecutive dashes".to_string();
    }

    "must not end with a dash".to_string()
}

/// Validate an already-trimmed name, returning it unchanged on success
pub fn validate(name: &str, context: NameContext) -> Result<String> {
    check_identifier(name).map_err(|reason| ScaffoldError::Validation {
        name: name.to_string(),
        context,
        reason,
    })?;
    Ok(name.to_string())
}

/// Input hook for the module name prompt: trims, then checks the grammar
pub fn module_name_hook(input: &str) -> std::result::Result<(), String> {
    check_identifier(input.trim())
        .map_err(|reason| format!("Invalid module name, please try again\nError: {}", reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names_returned_unchanged() {
        for name in ["a", "my-api", "service2", "a1-b2-c3", "x-1"] {
            assert_eq!(validate(name, NameContext::Module).unwrap(), name);
        }
    }

    #[test]
    fn test_invalid_names_rejected() {
        for name in [
            "",
            "My-api",
            "1api",
            "-api",
            "api-",
            "my--api",
            "my_api",
            "my api",
            ".git",
        ] {
            assert!(
                validate(name, NameContext::Module).is_err(),
                "expected '{}' to be rejected",
                name
            );
        }
    }

    #[test]
    fn test_length_limit() {
        let ok = "a".repeat(MAX_IDENTIFIER_LEN);
        let too_long = "a".repeat(MAX_IDENTIFIER_LEN + 1);
        assert!(validate(&ok, NameContext::Project).is_ok());
        assert!(validate(&too_long, NameContext::Project).is_err());
    }

    #[test]
    fn test_error_carries_name_and_context() {
        let err = validate("Bad_Name", NameContext::Project).unwrap_err();
        match &err {
            ScaffoldError::Validation { name, context, .. } => {
                assert_eq!(name, "Bad_Name");
                assert_eq!(*context, NameContext::Project);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().starts_with("Bad_Name is an invalid project name"));
    }

    #[test]
    fn test_violation_reasons() {
        assert_eq!(check_identifier("").unwrap_err(), "must not be empty");
        assert_eq!(
            check_identifier("9lives").unwrap_err(),
            "must start with a lowercase letter"
        );
        assert!(check_identifier("my_api").unwrap_err().contains("found '_'"));
        assert_eq!(
            check_identifier("my--api").unwrap_err(),
            "must not contain consecutive dashes"
        );
        assert_eq!(check_identifier("api-").unwrap_err(), "must not end with a dash");
    }

    #[test]
    fn test_module_name_hook_trims_input() {
        assert!(module_name_hook("  my-api  ").is_ok());
        let message = module_name_hook("my api").unwrap_err();
        assert!(message.starts_with("Invalid module name, please try again"));
    }
}
