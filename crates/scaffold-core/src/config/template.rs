//! Per-type config templates overlaid onto the base module descriptor

use crate::registry::ModuleType;
use serde_yaml::{Mapping, Value};

/// Container port exposed by the default container service
pub const DEFAULT_CONTAINER_PORT: u64 = 8080;

impl ModuleType {
    /// Type-specific top-level config fields for a module called `module_name`
    pub fn template(&self, module_name: &str) -> Mapping {
        match self {
            ModuleType::Container => container_template(module_name),
            ModuleType::Function => function_template(module_name),
            ModuleType::NpmPackage => Mapping::new(),
        }
    }
}

fn container_template(module_name: &str) -> Mapping {
    let port = mapping([
        ("name", Value::from("http")),
        ("containerPort", Value::from(DEFAULT_CONTAINER_PORT)),
    ]);
    let endpoint = mapping([
        ("paths", Value::Sequence(vec![Value::from("/")])),
        ("port", Value::from("http")),
    ]);
    let service = mapping([
        ("name", Value::from(format!("{}-service", module_name))),
        ("ports", Value::Sequence(vec![Value::Mapping(port)])),
        ("endpoints", Value::Sequence(vec![Value::Mapping(endpoint)])),
    ]);

    mapping([("services", Value::Sequence(vec![Value::Mapping(service)]))])
}

fn function_template(module_name: &str) -> Mapping {
    let function_name = format!("{}-function", module_name);
    let entrypoint = camel_case(&function_name);
    let function = mapping([
        ("name", Value::from(function_name)),
        ("entrypoint", Value::from(entrypoint)),
    ]);

    mapping([("functions", Value::Sequence(vec![Value::Mapping(function)]))])
}

fn mapping<const N: usize>(entries: [(&str, Value); N]) -> Mapping {
    entries
        .into_iter()
        .map(|(key, value)| (Value::from(key), value))
        .collect()
}

/// `my-api-function` -> `myApiFunction`
pub(crate) fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let words = input
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty());

    for (i, word) in words.enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
        } else {
            out.push_str(&capitalize(&lower));
        }
    }
    out
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
