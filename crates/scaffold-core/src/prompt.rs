//! Interactive collection of modules to scaffold
//!
//! Prompts are strictly sequential: every call blocks until the user has
//! answered, and the next prompt is only issued afterwards.

use crate::error::Result;
use crate::registry::{list_choices, ModuleType, TypeChoice};
use crate::validate::{module_name_hook, validate, NameContext};

/// Validation hook run on every submitted input, before it is accepted.
/// An `Err` message is shown to the user and the input is asked again.
pub type InputHook = fn(&str) -> std::result::Result<(), String>;

/// Source of user answers
pub trait Prompter {
    fn confirm(&mut self, message: &str) -> Result<bool>;

    fn input(&mut self, message: &str, validate: InputHook) -> Result<String>;

    fn select_type(&mut self, message: &str, choices: &[TypeChoice]) -> Result<ModuleType>;
}

/// A module collected by [`collect_modules`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewModule {
    pub name: String,
    pub module_type: ModuleType,
}

/// Ask whether to initialize a module for `dir` and, if so, its type.
///
/// Returns `None` when the user declines.
pub fn existing_module_prompt<P: Prompter>(prompter: &mut P, dir: &str) -> Result<Option<ModuleType>> {
    if !prompter.confirm(&format!("Add module config for {}?", dir))? {
        return Ok(None);
    }
    let module_type = prompter.select_type("Module type", &list_choices())?;
    Ok(Some(module_type))
}

enum CollectState {
    Collecting(Vec<NewModule>),
    Done(Vec<NewModule>),
}

/// Repeatedly offer to add a module until the user declines
pub fn collect_modules<P: Prompter>(prompter: &mut P) -> Result<Vec<NewModule>> {
    let mut state = CollectState::Collecting(Vec::new());

    loop {
        state = match state {
            CollectState::Collecting(mut added) => {
                if prompter.confirm(&add_module_message(&added))? {
                    added.push(new_module_prompt(prompter)?);
                    CollectState::Collecting(added)
                } else {
                    CollectState::Done(added)
                }
            }
            CollectState::Done(added) => return Ok(added),
        };
    }
}

fn new_module_prompt<P: Prompter>(prompter: &mut P) -> Result<NewModule> {
    let input = prompter.input("Enter module name", module_name_hook)?;
    let name = validate(input.trim(), NameContext::Module)?;
    let module_type = prompter.select_type("Module type", &list_choices())?;
    Ok(NewModule { name, module_type })
}

fn add_module_message(added: &[NewModule]) -> String {
    if added.is_empty() {
        "Would you like to add a module to your project?".to_string()
    } else {
        let names: Vec<&str> = added.iter().map(|m| m.name.as_str()).collect();
        format!("Add another module? (current modules: {})", names.join(","))
    }
}
