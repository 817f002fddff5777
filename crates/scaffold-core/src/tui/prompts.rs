//! Charm-style CLI prompts and progress output using cliclack

use crate::error::Result;
use crate::prompt::{InputHook, Prompter};
use crate::registry::{ModuleType, TypeChoice};
use crate::report::{Activity, Reporter};
use colored::Colorize;

/// Prompts the user on the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        let answer = cliclack::confirm(message).initial_value(true).interact()?;
        Ok(answer)
    }

    fn input(&mut self, message: &str, validate: InputHook) -> Result<String> {
        let input: String = cliclack::input(message)
            .validate(move |input: &String| validate(input))
            .interact()?;
        Ok(input.trim().to_string())
    }

    fn select_type(&mut self, message: &str, choices: &[TypeChoice]) -> Result<ModuleType> {
        let mut select = cliclack::select(message);
        for choice in choices {
            let hint = if choice.experimental {
                format!("({})", "experimental".red().italic())
            } else {
                String::new()
            };
            select = select.item(choice.module_type, choice.label, hint);
        }
        Ok(select.interact()?)
    }
}

/// Reports progress inline with the prompts
#[derive(Debug, Clone, Copy, Default)]
pub struct ClackReporter;

/// A spinner for a running activity
pub struct ClackActivity {
    spinner: cliclack::ProgressBar,
}

impl Reporter for ClackReporter {
    type Activity = ClackActivity;

    fn header(&self, message: &str) -> Result<()> {
        cliclack::intro(message)?;
        Ok(())
    }

    fn info(&self, message: &str) -> Result<()> {
        cliclack::log::info(message)?;
        Ok(())
    }

    fn start(&self, message: &str) -> Result<ClackActivity> {
        let spinner = cliclack::spinner();
        spinner.start(message);
        Ok(ClackActivity { spinner })
    }

    // Output is synchronous and spinners only run between prompts.
    fn suspend(&self) -> Result<()> {
        Ok(())
    }
}

impl Activity for ClackActivity {
    fn success(self, message: &str) -> Result<()> {
        self.spinner.stop(message);
        Ok(())
    }

    fn warn(self, message: &str) -> Result<()> {
        self.spinner.clear();
        cliclack::log::warning(message)?;
        Ok(())
    }

    fn fail(self, message: &str) -> Result<()> {
        self.spinner.error(message);
        Ok(())
    }
}

/// Close the session after a successful command
pub fn finish(message: &str) -> Result<()> {
    cliclack::outro(message)?;
    Ok(())
}
