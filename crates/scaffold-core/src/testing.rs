//! Test doubles for the interactive flows

use crate::error::Result;
use crate::prompt::{InputHook, Prompter};
use crate::registry::{ModuleType, TypeChoice};
use crate::report::{Activity, Reporter};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub enum Answer {
    Confirm(bool),
    Text(&'static str),
    Type(ModuleType),
}

/// Replays a fixed list of answers, panicking on any unexpected prompt
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub asked: Vec<String>,
    pub rejected: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            ..Self::default()
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    fn next(&mut self, message: &str) -> Answer {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer for prompt '{}'", message))
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        match self.next(message) {
            Answer::Confirm(value) => Ok(value),
            other => panic!("expected confirm answer for '{}', got {:?}", message, other),
        }
    }

    fn input(&mut self, message: &str, validate: InputHook) -> Result<String> {
        loop {
            match self.next(message) {
                Answer::Text(value) => match validate(value) {
                    Ok(()) => return Ok(value.to_string()),
                    Err(error) => self.rejected.push(error),
                },
                other => panic!("expected text answer for '{}', got {:?}", message, other),
            }
        }
    }

    fn select_type(&mut self, message: &str, choices: &[TypeChoice]) -> Result<ModuleType> {
        match self.next(message) {
            Answer::Type(value) => {
                assert!(choices.iter().any(|c| c.module_type == value));
                Ok(value)
            }
            other => panic!("expected type answer for '{}', got {:?}", message, other),
        }
    }
}

/// Records every reporter call as a line of text
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    events: Rc<RefCell<Vec<String>>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    fn record(&self, event: String) {
        self.events.borrow_mut().push(event);
    }
}

pub struct RecordedActivity {
    events: Rc<RefCell<Vec<String>>>,
}

impl Reporter for RecordingReporter {
    type Activity = RecordedActivity;

    fn header(&self, message: &str) -> Result<()> {
        self.record(format!("header: {}", message));
        Ok(())
    }

    fn info(&self, message: &str) -> Result<()> {
        self.record(format!("info: {}", message));
        Ok(())
    }

    fn start(&self, message: &str) -> Result<RecordedActivity> {
        self.record(format!("start: {}", message));
        Ok(RecordedActivity {
            events: Rc::clone(&self.events),
        })
    }

    fn suspend(&self) -> Result<()> {
        self.record("suspend".to_string());
        Ok(())
    }
}

impl Activity for RecordedActivity {
    fn success(self, message: &str) -> Result<()> {
        self.events.borrow_mut().push(format!("success: {}", message));
        Ok(())
    }

    fn warn(self, message: &str) -> Result<()> {
        self.events.borrow_mut().push(format!("warn: {}", message));
        Ok(())
    }

    fn fail(self, message: &str) -> Result<()> {
        self.events.borrow_mut().push(format!("fail: {}", message));
        Ok(())
    }
}
