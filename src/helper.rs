// helper.rs

use rustyline::completion::{Completer, Pair};
use rustyline::{Helper, Context};
use rustyline::hint::Hinter;
use rustyline::highlight::Highlighter;
use rustyline::validate::{Validator, ValidationContext, ValidationResult};
use rustyline::error::ReadlineError;

use crate::menu::Choice;

/// Completes and hints the menu choices currently on screen.
#[derive(Default)]
pub struct MenuHelper {
    choices: Vec<Choice>,
}

impl MenuHelper {
    pub fn new() -> Self {
        Self { choices: Vec::new() }
    }
    pub fn set_choices(&mut self, choices: &[Choice]) {
        self.choices = choices.to_vec();
    }
    fn matching<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Choice> + 'a {
        self.choices.iter().filter(move |c| c.key.starts_with(prefix))
    }
}

impl Completer for MenuHelper {
    type Candidate = Pair;
    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let prefix = line[..pos].trim_start();
        let completions = self.matching(prefix).map(|c| Pair {
            display: format!("{}  {}", c.key, c.label),
            replacement: c.key.to_string(),
        }).collect();
        Ok((line.len() - line.trim_start().len(), completions))
    }
}

impl Hinter for MenuHelper {
    type Hint = String;
    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let key = line.trim();
        self.choices.iter().find(|c| c.key == key).map(|c| format!("  ({})", c.label))
    }
}

impl Highlighter for MenuHelper {}

impl Validator for MenuHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for MenuHelper {}
