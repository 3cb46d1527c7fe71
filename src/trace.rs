// trace.rs

use std::fmt;

use crate::radix::Radix;

/// One line of a step-by-step explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Heading(String),
    /// `digit × base^position = contribution`, position 0 being least significant.
    Position {
        position: usize,
        digit: char,
        radix: Radix,
        contribution: u128,
    },
    /// One round of repeated division; `digit` is the remainder as written in the target base.
    Division {
        dividend: u128,
        radix: Radix,
        quotient: u128,
        remainder: u128,
        digit: char,
    },
    Note(String),
    Result(String),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Heading(text) => write!(f, "\n{}\n{}", text, "-".repeat(50)),
            Step::Position { position, digit, radix, contribution } => write!(
                f,
                "Position {}: {} × {}^{} = {}",
                position,
                digit,
                radix.base(),
                position,
                contribution
            ),
            Step::Division { dividend, radix, quotient, remainder, digit } => {
                write!(f, "{} ÷ {} = {}, Remainder = {}", dividend, radix.base(), quotient, remainder)?;
                if radix.base() > 10 && *remainder >= 10 {
                    write!(f, " ({})", digit)?;
                }
                Ok(())
            }
            Step::Note(text) => write!(f, "{}", text),
            Step::Result(text) => write!(f, "\nResult: {}", text),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }
    pub fn heading(&mut self, text: impl Into<String>) {
        self.push(Step::Heading(text.into()));
    }
    pub fn note(&mut self, text: impl Into<String>) {
        self.push(Step::Note(text.into()));
    }
    pub fn result(&mut self, text: impl Into<String>) {
        self.push(Step::Result(text.into()));
    }
    pub fn extend(&mut self, other: Trace) {
        self.steps.extend(other.steps);
    }
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        Ok(())
    }
}

/// A computed value together with the explanation of how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traced<T> {
    pub value: T,
    pub trace: Trace,
}

impl<T> Traced<T> {
    pub fn new(value: T, trace: Trace) -> Self {
        Self { value, trace }
    }
}
