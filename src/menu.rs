// menu.rs

use std::fmt::Display;
use std::io::Write;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};

use crate::converter::Converter;
use crate::error;
use crate::helper::MenuHelper;
use crate::radix::{self, Radix};
use crate::trace::Traced;
use crate::util::writeln_ignore_broken_pipe;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Choice {
    pub key: &'static str,
    pub label: &'static str,
}

impl Choice {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

pub const MAIN_MENU: [Choice; 7] = [
    Choice::new("1", "Binary ↔ Decimal Conversion"),
    Choice::new("2", "All Number System Conversions"),
    Choice::new("3", "Binary Arithmetic Operations"),
    Choice::new("4", "1's & 2's Complement"),
    Choice::new("5", "Show All Representations"),
    Choice::new("6", "Conversion History"),
    Choice::new("0", "Exit"),
];

const BINARY_DECIMAL_MENU: [Choice; 2] = [
    Choice::new("1", "Binary to Decimal"),
    Choice::new("2", "Decimal to Binary"),
];

const MULTI_BASE_MENU: [Choice; 4] = [
    Choice::new("1", "Decimal to Octal"),
    Choice::new("2", "Decimal to Hexadecimal"),
    Choice::new("3", "Binary to Octal"),
    Choice::new("4", "Binary to Hexadecimal"),
];

const ARITHMETIC_MENU: [Choice; 3] = [
    Choice::new("1", "Binary Addition"),
    Choice::new("2", "Binary Subtraction"),
    Choice::new("3", "Binary Multiplication"),
];

const COMPLEMENT_MENU: [Choice; 2] = [
    Choice::new("1", "1's Complement"),
    Choice::new("2", "2's Complement"),
];

const BASE_MENU: [Choice; 4] = [
    Choice::new("1", "Decimal"),
    Choice::new("2", "Binary"),
    Choice::new("3", "Octal"),
    Choice::new("4", "Hexadecimal"),
];

/// Maps a base sub-menu key to its radix; anything unknown means decimal.
pub fn base_for_choice(key: &str) -> Radix {
    match key {
        "2" => Radix::Binary,
        "3" => Radix::Octal,
        "4" => Radix::Hexadecimal,
        _ => Radix::Decimal,
    }
}

/// Where the menu reads its answers from.
pub trait LineSource {
    /// Returns the trimmed line, or `None` once input has ended.
    fn read_line(&mut self, prompt: &str, choices: &[Choice]) -> Result<Option<String>>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn read_line(&mut self, prompt: &str, choices: &[Choice]) -> Result<Option<String>> {
        (**self).read_line(prompt, choices)
    }
}

pub type LineEditor = Editor<MenuHelper, DefaultHistory>;

pub fn line_editor() -> Result<LineEditor> {
    let config = Config::builder()
        .completion_type(CompletionType::List)
        .auto_add_history(false)
        .build();
    let mut rl = LineEditor::with_config(config).context("failed to create line editor")?;
    rl.set_helper(Some(MenuHelper::new()));
    Ok(rl)
}

impl LineSource for LineEditor {
    fn read_line(&mut self, prompt: &str, choices: &[Choice]) -> Result<Option<String>> {
        if let Some(helper) = self.helper_mut() {
            helper.set_choices(choices);
        }
        match self.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.add_history_entry(trimmed);
                }
                Ok(Some(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err).context("failed to read input"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive menu loop around one [`Converter`].
pub struct Session<S, W> {
    converter: Converter,
    input: S,
    out: W,
}

impl<S: LineSource, W: Write> Session<S, W> {
    pub fn new(input: S, out: W) -> Self {
        Self {
            converter: Converter::new(),
            input,
            out,
        }
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn run(&mut self) -> Result<()> {
        log::info!("session started");
        while self.step()? == Flow::Continue {}
        self.say("\nThank you for using Number System Converter!")?;
        log::info!("session ended after {} conversions", self.converter.history().len());
        Ok(())
    }

    fn step(&mut self) -> Result<Flow> {
        self.say(format!("\n{}", "=".repeat(60)))?;
        self.say("        NUMBER SYSTEM CONVERTER & CALCULATOR")?;
        self.say("=".repeat(60))?;
        self.say("")?;
        for choice in MAIN_MENU {
            self.say(format!("[{}] {}", choice.key, choice.label))?;
        }
        self.say("-".repeat(60))?;

        let Some(choice) = self.input.read_line("Enter your choice: ", &MAIN_MENU)? else {
            return Ok(Flow::Exit);
        };
        log::debug!("menu choice {:?}", choice);
        match choice.as_str() {
            "1" => self.binary_decimal(),
            "2" => self.multi_base(),
            "3" => self.arithmetic(),
            "4" => self.complement(),
            "5" => self.representations(),
            "6" => self.show_history().map(|_| Flow::Continue),
            "0" => Ok(Flow::Exit),
            _ => {
                self.say("\nInvalid choice! Please try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn binary_decimal(&mut self) -> Result<Flow> {
        let Some(sub) = self.sub_menu(&BINARY_DECIMAL_MENU)? else {
            return Ok(Flow::Exit);
        };
        match sub.as_str() {
            "1" => {
                let Some(binary) = self.ask("Enter binary number: ")? else { return Ok(Flow::Exit) };
                let outcome = self.converter.binary_to_decimal(&binary);
                self.report(outcome)?;
            }
            "2" => {
                let Some(decimal) = self.ask("Enter decimal number: ")? else { return Ok(Flow::Exit) };
                let outcome = radix::parse_decimal(&decimal).and_then(|n| self.converter.decimal_to_binary(n));
                self.report(outcome)?;
            }
            _ => {}
        }
        Ok(Flow::Continue)
    }

    fn multi_base(&mut self) -> Result<Flow> {
        let Some(sub) = self.sub_menu(&MULTI_BASE_MENU)? else {
            return Ok(Flow::Exit);
        };
        match sub.as_str() {
            "1" | "2" => {
                let Some(decimal) = self.ask("Enter decimal number: ")? else { return Ok(Flow::Exit) };
                let outcome = radix::parse_decimal(&decimal).and_then(|n| {
                    if sub == "1" {
                        self.converter.decimal_to_octal(n)
                    } else {
                        self.converter.decimal_to_hexadecimal(n)
                    }
                });
                self.report(outcome)?;
            }
            "3" | "4" => {
                let Some(binary) = self.ask("Enter binary number: ")? else { return Ok(Flow::Exit) };
                let outcome = if sub == "3" {
                    self.converter.binary_to_octal(&binary)
                } else {
                    self.converter.binary_to_hexadecimal(&binary)
                };
                self.report(outcome)?;
            }
            _ => {}
        }
        Ok(Flow::Continue)
    }

    fn arithmetic(&mut self) -> Result<Flow> {
        let Some(sub) = self.sub_menu(&ARITHMETIC_MENU)? else {
            return Ok(Flow::Exit);
        };
        let Some(lhs) = self.ask("Enter first binary number: ")? else { return Ok(Flow::Exit) };
        let Some(rhs) = self.ask("Enter second binary number: ")? else { return Ok(Flow::Exit) };
        let outcome = match sub.as_str() {
            "1" => self.converter.binary_addition(&lhs, &rhs),
            "2" => self.converter.binary_subtraction(&lhs, &rhs),
            "3" => self.converter.binary_multiplication(&lhs, &rhs),
            _ => return Ok(Flow::Continue),
        };
        self.report(outcome)?;
        Ok(Flow::Continue)
    }

    fn complement(&mut self) -> Result<Flow> {
        let Some(binary) = self.ask("Enter binary number: ")? else { return Ok(Flow::Exit) };
        let Some(sub) = self.sub_menu(&COMPLEMENT_MENU)? else {
            return Ok(Flow::Exit);
        };
        match sub.as_str() {
            "1" => {
                let traced = self.converter.ones_complement(&binary);
                self.report(Ok(traced))?;
            }
            "2" => {
                let outcome = self.converter.twos_complement(&binary);
                self.report(outcome)?;
            }
            _ => {}
        }
        Ok(Flow::Continue)
    }

    fn representations(&mut self) -> Result<Flow> {
        let Some(number) = self.ask("Enter number: ")? else { return Ok(Flow::Exit) };
        self.say("")?;
        for choice in BASE_MENU {
            self.say(format!("{}. {}", choice.key, choice.label))?;
        }
        let Some(key) = self.input.read_line("Enter current base: ", &BASE_MENU)? else {
            return Ok(Flow::Exit);
        };
        match self.converter.show_all_representations(&number, base_for_choice(&key)) {
            Ok(reps) => self.say(reps)?,
            Err(err) => self.fail(err)?,
        }
        Ok(Flow::Continue)
    }

    fn show_history(&mut self) -> Result<()> {
        if self.converter.history().is_empty() {
            return self.say("\nNo conversion history yet!");
        }
        let mut lines = vec![format!("\n{}", "=".repeat(50)), "CONVERSION HISTORY".to_string(), "=".repeat(50)];
        lines.extend(self.converter.history().numbered().map(|(n, entry)| format!("{}. {}", n, entry)));
        lines.push("=".repeat(50));
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    fn sub_menu(&mut self, choices: &[Choice]) -> Result<Option<String>> {
        self.say("")?;
        for choice in choices {
            self.say(format!("{}. {}", choice.key, choice.label))?;
        }
        self.input.read_line("Choose: ", choices)
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.input.read_line(prompt, &[])
    }

    fn report<T>(&mut self, outcome: error::Result<Traced<T>>) -> Result<()> {
        match outcome {
            Ok(traced) => self.say(traced.trace.to_string().trim_end()),
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: error::ConvertError) -> Result<()> {
        log::warn!("operation failed: {:?}", err);
        self.say(format!("Error: {}", err))
    }

    fn say(&mut self, line: impl Display) -> Result<()> {
        writeln_ignore_broken_pipe(&mut self.out, line).context("failed to write output")
    }
}
