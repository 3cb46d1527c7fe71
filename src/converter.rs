// converter.rs

use std::fmt;

use crate::error::{ConvertError, Result};
use crate::history::{History, HistoryEntry};
use crate::radix::{self, Radix};
use crate::trace::{Trace, Traced};

/// Number-system converter for one session. Owns the conversion history.
#[derive(Debug, Default)]
pub struct Converter {
    history: History,
}

impl Converter {
    pub fn new() -> Self {
        Self { history: History::new() }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn append_history(&mut self, entry: HistoryEntry) {
        self.history.add(entry);
    }

    pub fn binary_to_decimal(&mut self, binary: &str) -> Result<Traced<i128>> {
        let binary = binary.trim();
        let expanded = radix::expand(binary, Radix::Binary)?;
        let decimal = expanded.value;

        let mut trace = Trace::new();
        trace.heading(format!("Converting Binary {} to Decimal:", binary));
        trace.extend(expanded.trace);
        trace.result(format!("{} (Binary) = {} (Decimal)", binary, decimal));

        log::debug!("binary {} -> decimal {}", binary, decimal);
        self.append_history(HistoryEntry::new(binary, Radix::Binary, decimal.to_string(), Radix::Decimal));
        Ok(Traced::new(decimal, trace))
    }

    pub fn decimal_to_binary(&mut self, decimal: i128) -> Result<Traced<String>> {
        if decimal < 0 {
            return Err(ConvertError::NegativeNotSupported(decimal));
        }
        // zero short-circuits before anything is logged to history
        if decimal == 0 {
            let mut trace = Trace::new();
            trace.heading("Converting Decimal 0 to Binary:");
            trace.result("0 (Decimal) = 0 (Binary)");
            return Ok(Traced::new("0".to_string(), trace));
        }
        self.decimal_to_radix(decimal, Radix::Binary)
    }

    pub fn decimal_to_octal(&mut self, decimal: i128) -> Result<Traced<String>> {
        self.decimal_to_radix(decimal, Radix::Octal)
    }

    pub fn decimal_to_hexadecimal(&mut self, decimal: i128) -> Result<Traced<String>> {
        self.decimal_to_radix(decimal, Radix::Hexadecimal)
    }

    pub fn binary_to_octal(&mut self, binary: &str) -> Result<Traced<String>> {
        self.binary_to_radix(binary, Radix::Octal)
    }

    pub fn binary_to_hexadecimal(&mut self, binary: &str) -> Result<Traced<String>> {
        self.binary_to_radix(binary, Radix::Hexadecimal)
    }

    /// Parses `value` in `radix` and renders it in every supported base.
    pub fn show_all_representations(&self, value: &str, radix: Radix) -> Result<Representations> {
        let value = value.trim();
        let parsed = radix::parse(value, radix).map_err(|err| match err {
            ConvertError::InvalidDigit { digit, radix } => {
                ConvertError::InvalidInput(format!("'{}' is not a valid {} number (bad digit '{}')", value, radix, digit))
            }
            other => other,
        })?;
        log::debug!("representations of {} (base {})", value, radix.base());
        Ok(Representations {
            input: value.to_string(),
            radix,
            value: parsed,
        })
    }

    fn binary_to_radix(&mut self, binary: &str, target: Radix) -> Result<Traced<String>> {
        let decimal = self.binary_to_decimal(binary)?;
        let converted = self.decimal_to_radix(decimal.value, target)?;
        let mut trace = decimal.trace;
        trace.extend(converted.trace);
        Ok(Traced::new(converted.value, trace))
    }

    fn decimal_to_radix(&mut self, decimal: i128, target: Radix) -> Result<Traced<String>> {
        let divided = radix::divide(decimal.unsigned_abs(), target);
        let rendered = if decimal < 0 {
            format!("-{}", divided.value)
        } else {
            divided.value
        };

        let mut trace = Trace::new();
        trace.heading(format!("Converting Decimal {} to {}:", decimal, target.title()));
        if decimal < 0 {
            trace.note(format!("Converting the magnitude {} and keeping the sign", decimal.unsigned_abs()));
        }
        let had_steps = !divided.trace.is_empty();
        trace.extend(divided.trace);
        if had_steps {
            trace.note("\nReading remainders from bottom to top:");
        }
        trace.result(format!("{} (Decimal) = {} ({})", decimal, rendered, target.title()));

        log::debug!("decimal {} -> {} {}", decimal, target, rendered);
        self.append_history(HistoryEntry::new(decimal.to_string(), Radix::Decimal, rendered.clone(), target));
        Ok(Traced::new(rendered, trace))
    }
}

/// One value written out in all four bases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Representations {
    pub input: String,
    pub radix: Radix,
    pub value: i128,
}

impl Representations {
    pub fn in_radix(&self, radix: Radix) -> String {
        radix::render(self.value, radix)
    }
    pub fn decimal(&self) -> String {
        self.in_radix(Radix::Decimal)
    }
    pub fn binary(&self) -> String {
        self.in_radix(Radix::Binary)
    }
    pub fn octal(&self) -> String {
        self.in_radix(Radix::Octal)
    }
    pub fn hexadecimal(&self) -> String {
        self.in_radix(Radix::Hexadecimal)
    }
}

impl fmt::Display for Representations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);
        writeln!(f, "\n{}", rule)?;
        writeln!(f, "All Representations of: {} (Base {})", self.input, self.radix.base())?;
        writeln!(f, "{}", rule)?;
        for radix in Radix::ALL {
            writeln!(f, "{:<13}: {}", radix.title(), self.in_radix(radix))?;
        }
        writeln!(f, "{}", rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn binary_to_decimal_appends_history() {
        let mut converter = Converter::new();
        assert!(converter.history().is_empty());
        let traced = converter.binary_to_decimal("1101").unwrap();
        assert_eq!(traced.value, 13);
        assert_eq!(converter.history().len(), 1);
        assert_eq!(converter.history().all()[0].to_string(), "1101₂ = 13₁₀");
    }

    #[test]
    fn failed_conversions_leave_history_alone() {
        let mut converter = Converter::new();
        assert_eq!(
            converter.binary_to_decimal("102").unwrap_err(),
            ConvertError::InvalidDigit { digit: '2', radix: Radix::Binary }
        );
        assert_eq!(converter.decimal_to_binary(-5).unwrap_err(), ConvertError::NegativeNotSupported(-5));
        assert!(converter.binary_to_octal("12").is_err());
        assert!(converter.history().is_empty());
    }

    #[test]
    fn zero_collapses_to_single_digit() {
        let mut converter = Converter::new();
        assert_eq!(converter.decimal_to_binary(0).unwrap().value, "0");
        assert_eq!(converter.decimal_to_octal(0).unwrap().value, "0");
        assert_eq!(converter.decimal_to_hexadecimal(0).unwrap().value, "0");
        assert_eq!(converter.history().len(), 2);
    }

    #[test]
    fn zero_to_binary_is_not_recorded() {
        let mut converter = Converter::new();
        let traced = converter.decimal_to_binary(0).unwrap();
        assert_eq!(traced.value, "0");
        assert!(traced.trace.to_string().contains("0 (Decimal) = 0 (Binary)"));
        assert!(converter.history().is_empty());
        converter.decimal_to_octal(0).unwrap();
        assert_eq!(converter.history().all()[0].to_string(), "0₁₀ = 0₈");
    }

    #[test]
    fn decimal_to_binary_traces_each_division() {
        let mut converter = Converter::new();
        let traced = converter.decimal_to_binary(25).unwrap();
        assert_eq!(traced.value, "11001");
        let text = traced.trace.to_string();
        assert!(text.contains("25 ÷ 2 = 12, Remainder = 1"));
        assert!(text.contains("1 ÷ 2 = 0, Remainder = 1"));
        assert!(text.contains("25 (Decimal) = 11001 (Binary)"));
    }

    #[test]
    fn decimal_to_octal_and_hex() {
        let mut converter = Converter::new();
        assert_eq!(converter.decimal_to_octal(64).unwrap().value, "100");
        assert_eq!(converter.decimal_to_hexadecimal(255).unwrap().value, "FF");
        assert_eq!(converter.decimal_to_hexadecimal(-26).unwrap().value, "-1A");
        assert_eq!(converter.history().all()[1].to_string(), "255₁₀ = FF₁₆");
    }

    #[test]
    fn binary_to_octal_composes_both_steps() {
        let mut converter = Converter::new();
        assert_eq!(converter.binary_to_octal("101010").unwrap().value, "52");
        assert_eq!(converter.binary_to_hexadecimal("11111111").unwrap().value, "FF");
        let history: Vec<String> = converter.history().all().iter().map(|e| e.to_string()).collect();
        assert_eq!(history, vec!["101010₂ = 42₁₀", "42₁₀ = 52₈", "11111111₂ = 255₁₀", "255₁₀ = FF₁₆"]);
    }

    #[test]
    fn show_all_representations_of_42() {
        let converter = Converter::new();
        let reps = converter.show_all_representations("42", Radix::Decimal).unwrap();
        assert_eq!(reps.decimal(), "42");
        assert_eq!(reps.binary(), "101010");
        assert_eq!(reps.octal(), "52");
        assert_eq!(reps.hexadecimal(), "2A");
        assert!(reps.to_string().contains("Hexadecimal  : 2A"));
        assert!(converter.history().is_empty());
    }

    #[test]
    fn show_all_representations_rejects_bad_digits() {
        let converter = Converter::new();
        assert!(matches!(
            converter.show_all_representations("2", Radix::Binary),
            Err(ConvertError::InvalidInput(_))
        ));
        assert!(matches!(
            converter.show_all_representations("ten", Radix::Decimal),
            Err(ConvertError::InvalidInput(_))
        ));
        assert_eq!(converter.show_all_representations("ff", Radix::Hexadecimal).unwrap().value, 255);
    }

    proptest! {
        #[test]
        fn prop_decimal_binary_round_trip(n in 0i128..=i128::MAX) {
            let mut converter = Converter::new();
            let binary = converter.decimal_to_binary(n).unwrap().value;
            prop_assert_eq!(converter.binary_to_decimal(&binary).unwrap().value, n);
        }

        #[test]
        fn prop_binary_decimal_round_trip(binary in "0|1[01]{0,100}") {
            let mut converter = Converter::new();
            let decimal = converter.binary_to_decimal(&binary).unwrap().value;
            prop_assert_eq!(converter.decimal_to_binary(decimal).unwrap().value, binary);
        }
    }
}
