// radix.rs

use std::fmt;

use itertools::Itertools;

use crate::error::{ConvertError, Result};
use crate::trace::{Step, Trace, Traced};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub const ALL: [Radix; 4] = [Radix::Decimal, Radix::Binary, Radix::Octal, Radix::Hexadecimal];

    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    pub fn from_base(base: u32) -> Option<Radix> {
        match base {
            2 => Some(Radix::Binary),
            8 => Some(Radix::Octal),
            10 => Some(Radix::Decimal),
            16 => Some(Radix::Hexadecimal),
            _ => None,
        }
    }

    /// Capitalized name, as used in trace headings.
    pub fn title(self) -> &'static str {
        match self {
            Radix::Binary => "Binary",
            Radix::Octal => "Octal",
            Radix::Decimal => "Decimal",
            Radix::Hexadecimal => "Hexadecimal",
        }
    }

    pub fn subscript(self) -> &'static str {
        match self {
            Radix::Binary => "₂",
            Radix::Octal => "₈",
            Radix::Decimal => "₁₀",
            Radix::Hexadecimal => "₁₆",
        }
    }

    /// Lower-case hex letters are accepted on input; output is always upper-case.
    pub fn digit_value(self, c: char) -> Option<u32> {
        c.to_digit(self.base())
    }

    pub fn digit_char(self, value: u32) -> Option<char> {
        std::char::from_digit(value, self.base()).map(|c| c.to_ascii_uppercase())
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title().to_ascii_lowercase())
    }
}

/// Checks `digits` against the alphabet of `radix`, reporting the first offending character.
pub fn validate(digits: &str, radix: Radix) -> Result<()> {
    if digits.is_empty() {
        return Err(ConvertError::InvalidInput(format!("empty {} number", radix)));
    }
    match digits.chars().find(|&c| radix.digit_value(c).is_none()) {
        Some(digit) => Err(ConvertError::InvalidDigit { digit, radix }),
        None => Ok(()),
    }
}

/// Positional expansion: the sum of `digit × base^position` over every digit.
pub fn expand(digits: &str, radix: Radix) -> Result<Traced<i128>> {
    validate(digits, radix)?;
    let base = u128::from(radix.base());
    let overflow = ConvertError::Overflow { radix };
    let mut trace = Trace::new();
    let mut total: u128 = 0;
    for (position, digit) in digits.chars().rev().enumerate() {
        let value = u128::from(radix.digit_value(digit).ok_or(ConvertError::InvalidDigit { digit, radix })?);
        let contribution = if value == 0 {
            0
        } else {
            let power = u32::try_from(position)
                .ok()
                .and_then(|p| base.checked_pow(p))
                .ok_or(overflow.clone())?;
            value.checked_mul(power).ok_or(overflow.clone())?
        };
        total = total.checked_add(contribution).ok_or(overflow.clone())?;
        trace.push(Step::Position { position, digit, radix, contribution });
    }
    let total = i128::try_from(total).map_err(|_| overflow)?;
    Ok(Traced::new(total, trace))
}

/// Repeated division of a magnitude by the base, remainders read in reverse.
pub fn divide(magnitude: u128, radix: Radix) -> Traced<String> {
    let mut trace = Trace::new();
    if magnitude == 0 {
        return Traced::new("0".to_string(), trace);
    }
    let base = u128::from(radix.base());
    let mut digits = Vec::new();
    let mut dividend = magnitude;
    while dividend > 0 {
        let quotient = dividend / base;
        let remainder = dividend % base;
        // remainder < base <= 16, so the digit always exists
        let digit = radix.digit_char(remainder as u32).unwrap_or('?');
        trace.push(Step::Division { dividend, radix, quotient, remainder, digit });
        digits.push(digit);
        dividend = quotient;
    }
    Traced::new(digits.iter().rev().join(""), trace)
}

/// Sign-magnitude rendering without a trace.
pub fn render(value: i128, radix: Radix) -> String {
    let digits = divide(value.unsigned_abs(), radix).value;
    if value < 0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Parses a signed base-10 integer, surrounding whitespace allowed.
pub fn parse_decimal(text: &str) -> Result<i128> {
    let text = text.trim();
    text.parse::<i128>().map_err(|err| match err.kind() {
        std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => {
            ConvertError::Overflow { radix: Radix::Decimal }
        }
        _ => ConvertError::InvalidInput(format!("'{}' is not a decimal integer", text)),
    })
}

/// Parses `text` in any radix; decimal may carry a sign, the others are plain digit strings.
pub fn parse(text: &str, radix: Radix) -> Result<i128> {
    match radix {
        Radix::Decimal => parse_decimal(text),
        _ => expand(text.trim(), radix).map(|traced| traced.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_records_every_position() {
        let traced = expand("1101", Radix::Binary).unwrap();
        assert_eq!(traced.value, 13);
        let contributions: Vec<u128> = traced
            .trace
            .steps()
            .iter()
            .filter_map(|s| match s {
                Step::Position { contribution, .. } => Some(*contribution),
                _ => None,
            })
            .collect();
        assert_eq!(contributions, vec![1, 0, 4, 8]);
    }

    #[test]
    fn expand_rejects_foreign_digit() {
        assert_eq!(
            expand("102", Radix::Binary).unwrap_err(),
            ConvertError::InvalidDigit { digit: '2', radix: Radix::Binary }
        );
        assert_eq!(
            expand("1G", Radix::Hexadecimal).unwrap_err(),
            ConvertError::InvalidDigit { digit: 'G', radix: Radix::Hexadecimal }
        );
    }

    #[test]
    fn expand_rejects_empty() {
        assert!(matches!(expand("", Radix::Octal), Err(ConvertError::InvalidInput(_))));
    }

    #[test]
    fn expand_accepts_lowercase_hex() {
        assert_eq!(expand("2a", Radix::Hexadecimal).unwrap().value, 42);
    }

    #[test]
    fn expand_tolerates_long_leading_zeros() {
        let digits = format!("{}1", "0".repeat(200));
        assert_eq!(expand(&digits, Radix::Binary).unwrap().value, 1);
    }

    #[test]
    fn expand_reports_overflow() {
        let digits = "1".repeat(128);
        assert_eq!(
            expand(&digits, Radix::Binary).unwrap_err(),
            ConvertError::Overflow { radix: Radix::Binary }
        );
    }

    #[test]
    fn divide_zero_is_single_digit() {
        let traced = divide(0, Radix::Hexadecimal);
        assert_eq!(traced.value, "0");
        assert!(traced.trace.is_empty());
    }

    #[test]
    fn divide_collects_remainders_in_reverse() {
        let traced = divide(25, Radix::Binary);
        assert_eq!(traced.value, "11001");
        assert_eq!(traced.trace.steps().len(), 5);
        assert_eq!(divide(255, Radix::Hexadecimal).value, "FF");
        assert_eq!(divide(42, Radix::Octal).value, "52");
    }

    #[test]
    fn render_prefixes_sign() {
        assert_eq!(render(-10, Radix::Binary), "-1010");
        assert_eq!(render(0, Radix::Octal), "0");
    }

    #[test]
    fn parse_decimal_classifies_failures() {
        assert_eq!(parse_decimal(" -42 ").unwrap(), -42);
        assert!(matches!(parse_decimal("4.2"), Err(ConvertError::InvalidInput(_))));
        assert_eq!(
            parse_decimal(&"9".repeat(50)).unwrap_err(),
            ConvertError::Overflow { radix: Radix::Decimal }
        );
    }

    #[test]
    fn radix_round_trips_through_base() {
        for radix in Radix::ALL {
            assert_eq!(Radix::from_base(radix.base()), Some(radix));
        }
        assert_eq!(Radix::from_base(3), None);
    }
}
