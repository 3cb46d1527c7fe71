// arithmetic.rs

use crate::converter::Converter;
use crate::error::{ConvertError, Result};
use crate::radix::{self, Radix};
use crate::trace::{Trace, Traced};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
}

impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '×',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "Addition",
            BinaryOp::Subtract => "Subtraction",
            BinaryOp::Multiply => "Multiplication",
        }
    }

    fn apply(self, lhs: i128, rhs: i128) -> Option<i128> {
        match self {
            BinaryOp::Add => lhs.checked_add(rhs),
            BinaryOp::Subtract => lhs.checked_sub(rhs),
            BinaryOp::Multiply => lhs.checked_mul(rhs),
        }
    }
}

// Stateless; kept on `Converter` so every menu operation has one entry point.
impl Converter {
    pub fn binary_addition(&self, lhs: &str, rhs: &str) -> Result<Traced<String>> {
        binary_arithmetic(BinaryOp::Add, lhs, rhs)
    }

    /// Negative differences come back sign-magnitude, e.g. `-10`.
    pub fn binary_subtraction(&self, lhs: &str, rhs: &str) -> Result<Traced<String>> {
        binary_arithmetic(BinaryOp::Subtract, lhs, rhs)
    }

    pub fn binary_multiplication(&self, lhs: &str, rhs: &str) -> Result<Traced<String>> {
        binary_arithmetic(BinaryOp::Multiply, lhs, rhs)
    }
}

/// Both operands are validated before any arithmetic happens.
pub fn binary_arithmetic(op: BinaryOp, lhs: &str, rhs: &str) -> Result<Traced<String>> {
    let (lhs, rhs) = (lhs.trim(), rhs.trim());
    let a = radix::expand(lhs, Radix::Binary)?.value;
    let b = radix::expand(rhs, Radix::Binary)?.value;
    let value = op.apply(a, b).ok_or(ConvertError::Overflow { radix: Radix::Binary })?;
    let binary = radix::render(value, Radix::Binary);

    let mut trace = Trace::new();
    trace.note(format!("\nBinary {}:", op.name()));
    match op {
        BinaryOp::Multiply => trace.note(format!("  {} × {} = {}", lhs, rhs, binary)),
        _ => {
            trace.note(format!("  {}", lhs));
            trace.note(format!("{} {}", op.symbol(), rhs));
            trace.note(format!("= {}", binary));
        }
    }
    trace.note(format!("\nIn Decimal: {} {} {} = {}", a, op.symbol(), b, value));

    log::debug!("{} {} {} = {}", lhs, op.symbol(), rhs, binary);
    Ok(Traced::new(binary, trace))
}
