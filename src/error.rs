// error.rs

use crate::radix::Radix;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Invalid {radix} digit '{digit}'")]
    InvalidDigit { digit: char, radix: Radix },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Negative numbers not supported: {0}")]
    NegativeNotSupported(i128),

    /// Value does not fit in a signed 128-bit integer.
    #[error("{radix} value is too large")]
    Overflow { radix: Radix },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
