// lib.rs

pub mod arithmetic;
pub mod complement;
pub mod converter;
pub mod demo;
pub mod error;
pub mod helper;
pub mod history;
pub mod menu;
pub mod radix;
pub mod trace;
mod util;

pub use arithmetic::BinaryOp;
pub use converter::{Converter, Representations};
pub use error::ConvertError;
pub use history::{History, HistoryEntry};
pub use menu::{LineSource, Session};
pub use radix::Radix;
pub use trace::{Step, Trace, Traced};
