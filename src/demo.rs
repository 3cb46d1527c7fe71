// demo.rs

use std::io::Write;

use anyhow::{Context, Result};

use crate::converter::Converter;
use crate::radix::Radix;
use crate::util::writeln_ignore_broken_pipe;

/// Walks a throwaway converter through a few sample operations.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let mut demo = Converter::new();
    let sections = vec![
        ("1. Binary to Decimal:", traced_or_error(demo.binary_to_decimal("1101").map(|t| t.trace))),
        ("2. Decimal to Binary:", traced_or_error(demo.decimal_to_binary(25).map(|t| t.trace))),
        ("3. Binary Addition:", traced_or_error(demo.binary_addition("1010", "1100").map(|t| t.trace))),
        (
            "4. All Representations:",
            match demo.show_all_representations("42", Radix::Decimal) {
                Ok(reps) => reps.to_string(),
                Err(err) => format!("Error: {}", err),
            },
        ),
    ];

    writeln_ignore_broken_pipe(out, "QUICK DEMO").context("failed to write demo")?;
    for (title, body) in sections {
        writeln_ignore_broken_pipe(out, format!("\n{}", title)).context("failed to write demo")?;
        writeln_ignore_broken_pipe(out, body.trim_end()).context("failed to write demo")?;
    }
    writeln_ignore_broken_pipe(out, format!("\n{}", "=".repeat(60))).context("failed to write demo")?;
    Ok(())
}

fn traced_or_error(outcome: crate::error::Result<crate::trace::Trace>) -> String {
    match outcome {
        Ok(trace) => trace.to_string(),
        Err(err) => format!("Error: {}", err),
    }
}
