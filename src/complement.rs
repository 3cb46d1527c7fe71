// complement.rs

use crate::converter::Converter;
use crate::error::{ConvertError, Result};
use crate::trace::{Trace, Traced};

impl Converter {
    /// Flips every bit. Input is not validated: any character other than `'1'`
    /// is read as `'0'` and so flips to `'1'`; such characters are only logged.
    pub fn ones_complement(&self, binary: &str) -> Traced<String> {
        let binary = binary.trim();
        if let Some(bad) = binary.chars().find(|&c| c != '0' && c != '1') {
            log::warn!("1's complement of non-binary input {:?}: '{}' read as '0'", binary, bad);
        }
        let complement = flip(binary);
        let mut trace = Trace::new();
        trace.note(format!("1's Complement of {} = {}", binary, complement));
        Traced::new(complement, trace)
    }

    /// One's complement plus one. The carry may add a leading bit; the width is never padded back.
    pub fn twos_complement(&self, binary: &str) -> Result<Traced<String>> {
        let binary = binary.trim();
        if binary.is_empty() {
            return Err(ConvertError::InvalidInput("empty binary number".to_string()));
        }
        let ones = self.ones_complement(binary);
        let twos = increment(&ones.value);
        let mut trace = ones.trace;
        trace.note(format!("  {}", ones.value));
        trace.note(format!("+ {:>width$}", 1, width = ones.value.len()));
        trace.note(format!("2's Complement of {} = {}", binary, twos));
        log::debug!("2's complement of {} = {}", binary, twos);
        Ok(Traced::new(twos, trace))
    }
}

fn flip(binary: &str) -> String {
    binary.chars().map(|bit| if bit == '1' { '0' } else { '1' }).collect()
}

/// Adds one to a string of `0`/`1` with ripple carry.
fn increment(bits: &str) -> String {
    let mut out: Vec<char> = bits.chars().collect();
    match out.iter().rposition(|&bit| bit != '1') {
        Some(i) => {
            out[i] = '1';
            out[i + 1..].iter_mut().for_each(|bit| *bit = '0');
            out.into_iter().collect()
        }
        None => std::iter::once('1').chain(out.iter().map(|_| '0')).collect(),
    }
}
