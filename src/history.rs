// history.rs

use std::fmt;

use crate::radix::Radix;

/// One completed conversion, e.g. `1101₂ = 13₁₀`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub source: String,
    pub source_radix: Radix,
    pub target: String,
    pub target_radix: Radix,
}

impl HistoryEntry {
    pub fn new(source: impl Into<String>, source_radix: Radix, target: impl Into<String>, target_radix: Radix) -> Self {
        Self {
            source: source.into(),
            source_radix,
            target: target.into(),
            target_radix,
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} = {}{}",
            self.source,
            self.source_radix.subscript(),
            self.target,
            self.target_radix.subscript()
        )
    }
}

/// Append-only log of completed conversions, oldest first.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }
    pub fn add(&mut self, entry: HistoryEntry) {
        log::debug!("history += {}", entry);
        self.entries.push(entry);
    }
    /// 1-indexed, matching the numbering shown to the user.
    pub fn get(&self, n: usize) -> Option<&HistoryEntry> {
        n.checked_sub(1).and_then(|i| self.entries.get(i))
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn all(&self) -> &[HistoryEntry] {
        &self.entries
    }
    /// Entries paired with their display number, starting at 1.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &HistoryEntry)> {
        self.entries.iter().enumerate().map(|(i, entry)| (i + 1, entry))
    }
}
