use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A symbol extracted from a log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Symbol {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Symbol {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// How a non-blank line was read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// JSON object carrying a `message` field
    Envelope,
    /// Anything that did not parse as a JSON object
    Raw,
}

/// Result of running a single line through the extractor
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Empty after trimming
    Blank,
    /// Candidate text has no `Symbol ID:` marker
    NoMarker(LineKind),
    /// Marker present but the full pattern did not match
    NoMatch(LineKind),
    /// A symbol was extracted
    Symbol(LineKind, Symbol),
}

impl LineOutcome {
    pub fn kind(&self) -> Option<LineKind> {
        match self {
            LineOutcome::Blank => None,
            LineOutcome::NoMarker(kind)
            | LineOutcome::NoMatch(kind)
            | LineOutcome::Symbol(kind, _) => Some(*kind),
        }
    }

    pub fn into_symbol(self) -> Option<Symbol> {
        match self {
            LineOutcome::Symbol(_, symbol) => Some(symbol),
            _ => None,
        }
    }
}

/// Runtime statistics
#[derive(Debug, Default, Clone)]
pub struct ExtractionStats {
    pub lines_read: usize,
    pub blank_lines: usize,
    pub envelope_lines: usize,
    pub raw_lines: usize,
    pub lines_without_marker: usize,
    pub unmatched_lines: usize,
    pub symbols_matched: usize,
    pub duplicates_discarded: usize,
    pub unique_symbols: usize,
    pub processing_time: Duration,
}

impl ExtractionStats {
    /// Update stats with the outcome of one line
    pub fn record_outcome(&mut self, outcome: &LineOutcome) {
        self.lines_read += 1;

        match outcome.kind() {
            Some(LineKind::Envelope) => self.envelope_lines += 1,
            Some(LineKind::Raw) => self.raw_lines += 1,
            None => {}
        }

        match outcome {
            LineOutcome::Blank => self.blank_lines += 1,
            LineOutcome::NoMarker(_) => self.lines_without_marker += 1,
            LineOutcome::NoMatch(_) => self.unmatched_lines += 1,
            LineOutcome::Symbol(..) => self.symbols_matched += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcome_counts() {
        let mut stats = ExtractionStats::default();
        stats.record_outcome(&LineOutcome::Blank);
        stats.record_outcome(&LineOutcome::NoMarker(LineKind::Raw));
        stats.record_outcome(&LineOutcome::NoMatch(LineKind::Envelope));
        stats.record_outcome(&LineOutcome::Symbol(
            LineKind::Envelope,
            Symbol::new("1", "A", ""),
        ));

        assert_eq!(stats.lines_read, 4);
        assert_eq!(stats.blank_lines, 1);
        assert_eq!(stats.envelope_lines, 2);
        assert_eq!(stats.raw_lines, 1);
        assert_eq!(stats.lines_without_marker, 1);
        assert_eq!(stats.unmatched_lines, 1);
        assert_eq!(stats.symbols_matched, 1);
    }

    #[test]
    fn test_into_symbol() {
        let symbol = Symbol::new("7", "SEVEN", "lucky");
        let outcome = LineOutcome::Symbol(LineKind::Raw, symbol.clone());
        assert_eq!(outcome.into_symbol(), Some(symbol));
        assert_eq!(LineOutcome::Blank.into_symbol(), None);
    }
}
