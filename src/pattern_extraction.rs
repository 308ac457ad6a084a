use crate::input_format::LogLine;
use crate::pipeline::context::{LineOutcome, Symbol};
use once_cell::sync::Lazy;
use regex::Regex;

/// Literal substring that marks a candidate line
pub const SYMBOL_MARKER: &str = "Symbol ID:";

/// `name` is non-greedy so it stops at the first `Desc:`. Ids are ASCII digits
/// only; ids in other scripts (e.g. Arabic-Indic) are not recognised.
static SYMBOL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Symbol ID:\s*([0-9]+)\s*Name:\s*(.*?)\s*Desc:\s*(.*)")
        .expect("symbol pattern is valid")
});

/// Extract a symbol from candidate text, if it has the full
/// `Symbol ID: <digits> Name: <text> Desc: <text>` shape
pub fn extract_symbol(text: &str) -> Option<Symbol> {
    let captures = SYMBOL_PATTERN.captures(text)?;
    let field = |i: usize| {
        captures
            .get(i)
            .map(|m| m.as_str().trim())
            .unwrap_or_default()
    };

    Some(Symbol::new(field(1), field(2), field(3)))
}

/// Turn one raw line into its outcome
pub fn extract_line(line: &str) -> LineOutcome {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineOutcome::Blank;
    }

    let log_line = LogLine::parse(trimmed);
    let kind = log_line.kind();
    let text = log_line.text();

    if !text.contains(SYMBOL_MARKER) {
        return LineOutcome::NoMarker(kind);
    }

    match extract_symbol(text) {
        Some(symbol) => LineOutcome::Symbol(kind, symbol),
        None => LineOutcome::NoMatch(kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::context::LineKind;

    #[test]
    fn test_extract_basic() {
        let symbol = extract_symbol("Symbol ID: 21508 Name: APPLE Desc: ").unwrap();
        assert_eq!(symbol, Symbol::new("21508", "APPLE", ""));
    }

    #[test]
    fn test_extract_name_with_spaces_and_ampersand() {
        let symbol =
            extract_symbol("Symbol ID: 22233 Name: CHINA OVERSEAS LAND & INVEST Desc: ").unwrap();
        assert_eq!(symbol.name, "CHINA OVERSEAS LAND & INVEST");
        assert_eq!(symbol.description, "");
    }

    #[test]
    fn test_name_stops_at_first_desc() {
        let symbol = extract_symbol("Symbol ID: 5 Name: A Desc: B Desc: C").unwrap();
        assert_eq!(symbol.name, "A");
        assert_eq!(symbol.description, "B Desc: C");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let symbol =
            extract_symbol("prefix Symbol ID:   42   Name:   Foo Bar   Desc:   some text   ")
                .unwrap();
        assert_eq!(symbol, Symbol::new("42", "Foo Bar", "some text"));
    }

    #[test]
    fn test_no_whitespace_after_marker() {
        let symbol = extract_symbol("Symbol ID:7Name:XDesc:Y").unwrap();
        assert_eq!(symbol, Symbol::new("7", "X", "Y"));
    }

    #[test]
    fn test_missing_desc_does_not_match() {
        assert_eq!(extract_symbol("Symbol ID: 1 Name: APPLE"), None);
    }

    #[test]
    fn test_non_numeric_id_does_not_match() {
        assert_eq!(extract_symbol("Symbol ID: abc Name: X Desc: Y"), None);
    }

    #[test]
    fn test_non_ascii_digits_are_not_ids() {
        assert_eq!(
            extract_symbol("Symbol ID: \u{662}\u{661} Name: ARABIC Desc: x"),
            None
        );
        assert_eq!(
            extract_line("Symbol ID: \u{662}\u{661} Name: ARABIC Desc: x"),
            LineOutcome::NoMatch(LineKind::Raw)
        );
    }

    #[test]
    fn test_description_stops_at_newline() {
        let symbol = extract_symbol("Symbol ID: 3 Name: N Desc: first\nsecond").unwrap();
        assert_eq!(symbol.description, "first");
    }

    #[test]
    fn test_extract_line_envelope() {
        let outcome = extract_line(r#"  {"message": "Symbol ID: 9 Name: NINE Desc: x"}  "#);
        assert_eq!(
            outcome,
            LineOutcome::Symbol(LineKind::Envelope, Symbol::new("9", "NINE", "x"))
        );
    }

    #[test]
    fn test_extract_line_raw_fallback() {
        let outcome = extract_line("2024-01-01 INFO Symbol ID: 10 Name: TEN Desc: d");
        assert_eq!(
            outcome,
            LineOutcome::Symbol(LineKind::Raw, Symbol::new("10", "TEN", "d"))
        );
    }

    #[test]
    fn test_envelope_ignores_marker_outside_message() {
        // The marker only counts inside the message field of a valid envelope
        let outcome = extract_line(r#"{"note": "Symbol ID: 1 Name: A Desc: B", "message": "hi"}"#);
        assert_eq!(outcome, LineOutcome::NoMarker(LineKind::Envelope));
    }

    #[test]
    fn test_extract_line_outcomes() {
        assert_eq!(extract_line("   "), LineOutcome::Blank);
        assert_eq!(
            extract_line("nothing to see"),
            LineOutcome::NoMarker(LineKind::Raw)
        );
        assert_eq!(
            extract_line(r#"{"message": "Symbol ID: 1 Name: APPLE"}"#),
            LineOutcome::NoMatch(LineKind::Envelope)
        );
    }
}
