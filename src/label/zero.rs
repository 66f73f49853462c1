//! Detection of textual assertions that a nutrient is present at zero grams.
//!
//! Consulted only after the number extractor found nothing for a field: a
//! matched pattern turns the field into an explicit 0.0 instead of the
//! "unknown" default.

use std::sync::LazyLock;

use regex::Regex;

/// Zero-gram spellings as they survive OCR: the digit, the confused letter o,
/// and the written-out word.
static ZERO_GRAM_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b0\s*g\b").unwrap(),
        Regex::new(r"(?i)\bo\s*g\b").unwrap(),
        Regex::new(r"(?i)\bzero\s*g\b").unwrap(),
    ]
});

/// Footnote phrasing labels use instead of printing a zero row.
const INSIGNIFICANT_PHRASES: &[&str] = &["not a significant source", "insignificant source"];

/// True when the text around a matched keyword asserts the field is zero.
///
/// `fragment` is the post-keyword tail of the keyword line, `line` the full
/// keyword line, `next_line` the line after it. The next line is only
/// consulted when the fragment is empty, i.e. the keyword sat at the end of
/// its line and the value wrapped.
pub fn indicates_zero(fragment: &str, line: &str, next_line: Option<&str>) -> bool {
    let fragment_empty = fragment.trim().is_empty();

    if !fragment_empty && matches_zero_pattern(fragment) {
        return true;
    }
    if matches_zero_pattern(line) {
        return true;
    }
    if fragment_empty {
        if let Some(next) = next_line {
            if matches_zero_pattern(next) {
                return true;
            }
        }
    }

    mentions_insignificance(line) || next_line.is_some_and(mentions_insignificance)
}

fn matches_zero_pattern(text: &str) -> bool {
    ZERO_GRAM_PATTERNS.iter().any(|p| p.is_match(text))
}

fn mentions_insignificance(text: &str) -> bool {
    let lower = text.to_lowercase();
    INSIGNIFICANT_PHRASES.iter().any(|p| lower.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_gram_in_fragment() {
        assert!(indicates_zero(" 0g", "total fat 0g", None));
        assert!(indicates_zero(" 0 g", "total fat 0 g", None));
    }

    #[test]
    fn confused_letter_o_counts_as_zero() {
        assert!(indicates_zero(" o g", "total fat o g", None));
    }

    #[test]
    fn written_out_zero_counts() {
        assert!(indicates_zero(" zero g", "trans fat zero g", None));
    }

    #[test]
    fn pattern_anywhere_on_line_counts() {
        // Keyword fragment itself is clean, but the line carries the zero.
        assert!(indicates_zero(" daily", "0g total fat daily", None));
    }

    #[test]
    fn next_line_checked_only_when_fragment_empty() {
        assert!(indicates_zero("", "dietary fiber", Some("0g")));
        assert!(!indicates_zero(" 5", "dietary fiber 5", Some("0g")));
    }

    #[test]
    fn insignificance_phrase_on_either_line() {
        assert!(indicates_zero("", "fiber: not a significant source", None));
        assert!(indicates_zero("", "dietary fiber", Some("not a significant source of fiber")));
        assert!(indicates_zero("", "dietary fiber", Some("insignificant source")));
    }

    #[test]
    fn no_evidence_is_false() {
        assert!(!indicates_zero(" 5g", "total fat 5g", Some("protein 3g")));
        assert!(!indicates_zero("", "total fat", None));
    }

    #[test]
    fn ten_grams_is_not_zero() {
        // \b0 must not match the 0 inside 10.
        assert!(!indicates_zero(" 10g", "total fat 10g", None));
    }
}
