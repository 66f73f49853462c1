//! Numeric value extraction from a single fragment of label text.
//!
//! A fragment is either a whole line or the tail of a line after a matched
//! keyword. Extraction has to separate gram figures from the daily-value
//! percentages that sit next to them on most labels, and survive the usual
//! OCR digit confusions.

use std::sync::LazyLock;

use regex::Regex;

/// A number pulled from a fragment, together with the exact text that
/// produced it. The digit-repair heuristics compare against the span, so it
/// is carried alongside the parsed value instead of being discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberMatch {
    pub value: f64,
    pub span: String,
}

/// Integer, decimal, or bare leading-dot decimal, with an optional gram or
/// percent suffix captured for disambiguation.
static NUMBER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?|\.\d+)\s*(g(?:rams?)?|%)?").unwrap());

/// Label convention for trace amounts: "<1g" / "less than 1 g".
static UNDER_ONE_GRAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:<|less\s+than)\s*1\s*g").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Suffix {
    None,
    Gram,
    Percent,
}

#[derive(Debug, Clone)]
struct NumberToken {
    digits: String,
    value: f64,
    suffix: Suffix,
}

impl NumberToken {
    fn to_match(&self) -> NumberMatch {
        NumberMatch {
            value: self.value,
            span: self.digits.clone(),
        }
    }
}

/// Extract the most plausible number from a fragment, or `None` when nothing
/// qualifies. `prefer_grams` is true for nutrient fields (gram figures beat
/// every other number on the fragment) and false for servings counts (which
/// carry no unit).
pub fn extract_number(fragment: &str, prefer_grams: bool) -> Option<NumberMatch> {
    // OCR renders zero as the letter o often enough that substitution has to
    // happen before any digit matching. It also mints digits inside ordinary
    // words ("about" becomes "ab0ut"); the servings path compensates by
    // preferring non-zero candidates.
    let text = fragment.replace(['o', 'O'], "0");

    // Trace amounts are reported as the fixed midpoint 0.5, not a parsed digit.
    if let Some(m) = UNDER_ONE_GRAM.find(&text) {
        return Some(NumberMatch {
            value: 0.5,
            span: m.as_str().to_string(),
        });
    }

    let tokens = number_tokens(&text);

    if prefer_grams {
        if let Some(token) = tokens.iter().find(|t| t.suffix == Suffix::Gram) {
            return Some(token.to_match());
        }
    } else {
        let bare: Vec<&NumberToken> = tokens
            .iter()
            .filter(|t| t.suffix == Suffix::None)
            .collect();
        // Servings are rarely legitimately zero; minted zeros lose to the
        // first real count.
        if let Some(token) = bare.iter().find(|t| t.value != 0.0).or_else(|| bare.first()) {
            return Some(token.to_match());
        }
    }

    // Fallback: any number not attached to a percent sign. A candidate whose
    // digits also occur percent-attached in the fragment is treated as a
    // mis-captured daily-value figure and skipped; better not-found than a
    // percentage posing as grams.
    for token in tokens.iter().filter(|t| t.suffix != Suffix::Percent) {
        let percent_elsewhere = tokens
            .iter()
            .any(|t| t.suffix == Suffix::Percent && t.digits == token.digits);
        if !percent_elsewhere {
            return Some(token.to_match());
        }
    }
    None
}

fn number_tokens(text: &str) -> Vec<NumberToken> {
    NUMBER_TOKEN
        .captures_iter(text)
        .filter_map(|cap| {
            let digits = cap.get(1)?.as_str().to_string();
            let value: f64 = digits.parse().ok()?;
            let suffix = match cap.get(2).map(|m| m.as_str()) {
                None => Suffix::None,
                Some(s) if s.starts_with('%') => Suffix::Percent,
                Some(_) => Suffix::Gram,
            };
            Some(NumberToken {
                digits,
                value,
                suffix,
            })
        })
        .collect()
}
