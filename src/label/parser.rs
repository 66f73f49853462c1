//! Field resolution: drives the locator, extractor, zero detector, and digit
//! repairs for each of the six fields and turns absent evidence into
//! defaults.

use tracing::debug;

use super::correct::repair_ocr_digits;
use super::fields::{NutrientFacts, NutrientField, DEFAULT_FIELD_VALUE};
use super::keywords;
use super::normalize::normalize_lines;
use super::numeric::extract_number;
use super::zero::indicates_zero;

/// Salvage the six nutrient fields from raw OCR text.
///
/// Never fails: any string, including the empty one, resolves to a complete
/// mapping. Fields without usable evidence stay at the 1.0 default; explicit
/// zero evidence resolves to 0.0.
pub fn parse_label_text(raw: &str) -> NutrientFacts {
    let lines = normalize_lines(raw);
    let mut facts = NutrientFacts::default();

    for field in NutrientField::ALL {
        facts.set(field, resolve_field(&lines, field));
    }
    facts
}

/// Resolve one field. Single pass, no retries; every branch terminates with
/// a value.
fn resolve_field(lines: &[String], field: NutrientField) -> f64 {
    // Step 1: find the line naming the field.
    let Some(hit) = keywords::locate(lines, field) else {
        debug!(field = field.as_str(), "keyword not found, keeping default");
        return DEFAULT_FIELD_VALUE;
    };

    let line = lines[hit.line].as_str();
    let next_line = lines.get(hit.line + 1).map(String::as_str);
    let fragment = fragment_after(line, hit.term);

    // Step 2: number on the keyword line. Servings counts usually precede
    // their keyword ("8 servings per container"), so the whole line is
    // searched without gram priority; nutrient fields search the tail after
    // the keyword and prefer gram figures.
    let mut found = match field {
        NutrientField::Servings => extract_number(line, false),
        _ => extract_number(fragment, true),
    };

    // Step 3: value wrapped onto the following line.
    if found.is_none() && field != NutrientField::Servings {
        if let Some(next) = next_line {
            found = extract_number(next, true);
        }
    }

    if let Some(m) = found {
        let value = repair_ocr_digits(field, m.value, &m.span);
        debug!(field = field.as_str(), value, span = %m.span, "field resolved");
        return value;
    }

    // Step 4: no number anywhere; explicit zero wording still counts.
    if indicates_zero(fragment, line, next_line) {
        debug!(field = field.as_str(), "explicit zero evidence");
        return 0.0;
    }

    debug!(field = field.as_str(), "no evidence, keeping default");
    DEFAULT_FIELD_VALUE
}

/// Tail of `line` after the matched term; the whole line when the term is
/// somehow absent (the locator guarantees it is not).
fn fragment_after<'a>(line: &'a str, term: &str) -> &'a str {
    match line.find(term) {
        Some(pos) => &line[pos + term.len()..],
        None => line,
    }
}
