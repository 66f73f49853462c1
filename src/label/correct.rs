//! Repairs for two OCR digit artifacts seen repeatedly on scanned labels:
//! a duplicated trailing zero ("4g" read as "40") and a spurious appended
//! nine (a trailing unit mark read as the digit 9).
//!
//! Both repairs are textual: they compare the exact span the extractor
//! matched, never the reparsed value alone, so a genuine decimal like 12.5
//! is left untouched.

use super::fields::NutrientField;

/// Fields prone to the duplicated trailing zero.
const TRAILING_ZERO_FIELDS: &[NutrientField] = &[
    NutrientField::TotalCarbohydrate,
    NutrientField::DietaryFiber,
    NutrientField::TotalSugars,
];

/// Fields prone to the appended nine. Servings is in neither list and is
/// never adjusted.
const TRAILING_NINE_FIELDS: &[NutrientField] = &[
    NutrientField::Protein,
    NutrientField::TotalFat,
    NutrientField::TotalCarbohydrate,
    NutrientField::DietaryFiber,
    NutrientField::TotalSugars,
];

/// Apply the trailing-zero repair, then the trailing-nine repair, in that
/// fixed order. `span` is the text the extractor matched for `value`; a
/// repair only fires when the span is exactly the value's integer form.
pub fn repair_ocr_digits(field: NutrientField, value: f64, span: &str) -> f64 {
    let mut value = value;

    if TRAILING_ZERO_FIELDS.contains(&field)
        && value >= 10.0
        && span == integer_form(value)
        && span.ends_with('0')
    {
        value /= 10.0;
    }

    if TRAILING_NINE_FIELDS.contains(&field)
        && span == integer_form(value)
        && span.ends_with('9')
        && span.len() > 1
    {
        // Strip the 9 and reparse; if the remainder is not a number the
        // repair is skipped and the value kept.
        if let Ok(stripped) = span[..span.len() - 1].parse::<f64>() {
            value = stripped;
        }
    }

    value
}

fn integer_form(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}
