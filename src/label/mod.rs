//! Nutrition label text salvage.
//!
//! Takes the raw, noisy plaintext an OCR engine produced from a label photo
//! and resolves it into six numeric fields. The whole module is pure string
//! work with no failure mode: every input, including the empty string,
//! yields a fully populated result.

pub mod correct;
pub mod fields;
pub mod keywords;
pub mod normalize;
pub mod numeric;
pub mod parser;
pub mod zero;

pub use fields::{NutrientFacts, NutrientField, DEFAULT_FIELD_VALUE};
pub use parser::parse_label_text;
