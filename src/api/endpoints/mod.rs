//! API endpoint handlers.
//!
//! One module per route. Handlers stay thin and delegate to the `label`,
//! `ocr`, `score`, and `lookup` modules.

pub mod health;
pub mod lookup;
pub mod scan;
pub mod score;
