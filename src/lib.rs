//! NutriScan salvages structured nutrient values from the noisy plaintext an
//! OCR engine produces for nutrition facts labels, and scores macro balance
//! on top of them.
//!
//! The `label` module is the pure salvage engine (no I/O, never fails).
//! `ocr`, `score`, and `lookup` are its collaborators; `api` exposes
//! everything over HTTP.

pub mod api;
pub mod config;
pub mod label;
pub mod lookup;
pub mod ocr;
pub mod score;
