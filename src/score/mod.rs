//! Macro balance scoring over the five-field macro profile a label scan (or
//! food lookup) produces. Pure arithmetic; the only failure is an anchor
//! name the request sent that names no macro.

pub mod balance;
pub mod index;
pub mod types;

pub use balance::{balance_macros, jitter_profile, Anchor, BALANCED_JITTER_GRAMS};
pub use index::{base_ratio, score_macros, spike_score, Tier};
pub use types::{MacroProfile, ScoreReport};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Invalid anchor '{0}'. Valid anchors: Protein, Fiber, Fat, Sugar, TotalCarbs")]
    InvalidAnchor(String),
}
