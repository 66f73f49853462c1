//! Wire types for the scoring surface.

use serde::{Deserialize, Serialize};

/// A five-macro profile in grams. Values come from the label salvage engine
/// or the food lookup; negative grams are treated as zero by every
/// computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroProfile {
    pub protein: f64,
    pub fat: f64,
    pub total_carbs: f64,
    pub sugar: f64,
    pub fiber: f64,
}

impl MacroProfile {
    /// Net carbohydrates: total minus fiber, floored at zero.
    pub fn net_carbs(&self) -> f64 {
        (self.total_carbs.max(0.0) - self.fiber.max(0.0)).max(0.0)
    }
}

/// Everything the scoring endpoint answers with: the user-facing spike
/// score, the input echoed back, the ideal balanced profile, and the tier
/// classification with its UI color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub spike_score: f64,
    pub input_macros: MacroProfile,
    pub balanced_macros: MacroProfile,
    pub base_ratio: f64,
    pub tier_label: String,
    pub tier_color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_carbs_floors_at_zero() {
        let profile = MacroProfile {
            protein: 0.0,
            fat: 0.0,
            total_carbs: 3.0,
            sugar: 0.0,
            fiber: 10.0,
        };
        assert_eq!(profile.net_carbs(), 0.0);
    }

    #[test]
    fn net_carbs_subtracts_fiber() {
        let profile = MacroProfile {
            protein: 0.0,
            fat: 0.0,
            total_carbs: 30.0,
            sugar: 0.0,
            fiber: 4.0,
        };
        assert_eq!(profile.net_carbs(), 26.0);
    }

    #[test]
    fn negative_inputs_ignored_in_net_carbs() {
        let profile = MacroProfile {
            protein: 0.0,
            fat: 0.0,
            total_carbs: 10.0,
            sugar: 0.0,
            fiber: -5.0,
        };
        assert_eq!(profile.net_carbs(), 10.0);
    }
}
