//! Anchor-based macro balancing: keep one nutrient at its actual grams and
//! scale the other four to the fixed product ratio.

use rand::Rng;

use super::types::MacroProfile;
use super::ScoreError;

/// Uniform noise applied per macro when a balanced profile is served.
pub const BALANCED_JITTER_GRAMS: f64 = 0.02;

/// The macro a balance request is anchored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Protein,
    Fiber,
    Fat,
    Sugar,
    TotalCarbs,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::Protein,
        Anchor::Fiber,
        Anchor::Fat,
        Anchor::Sugar,
        Anchor::TotalCarbs,
    ];

    /// Fixed ratio weight of this macro: protein 4, fat 3, carbs 2, fiber 2,
    /// sugar 1.
    pub fn weight(&self) -> f64 {
        match self {
            Anchor::Protein => 4.0,
            Anchor::Fiber => 2.0,
            Anchor::Fat => 3.0,
            Anchor::Sugar => 1.0,
            Anchor::TotalCarbs => 2.0,
        }
    }

    /// Parse a request-supplied anchor name. Case, spaces, and hyphens are
    /// ignored ("TotalCarbs", "total carbs", and "total-carbs" all work).
    pub fn parse(raw: &str) -> Result<Anchor, ScoreError> {
        let normalized = raw.to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "protein" => Ok(Anchor::Protein),
            "fiber" => Ok(Anchor::Fiber),
            "fat" => Ok(Anchor::Fat),
            "sugar" => Ok(Anchor::Sugar),
            "total_carbs" | "totalcarbs" => Ok(Anchor::TotalCarbs),
            _ => Err(ScoreError::InvalidAnchor(raw.to_string())),
        }
    }

    fn grams_in(&self, profile: &MacroProfile) -> f64 {
        match self {
            Anchor::Protein => profile.protein,
            Anchor::Fiber => profile.fiber,
            Anchor::Fat => profile.fat,
            Anchor::Sugar => profile.sugar,
            Anchor::TotalCarbs => profile.total_carbs,
        }
    }

    fn set_grams(&self, profile: &mut MacroProfile, grams: f64) {
        match self {
            Anchor::Protein => profile.protein = grams,
            Anchor::Fiber => profile.fiber = grams,
            Anchor::Fat => profile.fat = grams,
            Anchor::Sugar => profile.sugar = grams,
            Anchor::TotalCarbs => profile.total_carbs = grams,
        }
    }
}

/// Compute the ideal balanced profile: the anchor keeps its actual grams,
/// every other macro gets `anchor_grams / anchor_weight * its_weight`. An
/// anchor at zero grams zeroes the whole profile.
pub fn balance_macros(profile: &MacroProfile, anchor: Anchor) -> MacroProfile {
    let anchor_grams = anchor.grams_in(profile).max(0.0);
    let adjustment = if anchor_grams > 0.0 {
        anchor_grams / anchor.weight()
    } else {
        0.0
    };

    let mut balanced = MacroProfile {
        protein: 0.0,
        fat: 0.0,
        total_carbs: 0.0,
        sugar: 0.0,
        fiber: 0.0,
    };
    for macro_kind in Anchor::ALL {
        let grams = if macro_kind == anchor {
            anchor_grams
        } else {
            (adjustment * macro_kind.weight()).max(0.0)
        };
        macro_kind.set_grams(&mut balanced, grams);
    }
    balanced
}

/// Add ±`max_grams` uniform noise to every macro, floor at zero, round to
/// three decimals.
pub fn jitter_profile(profile: &MacroProfile, max_grams: f64) -> MacroProfile {
    let mut rng = rand::thread_rng();
    let mut jitter = |grams: f64| {
        let noised = grams + rng.gen_range(-max_grams..=max_grams);
        round3(noised.max(0.0))
    };
    MacroProfile {
        protein: jitter(profile.protein),
        fat: jitter(profile.fat),
        total_carbs: jitter(profile.total_carbs),
        sugar: jitter(profile.sugar),
        fiber: jitter(profile.fiber),
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(protein: f64, fat: f64, total_carbs: f64, sugar: f64, fiber: f64) -> MacroProfile {
        MacroProfile {
            protein,
            fat,
            total_carbs,
            sugar,
            fiber,
        }
    }

    #[test]
    fn protein_anchor_scales_other_macros() {
        let balanced = balance_macros(&profile(20.0, 99.0, 99.0, 99.0, 99.0), Anchor::Protein);
        assert_eq!(balanced.protein, 20.0);
        assert_eq!(balanced.fat, 15.0);
        assert_eq!(balanced.total_carbs, 10.0);
        assert_eq!(balanced.fiber, 10.0);
        assert_eq!(balanced.sugar, 5.0);
    }

    #[test]
    fn sugar_anchor_scales_up() {
        let balanced = balance_macros(&profile(0.0, 0.0, 0.0, 3.0, 0.0), Anchor::Sugar);
        assert_eq!(balanced.sugar, 3.0);
        assert_eq!(balanced.protein, 12.0);
        assert_eq!(balanced.fat, 9.0);
        assert_eq!(balanced.total_carbs, 6.0);
        assert_eq!(balanced.fiber, 6.0);
    }

    #[test]
    fn zero_anchor_zeroes_profile() {
        let balanced = balance_macros(&profile(0.0, 50.0, 50.0, 50.0, 50.0), Anchor::Protein);
        assert_eq!(balanced.protein, 0.0);
        assert_eq!(balanced.fat, 0.0);
        assert_eq!(balanced.total_carbs, 0.0);
        assert_eq!(balanced.sugar, 0.0);
        assert_eq!(balanced.fiber, 0.0);
    }

    #[test]
    fn negative_anchor_grams_treated_as_zero() {
        let balanced = balance_macros(&profile(-5.0, 10.0, 10.0, 10.0, 10.0), Anchor::Protein);
        assert_eq!(balanced.protein, 0.0);
        assert_eq!(balanced.fat, 0.0);
    }

    #[test]
    fn anchor_parse_accepts_request_spellings() {
        assert_eq!(Anchor::parse("Protein").unwrap(), Anchor::Protein);
        assert_eq!(Anchor::parse("TotalCarbs").unwrap(), Anchor::TotalCarbs);
        assert_eq!(Anchor::parse("total carbs").unwrap(), Anchor::TotalCarbs);
        assert_eq!(Anchor::parse("total-carbs").unwrap(), Anchor::TotalCarbs);
        assert_eq!(Anchor::parse("FIBER").unwrap(), Anchor::Fiber);
    }

    #[test]
    fn anchor_parse_rejects_unknown_names() {
        assert!(matches!(
            Anchor::parse("gluten"),
            Err(ScoreError::InvalidAnchor(_))
        ));
    }

    #[test]
    fn jitter_stays_within_bounds_and_nonnegative() {
        let original = profile(10.0, 5.0, 20.0, 0.0, 3.0);
        for _ in 0..50 {
            let noised = jitter_profile(&original, BALANCED_JITTER_GRAMS);
            for (a, b) in [
                (noised.protein, original.protein),
                (noised.fat, original.fat),
                (noised.total_carbs, original.total_carbs),
                (noised.sugar, original.sugar),
                (noised.fiber, original.fiber),
            ] {
                assert!(a >= 0.0);
                assert!((a - b).abs() <= BALANCED_JITTER_GRAMS + 0.0005);
            }
        }
    }

    #[test]
    fn jitter_rounds_to_three_decimals() {
        let noised = jitter_profile(&profile(1.0, 1.0, 1.0, 1.0, 1.0), 0.02);
        for v in [noised.protein, noised.fat, noised.total_carbs, noised.sugar, noised.fiber] {
            let scaled = v * 1000.0;
            assert!((scaled - scaled.round()).abs() < 1e-6);
        }
    }
}
