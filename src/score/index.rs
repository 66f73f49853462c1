//! Glycemic spike scoring and tier classification.

use super::balance::{balance_macros, jitter_profile, Anchor, BALANCED_JITTER_GRAMS};
use super::types::{MacroProfile, ScoreReport};

const SCORE_FLOOR: f64 = 15.0;
const SCORE_CEILING: f64 = 50.0;
const RATIO_ADJUSTMENT: f64 = 1.15;
const RATIO_CAP: f64 = 3.0;
const SCORE_EXPONENT: f64 = 1.35;

/// Spike score on a 15..=50 scale. Higher means a sharper expected glucose
/// response. The curve is convex: low ratios cluster near the floor and the
/// cap pins extreme profiles at exactly 50.
pub fn spike_score(profile: &MacroProfile) -> f64 {
    let protein = profile.protein.max(0.0);
    let fat = profile.fat.max(0.0);
    let sugar = profile.sugar.max(0.0);
    let fiber = profile.fiber.max(0.0);
    let net_carbs = (profile.total_carbs.max(0.0) - fiber).max(0.0);

    // The 1e-5 keeps an all-zero denominator from dividing by zero.
    let ratio = (net_carbs + sugar) / (protein + fiber + fat + 1e-5);
    let adjusted = (ratio * RATIO_ADJUSTMENT).min(RATIO_CAP);
    let span = SCORE_CEILING - SCORE_FLOOR;
    round2(SCORE_FLOOR + adjusted.powf(SCORE_EXPONENT) * span / RATIO_CAP.powf(SCORE_EXPONENT))
}

/// Ratio driving tier classification: (sugar + net carbs + 1) over
/// (protein + fiber + 1). The +1 terms keep sparse profiles finite and
/// nudge them toward the benign end.
pub fn base_ratio(profile: &MacroProfile) -> f64 {
    let sugar = profile.sugar.max(0.0);
    let protein = profile.protein.max(0.0);
    let fiber = profile.fiber.max(0.0);
    (sugar + profile.net_carbs() + 1.0) / (protein + fiber + 1.0)
}

/// Qualitative band for a base ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Balanced,
    Caution,
    HighSpike,
    DangerZone,
}

impl Tier {
    pub fn from_base_ratio(ratio: f64) -> Tier {
        if ratio < 20.0 {
            Tier::Balanced
        } else if ratio <= 30.0 {
            Tier::Caution
        } else if ratio <= 40.0 {
            Tier::HighSpike
        } else {
            Tier::DangerZone
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Balanced => "Balanced",
            Tier::Caution => "Caution",
            Tier::HighSpike => "High Spike",
            Tier::DangerZone => "Danger Zone",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Tier::Balanced => "green",
            Tier::Caution => "yellow",
            Tier::HighSpike => "red",
            Tier::DangerZone => "light_navy_blue",
        }
    }
}

/// Full scoring pass for one profile: spike score, tier, and a jittered
/// balanced counterpart anchored on the requested macro.
pub fn score_macros(profile: &MacroProfile, anchor: Anchor) -> ScoreReport {
    let balanced = jitter_profile(&balance_macros(profile, anchor), BALANCED_JITTER_GRAMS);
    let ratio = base_ratio(profile);
    let tier = Tier::from_base_ratio(ratio);
    ScoreReport {
        spike_score: spike_score(profile),
        input_macros: *profile,
        balanced_macros: balanced,
        base_ratio: ratio,
        tier_label: tier.label().to_string(),
        tier_color: tier.color().to_string(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
