use rand::{Rng, RngCore};

use crate::model::Attributes;

pub const SKILL_WEIGHT: f64 = 0.25;
pub const ENTERTAINMENT_WEIGHT: f64 = 0.15;
pub const STAR_POWER_WEIGHT: f64 = 0.20;
pub const INTIMIDATION_WEIGHT: f64 = 0.15;
pub const PSYCHOLOGY_WEIGHT: f64 = 0.15;
pub const STAMINA_WEIGHT: f64 = 0.10;

/// Maximum relative swing applied to the base score (±10%).
pub const SCORE_VARIANCE: f64 = 0.1;

/// Weighted sum of the six attributes. Weights sum to 1.0, so a competitor
/// with every attribute at 100 scores 100.
pub fn base_score(attrs: &Attributes) -> f64 {
    attrs.skill * SKILL_WEIGHT
        + attrs.entertainment * ENTERTAINMENT_WEIGHT
        + attrs.star_power * STAR_POWER_WEIGHT
        + attrs.intimidation * INTIMIDATION_WEIGHT
        + attrs.psychology * PSYCHOLOGY_WEIGHT
        + attrs.stamina * STAMINA_WEIGHT
}

/// Base score with a uniform ±10% swing, never negative.
pub fn performance_score(attrs: &Attributes, rng: &mut dyn RngCore) -> f64 {
    let base = base_score(attrs);
    let swing = rng.random_range(-SCORE_VARIANCE..=SCORE_VARIANCE);
    (base + base * swing).max(0.0)
}
