use rand::{Rng, RngCore};
use serde::Serialize;

use super::scoring::performance_score;
use crate::error::{SimError, SimResult};
use crate::model::{Attributes, Competitor, CrowdReaction, FinishType, MatchType};

pub const MIN_PARTICIPANTS: usize = 2;
pub const MAX_PARTICIPANTS: usize = 4;

pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 10.0;

const ATTRIBUTE_MIN: f64 = 0.0;
const ATTRIBUTE_MAX: f64 = 100.0;

const QUALITY_VARIANCE: f64 = 1.0;
const SEGMENT_FACTOR: f64 = 0.8;
const SEGMENT_VARIANCE: f64 = 0.5;

/// A resolved but not yet persisted match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchOutcome {
    pub winner_id: u64,
    pub match_type: MatchType,
    pub quality: f64,
    pub segment_rating: f64,
    pub crowd_reaction: CrowdReaction,
    pub finish: FinishType,
    pub description: String,
}

/// Resolve a two-competitor match. Pure: nothing is persisted.
pub fn resolve_match(
    a: &Competitor,
    b: &Competitor,
    match_type: MatchType,
    rng: &mut dyn RngCore,
) -> SimResult<MatchOutcome> {
    resolve_multi(&[a, b], match_type, rng)
}

/// Resolve a match between 2–4 distinct competitors.
///
/// Each competitor wins with probability proportional to its performance
/// score; quality is derived from the field's average skill and psychology.
pub fn resolve_multi(
    competitors: &[&Competitor],
    match_type: MatchType,
    rng: &mut dyn RngCore,
) -> SimResult<MatchOutcome> {
    let ids: Vec<u64> = competitors.iter().map(|c| c.id).collect();
    validate_participants(&ids)?;
    for c in competitors {
        validate_attributes(c)?;
    }

    let scores: Vec<f64> = competitors
        .iter()
        .map(|c| performance_score(&c.attributes, rng))
        .collect();
    let winner_idx = pick_winner(&scores, rng)
        .ok_or_else(|| SimError::invalid_input("a match needs participants"))?;
    let winner = competitors[winner_idx];

    let attrs: Vec<Attributes> = competitors.iter().map(|c| c.attributes).collect();
    let quality = match_quality(&attrs, rng);
    let segment_rating = segment_rating(quality, rng);
    let finish = random_finish(rng);

    let losers: Vec<&str> = competitors
        .iter()
        .filter(|c| c.id != winner.id)
        .map(|c| c.name.as_str())
        .collect();

    Ok(MatchOutcome {
        winner_id: winner.id,
        match_type,
        quality,
        segment_rating,
        crowd_reaction: crowd_reaction(quality),
        finish,
        description: format!("{} defeated {}", winner.name, losers.join(" and ")),
    })
}

/// Check a participant list: 2–4 entries, no repeats.
pub fn validate_participants(ids: &[u64]) -> SimResult<()> {
    if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&ids.len()) {
        return Err(SimError::invalid_input(format!(
            "a match needs {MIN_PARTICIPANTS}-{MAX_PARTICIPANTS} participants, got {}",
            ids.len()
        )));
    }
    for (i, id) in ids.iter().enumerate() {
        if ids[..i].contains(id) {
            return Err(SimError::invalid_input(format!(
                "competitor {id} appears more than once"
            )));
        }
    }
    Ok(())
}

/// Every attribute must be a finite value in [0, 100].
pub fn validate_attributes(competitor: &Competitor) -> SimResult<()> {
    let a = &competitor.attributes;
    let fields = [
        ("skill", a.skill),
        ("entertainment", a.entertainment),
        ("star_power", a.star_power),
        ("intimidation", a.intimidation),
        ("psychology", a.psychology),
        ("stamina", a.stamina),
    ];
    for (name, value) in fields {
        if !(ATTRIBUTE_MIN..=ATTRIBUTE_MAX).contains(&value) {
            return Err(SimError::invalid_input(format!(
                "competitor {} has {name} {value}, expected {ATTRIBUTE_MIN}-{ATTRIBUTE_MAX}",
                competitor.id
            )));
        }
    }
    Ok(())
}

/// Quality and segment rating must both be finite values in [1, 10].
pub fn validate_ratings(quality: f64, segment_rating: f64) -> SimResult<()> {
    for (name, value) in [("quality", quality), ("segment rating", segment_rating)] {
        if !(RATING_MIN..=RATING_MAX).contains(&value) {
            return Err(SimError::invalid_input(format!(
                "{name} {value} outside {RATING_MIN}-{RATING_MAX}"
            )));
        }
    }
    Ok(())
}

/// Index of the winner, drawn with probability `score / total`.
///
/// All-zero scores fall back to a uniform pick so a field of zero-rated
/// competitors still resolves. `None` for an empty field; no draw is made.
pub fn pick_winner(scores: &[f64], rng: &mut dyn RngCore) -> Option<usize> {
    if scores.is_empty() {
        return None;
    }
    let roll: f64 = rng.random();
    let total: f64 = scores.iter().sum();
    let n = scores.len();

    if total <= 0.0 {
        return Some(((roll * n as f64) as usize).min(n - 1));
    }

    let mut cumulative = 0.0;
    for (i, score) in scores.iter().enumerate() {
        cumulative += score / total;
        if roll < cumulative {
            return Some(i);
        }
    }
    Some(n - 1)
}

/// In-ring quality in [1, 10] from average skill (60%) and psychology (40%).
pub fn match_quality(attrs: &[Attributes], rng: &mut dyn RngCore) -> f64 {
    let n = attrs.len().max(1) as f64;
    let avg_skill = attrs.iter().map(|a| a.skill).sum::<f64>() / n;
    let avg_psychology = attrs.iter().map(|a| a.psychology).sum::<f64>() / n;

    let base = (avg_skill * 0.6 + avg_psychology * 0.4) / 100.0 * 10.0;
    let variance = rng.random_range(-QUALITY_VARIANCE..=QUALITY_VARIANCE);
    (base + variance).clamp(RATING_MIN, RATING_MAX)
}

/// Broadcast rating in [1, 10]: 80% of quality plus a small swing.
pub fn segment_rating(quality: f64, rng: &mut dyn RngCore) -> f64 {
    let variance = rng.random_range(-SEGMENT_VARIANCE..=SEGMENT_VARIANCE);
    (quality * SEGMENT_FACTOR + variance).clamp(RATING_MIN, RATING_MAX)
}

pub fn crowd_reaction(quality: f64) -> CrowdReaction {
    if quality >= 8.5 {
        CrowdReaction::Exceptional
    } else if quality >= 8.0 {
        CrowdReaction::Excellent
    } else if quality >= 7.0 {
        CrowdReaction::VeryGood
    } else if quality >= 6.0 {
        CrowdReaction::Good
    } else {
        CrowdReaction::Acceptable
    }
}

pub fn random_finish(rng: &mut dyn RngCore) -> FinishType {
    FinishType::ALL[rng.random_range(0..FinishType::ALL.len())]
}
