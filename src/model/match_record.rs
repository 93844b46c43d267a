use serde::{Deserialize, Serialize};

use super::timestamp::SimTimestamp;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MatchType {
    Singles,
    TagTeam,
    TripleThreat,
    FatalFourWay,
    Custom(String),
}

string_enum_open!(MatchType, "match type", {
    Singles => "singles",
    TagTeam => "tag_team",
    TripleThreat => "triple_threat",
    FatalFourWay => "fatal_four_way",
});

/// Crowd reaction bucket, ordered best-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CrowdReaction {
    Exceptional,
    Excellent,
    VeryGood,
    Good,
    Acceptable,
}

string_enum!(CrowdReaction {
    Exceptional => "exceptional",
    Excellent => "excellent",
    VeryGood => "very_good",
    Good => "good",
    Acceptable => "acceptable",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FinishType {
    Pinfall,
    Submission,
    Finisher,
    Rollup,
    CountOut,
    Disqualification,
}

string_enum!(FinishType {
    Pinfall => "pinfall",
    Submission => "submission",
    Finisher => "finisher",
    Rollup => "rollup",
    CountOut => "count_out",
    Disqualification => "disqualification",
});

/// A persisted match result. Never mutated after insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    pub id: u64,
    pub event_id: u64,
    pub participants: Vec<u64>,
    pub winner_id: u64,
    pub match_type: MatchType,
    pub title_id: Option<u64>,
    pub quality: f64,
    pub segment_rating: f64,
    pub crowd_reaction: CrowdReaction,
    pub finish: FinishType,
    pub description: String,
    pub created_at: SimTimestamp,
}

/// Everything needed to persist a match; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMatch {
    pub event_id: u64,
    pub participants: Vec<u64>,
    pub winner_id: u64,
    pub match_type: MatchType,
    pub title_id: Option<u64>,
    pub quality: f64,
    pub segment_rating: f64,
    pub crowd_reaction: CrowdReaction,
    pub finish: FinishType,
    pub description: String,
}
