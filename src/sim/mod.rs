mod batch;
mod lineage;
mod outcome;
mod rating;
mod record;
mod scoring;
mod standings;
mod stats;

pub use batch::{BatchConfig, BatchRun, BatchSummary, POOL_CAP, run_batch};
pub use lineage::award_title;
pub use outcome::{
    MatchOutcome, crowd_reaction, match_quality, pick_winner, resolve_match, resolve_multi,
    segment_rating, validate_attributes, validate_ratings,
};
pub use rating::refresh_event_rating;
pub use record::record_match;
pub use scoring::{base_score, performance_score};
pub use standings::{league_stats, rankings};
pub use stats::{LOSS_POPULARITY_DELTA, WIN_POPULARITY_DELTA, apply_result};
