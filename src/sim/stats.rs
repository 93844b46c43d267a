use crate::error::{SimError, SimResult};
use crate::store::Store;

pub const WIN_POPULARITY_DELTA: f64 = 15.0;
pub const LOSS_POPULARITY_DELTA: f64 = -5.0;

/// Apply one match result to a competitor's record and regional popularity.
///
/// Every region moves by the same flat delta and is clamped to [0, 100]
/// on its own.
pub fn apply_result(store: &mut dyn Store, competitor_id: u64, won: bool) -> SimResult<()> {
    let mut competitor = store
        .competitor(competitor_id)?
        .ok_or_else(|| SimError::lookup("competitor", competitor_id))?;

    competitor.record.apply(won);
    competitor.popularity.shift(if won {
        WIN_POPULARITY_DELTA
    } else {
        LOSS_POPULARITY_DELTA
    });

    store.update_competitor(&competitor)
}
