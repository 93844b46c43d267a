use crate::error::{SimError, SimResult};
use crate::store::Store;

/// Recompute an event's average rating from its matches' segment ratings.
///
/// Returns the stored average, or `None` (and writes nothing) when the
/// event has no matches yet.
pub fn refresh_event_rating(store: &mut dyn Store, event_id: u64) -> SimResult<Option<f64>> {
    if store.event(event_id)?.is_none() {
        return Err(SimError::lookup("event", event_id));
    }

    let ratings: Vec<f64> = store
        .matches_for_event(event_id)?
        .iter()
        .map(|m| m.segment_rating)
        .collect();
    if ratings.is_empty() {
        return Ok(None);
    }

    let average = ratings.iter().sum::<f64>() / ratings.len() as f64;
    store.set_event_rating(event_id, average)?;
    Ok(Some(average))
}
