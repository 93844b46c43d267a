use super::lineage::award_title;
use super::outcome::{validate_participants, validate_ratings};
use super::rating::refresh_event_rating;
use super::stats::apply_result;
use crate::error::{SimError, SimResult};
use crate::model::NewMatch;
use crate::store::Store;

/// Persist a resolved match and propagate it.
///
/// Order: insert the record, update every participant's stats, refresh the
/// event's average rating, then (for title matches) hand the title to the
/// winner. Each step is its own write; a failure part way through is
/// returned to the caller and leaves the earlier writes in place.
pub fn record_match(store: &mut dyn Store, record: NewMatch) -> SimResult<u64> {
    validate_participants(&record.participants)?;
    if !record.participants.contains(&record.winner_id) {
        return Err(SimError::invalid_input(format!(
            "winner {} is not a participant",
            record.winner_id
        )));
    }
    validate_ratings(record.quality, record.segment_rating)?;

    let event_id = record.event_id;
    let title_id = record.title_id;
    let winner_id = record.winner_id;
    let participants = record.participants.clone();

    let match_id = store.insert_match(record)?;

    for participant in participants {
        apply_result(store, participant, participant == winner_id)?;
    }
    refresh_event_rating(store, event_id)?;
    if let Some(title_id) = title_id {
        award_title(store, title_id, winner_id)?;
    }

    tracing::debug!(match_id, event_id, winner_id, "match recorded");
    Ok(match_id)
}
