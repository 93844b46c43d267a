use crate::error::{SimError, SimResult};
use crate::model::TitleState;
use crate::store::Store;

/// Hand a title to the winner of a title match.
///
/// Every resolved title match starts a new reign, including a successful
/// defense by the incumbent: the open reign (if any) is closed at the store
/// clock with the title's current defense count, a fresh open reign is
/// inserted for the winner, and the title's defense counter resets to 1.
///
/// Returns the ID of the new reign.
pub fn award_title(store: &mut dyn Store, title_id: u64, winner_id: u64) -> SimResult<u64> {
    let mut title = store
        .title(title_id)?
        .ok_or_else(|| SimError::lookup("title", title_id))?;
    if store.competitor(winner_id)?.is_none() {
        return Err(SimError::lookup("competitor", winner_id));
    }
    let now = store.now();

    let open = store.open_reign(title_id)?;
    match (title.state(), &open) {
        (TitleState::Held(_), Some(reign)) => {
            store.close_reign(reign.id, now, title.defenses)?;
        }
        (TitleState::Held(holder), None) => {
            tracing::warn!(
                title_id,
                holder,
                "title held without an open reign; starting a new lineage"
            );
        }
        (TitleState::Vacant, Some(reign)) => {
            tracing::warn!(
                title_id,
                reign_id = reign.id,
                "vacant title had an open reign; closing it"
            );
            store.close_reign(reign.id, now, title.defenses)?;
        }
        (TitleState::Vacant, None) => {}
    }

    let reign_id = store.insert_reign(title_id, winner_id, now)?;
    title.current_champion = Some(winner_id);
    title.defenses = 1;
    store.update_title(&title)?;

    tracing::debug!(title_id, winner_id, reign_id, "title changed hands");
    Ok(reign_id)
}
