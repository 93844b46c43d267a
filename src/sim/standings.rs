use crate::error::SimResult;
use crate::model::Competitor;
use crate::store::{LeagueStats, Store};

/// Competitors ordered by wins (desc), then star power (desc), then ID.
/// `promotion_id` limits the table to one promotion.
pub fn rankings(store: &dyn Store, promotion_id: Option<u64>) -> SimResult<Vec<Competitor>> {
    let mut table: Vec<Competitor> = store
        .competitors()?
        .into_iter()
        .filter(|c| promotion_id.is_none_or(|p| c.promotion_id == p))
        .collect();
    table.sort_by(|a, b| {
        b.record
            .wins
            .cmp(&a.record.wins)
            .then_with(|| b.attributes.star_power.total_cmp(&a.attributes.star_power))
            .then_with(|| a.id.cmp(&b.id))
    });
    Ok(table)
}

pub fn league_stats(store: &dyn Store) -> SimResult<LeagueStats> {
    store.league_stats()
}
