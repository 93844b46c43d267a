mod memory;

pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};

use crate::error::SimResult;
use crate::model::{
    Competitor, Event, MatchRecord, NewEvent, NewMatch, Reign, SimTimestamp, Title,
};

/// Row counts across the league tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueStats {
    pub events: usize,
    pub matches: usize,
    pub competitors: usize,
    pub titles: usize,
}

/// Storage boundary used by every simulation component.
///
/// Each mutating call is its own unit of work; callers get no atomicity across
/// calls. Reads of a missing row return `Ok(None)`, updates of a missing row
/// return `SimError::Lookup`. Inserts enforce the same foreign keys as the
/// Postgres schema and fail with `SimError::Lookup` before writing anything.
pub trait Store {
    /// Current store clock, used for reign boundaries and match timestamps.
    fn now(&self) -> SimTimestamp;

    fn competitor(&self, id: u64) -> SimResult<Option<Competitor>>;
    /// Competitors of one promotion in ID order, at most `limit` of them.
    fn competitors_in_promotion(&self, promotion_id: u64, limit: usize)
    -> SimResult<Vec<Competitor>>;
    fn competitors(&self) -> SimResult<Vec<Competitor>>;
    fn update_competitor(&mut self, competitor: &Competitor) -> SimResult<()>;

    fn title(&self, id: u64) -> SimResult<Option<Title>>;
    fn update_title(&mut self, title: &Title) -> SimResult<()>;

    /// The reign of `title_id` with no end timestamp, if any.
    fn open_reign(&self, title_id: u64) -> SimResult<Option<Reign>>;
    fn reigns_for_title(&self, title_id: u64) -> SimResult<Vec<Reign>>;
    fn insert_reign(&mut self, title_id: u64, champion_id: u64, start: SimTimestamp)
    -> SimResult<u64>;
    fn close_reign(&mut self, reign_id: u64, end: SimTimestamp, defenses: u32) -> SimResult<()>;

    fn event(&self, id: u64) -> SimResult<Option<Event>>;
    fn insert_event(&mut self, event: NewEvent) -> SimResult<u64>;
    fn set_event_rating(&mut self, event_id: u64, average_rating: f64) -> SimResult<()>;

    fn insert_match(&mut self, record: NewMatch) -> SimResult<u64>;
    fn matches_for_event(&self, event_id: u64) -> SimResult<Vec<MatchRecord>>;

    fn league_stats(&self) -> SimResult<LeagueStats>;
}
