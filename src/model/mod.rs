#[macro_use]
mod macros;

pub mod competitor;
pub mod event;
pub mod match_record;
pub mod timestamp;
pub mod title;

pub use competitor::{Attributes, Competitor, NewCompetitor, Record, Region, RegionalPopularity};
pub use event::{Event, NewEvent};
pub use match_record::{CrowdReaction, FinishType, MatchRecord, MatchType, NewMatch};
pub use timestamp::SimTimestamp;
pub use title::{NewTitle, Reign, Title, TitleState};
