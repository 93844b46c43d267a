pub mod db;
pub mod error;
pub mod flush;
pub mod id;
pub mod model;
pub mod sim;
pub mod store;

#[cfg(test)]
mod testutil;

pub use error::{SimError, SimResult};
pub use id::IdGenerator;
pub use model::{
    Attributes, Competitor, CrowdReaction, Event, FinishType, MatchRecord, MatchType, Reign,
    SimTimestamp, Title, TitleState,
};
pub use store::{MemoryStore, Store};
