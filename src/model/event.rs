use serde::{Deserialize, Serialize};

use super::timestamp::SimTimestamp;

/// A show on the calendar; container for resolved matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: u64,
    pub promotion_id: u64,
    pub name: String,
    pub venue: String,
    pub date: SimTimestamp,
    /// Mean segment rating of the event's matches; `None` until the first match.
    pub average_rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub promotion_id: u64,
    pub name: String,
    pub venue: String,
    pub date: SimTimestamp,
}

impl NewEvent {
    pub fn new(
        promotion_id: u64,
        name: impl Into<String>,
        venue: impl Into<String>,
        date: SimTimestamp,
    ) -> Self {
        Self {
            promotion_id,
            name: name.into(),
            venue: venue.into(),
            date,
        }
    }
}
