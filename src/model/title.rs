use serde::{Deserialize, Serialize};

use super::timestamp::SimTimestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub id: u64,
    pub name: String,
    pub promotion_id: u64,
    pub prestige: f64,
    /// `None` while the title is vacant.
    pub current_champion: Option<u64>,
    pub defenses: u32,
}

/// Lineage state of a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleState {
    Vacant,
    Held(u64),
}

impl Title {
    pub fn state(&self) -> TitleState {
        match self.current_champion {
            Some(champion_id) => TitleState::Held(champion_id),
            None => TitleState::Vacant,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTitle {
    pub name: String,
    pub promotion_id: u64,
    pub prestige: f64,
}

impl NewTitle {
    pub fn new(name: impl Into<String>, promotion_id: u64, prestige: f64) -> Self {
        Self {
            name: name.into(),
            promotion_id,
            prestige,
        }
    }
}

/// One champion's tenure with a title. Open while `end` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reign {
    pub id: u64,
    pub title_id: u64,
    pub champion_id: u64,
    pub start: SimTimestamp,
    pub end: Option<SimTimestamp>,
    pub defenses: u32,
}

impl Reign {
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}
