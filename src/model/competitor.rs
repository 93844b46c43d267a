use serde::{Deserialize, Serialize};

pub const POPULARITY_MIN: f64 = 0.0;
pub const POPULARITY_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Region {
    NorthAmerica,
    SouthAmerica,
    Asia,
    Oceania,
    Africa,
    Europe,
}

string_enum!(Region {
    NorthAmerica => "north_america",
    SouthAmerica => "south_america",
    Asia => "asia",
    Oceania => "oceania",
    Africa => "africa",
    Europe => "europe",
});

/// Six in-ring attributes, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    pub skill: f64,
    pub entertainment: f64,
    pub star_power: f64,
    pub intimidation: f64,
    pub psychology: f64,
    pub stamina: f64,
}

impl Attributes {
    /// Every attribute set to the same value.
    pub fn uniform(value: f64) -> Self {
        Self {
            skill: value,
            entertainment: value,
            star_power: value,
            intimidation: value,
            psychology: value,
            stamina: value,
        }
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::uniform(50.0)
    }
}

/// Per-region popularity, each value in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionalPopularity {
    pub north_america: f64,
    pub south_america: f64,
    pub asia: f64,
    pub oceania: f64,
    pub africa: f64,
    pub europe: f64,
}

impl RegionalPopularity {
    pub fn uniform(value: f64) -> Self {
        Self {
            north_america: value,
            south_america: value,
            asia: value,
            oceania: value,
            africa: value,
            europe: value,
        }
    }

    pub fn get(&self, region: Region) -> f64 {
        match region {
            Region::NorthAmerica => self.north_america,
            Region::SouthAmerica => self.south_america,
            Region::Asia => self.asia,
            Region::Oceania => self.oceania,
            Region::Africa => self.africa,
            Region::Europe => self.europe,
        }
    }

    fn get_mut(&mut self, region: Region) -> &mut f64 {
        match region {
            Region::NorthAmerica => &mut self.north_america,
            Region::SouthAmerica => &mut self.south_america,
            Region::Asia => &mut self.asia,
            Region::Oceania => &mut self.oceania,
            Region::Africa => &mut self.africa,
            Region::Europe => &mut self.europe,
        }
    }

    /// Add `delta` to every region independently, clamping each to [0, 100].
    pub fn shift(&mut self, delta: f64) {
        for &region in Region::ALL {
            let value = self.get_mut(region);
            *value = (*value + delta).clamp(POPULARITY_MIN, POPULARITY_MAX);
        }
    }
}

impl Default for RegionalPopularity {
    /// Matches the defaults the roster tables are provisioned with.
    fn default() -> Self {
        Self {
            north_america: 50.0,
            south_america: 30.0,
            asia: 30.0,
            oceania: 20.0,
            africa: 20.0,
            europe: 40.0,
        }
    }
}

/// Cumulative win/loss record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub matches: u32,
    pub wins: u32,
    pub losses: u32,
}

impl Record {
    pub fn apply(&mut self, won: bool) {
        self.matches += 1;
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: u64,
    pub name: String,
    pub promotion_id: u64,
    pub attributes: Attributes,
    pub popularity: RegionalPopularity,
    pub record: Record,
}

/// A competitor as provisioned by the roster setup step, before it has an ID.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCompetitor {
    pub name: String,
    pub promotion_id: u64,
    pub attributes: Attributes,
    pub popularity: RegionalPopularity,
}

impl NewCompetitor {
    pub fn new(name: impl Into<String>, promotion_id: u64, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            promotion_id,
            attributes,
            popularity: RegionalPopularity::default(),
        }
    }

    pub fn with_popularity(mut self, popularity: RegionalPopularity) -> Self {
        self.popularity = popularity;
        self
    }
}
