use std::collections::BTreeMap;

use super::{LeagueStats, Store};
use crate::error::{SimError, SimResult};
use crate::id::IdGenerator;
use crate::model::{
    Competitor, Event, MatchRecord, NewCompetitor, NewEvent, NewMatch, NewTitle, Record, Reign,
    SimTimestamp, Title,
};

/// In-process store backed by ordered maps.
///
/// Iteration order is ID order, so two runs with the same seed see the
/// same rows in the same order.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    pub competitors: BTreeMap<u64, Competitor>,
    pub titles: BTreeMap<u64, Title>,
    pub reigns: BTreeMap<u64, Reign>,
    pub events: BTreeMap<u64, Event>,
    pub matches: BTreeMap<u64, MatchRecord>,
    pub id_gen: IdGenerator,
    pub clock: SimTimestamp,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::starting_at(SimTimestamp::default())
    }

    pub fn starting_at(clock: SimTimestamp) -> Self {
        Self {
            competitors: BTreeMap::new(),
            titles: BTreeMap::new(),
            reigns: BTreeMap::new(),
            events: BTreeMap::new(),
            matches: BTreeMap::new(),
            id_gen: IdGenerator::new(),
            clock,
        }
    }

    /// Provision a competitor with an empty record. Returns the assigned ID.
    pub fn add_competitor(&mut self, new: NewCompetitor) -> u64 {
        let id = self.id_gen.next_id();
        self.competitors.insert(
            id,
            Competitor {
                id,
                name: new.name,
                promotion_id: new.promotion_id,
                attributes: new.attributes,
                popularity: new.popularity,
                record: Record::default(),
            },
        );
        id
    }

    /// Provision a vacant title. Returns the assigned ID.
    pub fn add_title(&mut self, new: NewTitle) -> u64 {
        let id = self.id_gen.next_id();
        self.titles.insert(
            id,
            Title {
                id,
                name: new.name,
                promotion_id: new.promotion_id,
                prestige: new.prestige,
                current_champion: None,
                defenses: 0,
            },
        );
        id
    }

    pub fn advance_clock(&mut self, hours: u32) {
        self.clock = self.clock.plus_hours(hours);
    }

    fn require_competitor(&self, id: u64) -> SimResult<()> {
        if self.competitors.contains_key(&id) {
            Ok(())
        } else {
            Err(SimError::lookup("competitor", id))
        }
    }

    fn require_title(&self, id: u64) -> SimResult<()> {
        if self.titles.contains_key(&id) {
            Ok(())
        } else {
            Err(SimError::lookup("title", id))
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn now(&self) -> SimTimestamp {
        self.clock
    }

    fn competitor(&self, id: u64) -> SimResult<Option<Competitor>> {
        Ok(self.competitors.get(&id).cloned())
    }

    fn competitors_in_promotion(
        &self,
        promotion_id: u64,
        limit: usize,
    ) -> SimResult<Vec<Competitor>> {
        Ok(self
            .competitors
            .values()
            .filter(|c| c.promotion_id == promotion_id)
            .take(limit)
            .cloned()
            .collect())
    }

    fn competitors(&self) -> SimResult<Vec<Competitor>> {
        Ok(self.competitors.values().cloned().collect())
    }

    fn update_competitor(&mut self, competitor: &Competitor) -> SimResult<()> {
        let slot = self
            .competitors
            .get_mut(&competitor.id)
            .ok_or_else(|| SimError::lookup("competitor", competitor.id))?;
        *slot = competitor.clone();
        Ok(())
    }

    fn title(&self, id: u64) -> SimResult<Option<Title>> {
        Ok(self.titles.get(&id).cloned())
    }

    fn update_title(&mut self, title: &Title) -> SimResult<()> {
        if let Some(champion_id) = title.current_champion {
            self.require_competitor(champion_id)?;
        }
        let slot = self
            .titles
            .get_mut(&title.id)
            .ok_or_else(|| SimError::lookup("title", title.id))?;
        *slot = title.clone();
        Ok(())
    }

    fn open_reign(&self, title_id: u64) -> SimResult<Option<Reign>> {
        Ok(self
            .reigns
            .values()
            .find(|r| r.title_id == title_id && r.is_open())
            .cloned())
    }

    fn reigns_for_title(&self, title_id: u64) -> SimResult<Vec<Reign>> {
        Ok(self
            .reigns
            .values()
            .filter(|r| r.title_id == title_id)
            .cloned()
            .collect())
    }

    fn insert_reign(
        &mut self,
        title_id: u64,
        champion_id: u64,
        start: SimTimestamp,
    ) -> SimResult<u64> {
        self.require_title(title_id)?;
        self.require_competitor(champion_id)?;
        if let Some(open) = self.open_reign(title_id)? {
            return Err(SimError::constraint(format!(
                "title {title_id} already has open reign {}",
                open.id
            )));
        }
        let id = self.id_gen.next_id();
        self.reigns.insert(
            id,
            Reign {
                id,
                title_id,
                champion_id,
                start,
                end: None,
                defenses: 0,
            },
        );
        Ok(id)
    }

    fn close_reign(&mut self, reign_id: u64, end: SimTimestamp, defenses: u32) -> SimResult<()> {
        let reign = self
            .reigns
            .get_mut(&reign_id)
            .ok_or_else(|| SimError::lookup("reign", reign_id))?;
        reign.end = Some(end);
        reign.defenses = defenses;
        Ok(())
    }

    fn event(&self, id: u64) -> SimResult<Option<Event>> {
        Ok(self.events.get(&id).cloned())
    }

    fn insert_event(&mut self, event: NewEvent) -> SimResult<u64> {
        let id = self.id_gen.next_id();
        self.events.insert(
            id,
            Event {
                id,
                promotion_id: event.promotion_id,
                name: event.name,
                venue: event.venue,
                date: event.date,
                average_rating: None,
            },
        );
        Ok(id)
    }

    fn set_event_rating(&mut self, event_id: u64, average_rating: f64) -> SimResult<()> {
        let event = self
            .events
            .get_mut(&event_id)
            .ok_or_else(|| SimError::lookup("event", event_id))?;
        event.average_rating = Some(average_rating);
        Ok(())
    }

    fn insert_match(&mut self, record: NewMatch) -> SimResult<u64> {
        if !self.events.contains_key(&record.event_id) {
            return Err(SimError::lookup("event", record.event_id));
        }
        for &participant in &record.participants {
            self.require_competitor(participant)?;
        }
        self.require_competitor(record.winner_id)?;
        if let Some(title_id) = record.title_id {
            self.require_title(title_id)?;
        }
        let id = self.id_gen.next_id();
        self.matches.insert(
            id,
            MatchRecord {
                id,
                event_id: record.event_id,
                participants: record.participants,
                winner_id: record.winner_id,
                match_type: record.match_type,
                title_id: record.title_id,
                quality: record.quality,
                segment_rating: record.segment_rating,
                crowd_reaction: record.crowd_reaction,
                finish: record.finish,
                description: record.description,
                created_at: self.clock,
            },
        );
        Ok(id)
    }

    fn matches_for_event(&self, event_id: u64) -> SimResult<Vec<MatchRecord>> {
        Ok(self
            .matches
            .values()
            .filter(|m| m.event_id == event_id)
            .cloned()
            .collect())
    }

    fn league_stats(&self) -> SimResult<LeagueStats> {
        Ok(LeagueStats {
            events: self.events.len(),
            matches: self.matches.len(),
            competitors: self.competitors.len(),
            titles: self.titles.len(),
        })
    }
}
