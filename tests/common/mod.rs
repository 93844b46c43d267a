#![allow(dead_code)]

use std::collections::BTreeSet;

use ring_sim::error::{SimError, SimResult};
use ring_sim::model::*;
use ring_sim::store::{LeagueStats, MemoryStore, Store};

pub struct League {
    pub store: MemoryStore,
    pub roster: Vec<u64>,
    pub outsider: u64,
    pub title: u64,
}

/// Six competitors and a vacant title in promotion 1, one competitor in promotion 2.
pub fn build_test_league() -> League {
    let mut store = MemoryStore::starting_at(SimTimestamp::new(2024, 10, 20));

    let names = ["Ace", "Blaze", "Cobra", "Dynamo", "Eclipse", "Fury"];
    let roster = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let level = 45.0 + i as f64 * 8.0;
            let mut attrs = Attributes::uniform(level);
            attrs.star_power = 90.0 - i as f64 * 10.0;
            store.add_competitor(NewCompetitor::new(*name, 1, attrs))
        })
        .collect();
    let outsider = store.add_competitor(NewCompetitor::new(
        "Lone Wolf",
        2,
        Attributes::uniform(70.0),
    ));
    let title = store.add_title(NewTitle::new("World Heavyweight Championship", 1, 95.0));

    League {
        store,
        roster,
        outsider,
        title,
    }
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Store wrapper that injects failures for chosen competitors and event inserts.
pub struct FlakyStore {
    pub inner: MemoryStore,
    /// `update_competitor` fails with a lookup error for these IDs.
    pub broken_competitors: BTreeSet<u64>,
    /// 1-based `insert_event` calls that fail.
    pub failing_event_inserts: BTreeSet<usize>,
    event_inserts: usize,
}

impl FlakyStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            broken_competitors: BTreeSet::new(),
            failing_event_inserts: BTreeSet::new(),
            event_inserts: 0,
        }
    }
}

impl Store for FlakyStore {
    fn now(&self) -> SimTimestamp {
        self.inner.now()
    }

    fn competitor(&self, id: u64) -> SimResult<Option<Competitor>> {
        self.inner.competitor(id)
    }

    fn competitors_in_promotion(
        &self,
        promotion_id: u64,
        limit: usize,
    ) -> SimResult<Vec<Competitor>> {
        self.inner.competitors_in_promotion(promotion_id, limit)
    }

    fn competitors(&self) -> SimResult<Vec<Competitor>> {
        self.inner.competitors()
    }

    fn update_competitor(&mut self, competitor: &Competitor) -> SimResult<()> {
        if self.broken_competitors.contains(&competitor.id) {
            return Err(SimError::lookup("competitor", competitor.id));
        }
        self.inner.update_competitor(competitor)
    }

    fn title(&self, id: u64) -> SimResult<Option<Title>> {
        self.inner.title(id)
    }

    fn update_title(&mut self, title: &Title) -> SimResult<()> {
        self.inner.update_title(title)
    }

    fn open_reign(&self, title_id: u64) -> SimResult<Option<Reign>> {
        self.inner.open_reign(title_id)
    }

    fn reigns_for_title(&self, title_id: u64) -> SimResult<Vec<Reign>> {
        self.inner.reigns_for_title(title_id)
    }

    fn insert_reign(
        &mut self,
        title_id: u64,
        champion_id: u64,
        start: SimTimestamp,
    ) -> SimResult<u64> {
        self.inner.insert_reign(title_id, champion_id, start)
    }

    fn close_reign(&mut self, reign_id: u64, end: SimTimestamp, defenses: u32) -> SimResult<()> {
        self.inner.close_reign(reign_id, end, defenses)
    }

    fn event(&self, id: u64) -> SimResult<Option<Event>> {
        self.inner.event(id)
    }

    fn insert_event(&mut self, event: NewEvent) -> SimResult<u64> {
        self.event_inserts += 1;
        if self.failing_event_inserts.contains(&self.event_inserts) {
            return Err(SimError::Storage("disk full".to_string()));
        }
        self.inner.insert_event(event)
    }

    fn set_event_rating(&mut self, event_id: u64, average_rating: f64) -> SimResult<()> {
        self.inner.set_event_rating(event_id, average_rating)
    }

    fn insert_match(&mut self, record: NewMatch) -> SimResult<u64> {
        self.inner.insert_match(record)
    }

    fn matches_for_event(&self, event_id: u64) -> SimResult<Vec<MatchRecord>> {
        self.inner.matches_for_event(event_id)
    }

    fn league_stats(&self) -> SimResult<LeagueStats> {
        self.inner.league_stats()
    }
}
