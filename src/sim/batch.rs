use std::collections::BTreeSet;

use rand::{Rng, RngCore};
use serde::Serialize;

use super::outcome::resolve_match;
use super::rating::refresh_event_rating;
use super::stats::apply_result;
use crate::error::{SimError, SimResult};
use crate::model::{Competitor, MatchType, NewEvent, NewMatch, SimTimestamp};
use crate::store::Store;

/// Upper bound on the competitor pool loaded for one run.
pub const POOL_CAP: usize = 200;

/// Parameters of a scripted run of events and matches.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub promotion_id: u64,
    pub event_count: u32,
    pub matches_per_event: u32,
    /// Events are named `"<prefix> #<n>"`.
    pub name_prefix: String,
    pub pool_cap: usize,
}

impl BatchConfig {
    pub fn new(
        promotion_id: u64,
        event_count: u32,
        matches_per_event: u32,
        name_prefix: impl Into<String>,
    ) -> Self {
        Self {
            promotion_id,
            event_count,
            matches_per_event,
            name_prefix: name_prefix.into(),
            pool_cap: POOL_CAP,
        }
    }
}

/// What a run (or a single event of it) actually did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub events_created: u32,
    pub matches_simulated: u32,
    pub errors: Vec<String>,
}

impl BatchSummary {
    /// Summary of a run that never started.
    pub fn from_error(err: &SimError) -> Self {
        Self {
            errors: vec![err.to_string()],
            ..Self::default()
        }
    }

    pub fn merge(&mut self, other: BatchSummary) {
        self.events_created += other.events_created;
        self.matches_simulated += other.matches_simulated;
        self.errors.extend(other.errors);
    }

    fn record_error(&mut self, context: String, err: SimError) {
        tracing::warn!(%err, "{context} failed");
        self.errors.push(format!("{context}: {err}"));
    }
}

/// A run whose competitor pool has been loaded and validated.
///
/// Drive it with [`BatchRun::simulate_event`] one event at a time, or use
/// [`run_batch`] to play every event in order.
#[derive(Debug)]
pub struct BatchRun<'a> {
    config: &'a BatchConfig,
    pool: Vec<Competitor>,
    start: SimTimestamp,
}

impl<'a> BatchRun<'a> {
    /// Load the pool and check it has at least two distinct competitors.
    /// Nothing is written to the store.
    pub fn prepare(store: &dyn Store, config: &'a BatchConfig) -> SimResult<Self> {
        let pool = store.competitors_in_promotion(config.promotion_id, config.pool_cap)?;
        let distinct: BTreeSet<u64> = pool.iter().map(|c| c.id).collect();
        if distinct.len() < 2 {
            return Err(SimError::constraint(format!(
                "promotion {} needs at least 2 competitors, found {}",
                config.promotion_id,
                distinct.len()
            )));
        }
        Ok(Self {
            config,
            pool,
            start: store.now(),
        })
    }

    pub fn pool(&self) -> &[Competitor] {
        &self.pool
    }

    /// Create event `event_number` (1-based), play its matches, then refresh
    /// its average rating. Failures are recorded in the returned summary.
    pub fn simulate_event(
        &self,
        store: &mut dyn Store,
        event_number: u32,
        rng: &mut dyn RngCore,
    ) -> BatchSummary {
        let mut summary = BatchSummary::default();

        let new_event = NewEvent::new(
            self.config.promotion_id,
            format!("{} #{event_number}", self.config.name_prefix),
            format!("Arena {event_number}"),
            self.start.plus_days(event_number.saturating_sub(1)),
        );
        let event_id = match store.insert_event(new_event) {
            Ok(id) => id,
            Err(err) => {
                summary.record_error(format!("event {event_number}"), err);
                return summary;
            }
        };
        summary.events_created = 1;

        for match_number in 1..=self.config.matches_per_event {
            match self.simulate_match(store, event_id, rng) {
                Ok(_) => summary.matches_simulated += 1,
                Err(err) => summary.record_error(
                    format!("event {event_number} match {match_number}"),
                    err,
                ),
            }
        }

        if let Err(err) = refresh_event_rating(store, event_id) {
            summary.record_error(format!("event {event_number} rating"), err);
        }
        summary
    }

    /// Pick a random pair, resolve, persist, and apply stats for both.
    fn simulate_match(
        &self,
        store: &mut dyn Store,
        event_id: u64,
        rng: &mut dyn RngCore,
    ) -> SimResult<u64> {
        let (a, b) = self.pick_pair(rng);
        let outcome = resolve_match(a, b, MatchType::Singles, rng)?;

        let match_id = store.insert_match(NewMatch {
            event_id,
            participants: vec![a.id, b.id],
            winner_id: outcome.winner_id,
            match_type: outcome.match_type,
            title_id: None,
            quality: outcome.quality,
            segment_rating: outcome.segment_rating,
            crowd_reaction: outcome.crowd_reaction,
            finish: outcome.finish,
            description: outcome.description,
        })?;
        apply_result(store, a.id, a.id == outcome.winner_id)?;
        apply_result(store, b.id, b.id == outcome.winner_id)?;

        tracing::debug!(event_id, match_id, winner_id = outcome.winner_id, "simulated match");
        Ok(match_id)
    }

    /// Two distinct competitors drawn uniformly; the second is redrawn on collision.
    fn pick_pair(&self, rng: &mut dyn RngCore) -> (&Competitor, &Competitor) {
        let first = &self.pool[rng.random_range(0..self.pool.len())];
        let mut second = &self.pool[rng.random_range(0..self.pool.len())];
        while second.id == first.id {
            second = &self.pool[rng.random_range(0..self.pool.len())];
        }
        (first, second)
    }
}

/// Play `config.event_count` events of `config.matches_per_event` matches each.
///
/// Returns `Err` only when the pool check fails, before any write. Every
/// later failure is caught per match or per event and listed in the summary.
pub fn run_batch(
    store: &mut dyn Store,
    config: &BatchConfig,
    rng: &mut dyn RngCore,
) -> SimResult<BatchSummary> {
    let run = BatchRun::prepare(&*store, config)?;
    tracing::info!(
        promotion_id = config.promotion_id,
        events = config.event_count,
        matches_per_event = config.matches_per_event,
        pool = run.pool().len(),
        "starting batch run"
    );

    let mut summary = BatchSummary::default();
    for event_number in 1..=config.event_count {
        summary.merge(run.simulate_event(store, event_number, rng));
    }

    tracing::info!(
        events_created = summary.events_created,
        matches_simulated = summary.matches_simulated,
        errors = summary.errors.len(),
        "batch run finished"
    );
    Ok(summary)
}
