use std::collections::BTreeMap;
use std::num::TryFromIntError;

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::model::{
    Attributes, Competitor, CrowdReaction, Event, FinishType, MatchRecord, MatchType, Record,
    RegionalPopularity, Reign, SimTimestamp, Title,
};
use crate::store::MemoryStore;

/// Read every league table into a fresh [`MemoryStore`] whose clock is `clock`.
///
/// This is how rosters and titles provisioned outside the simulator enter
/// a run. The store's ID generator continues after the largest loaded ID.
pub async fn fetch_store(pool: &PgPool, clock: SimTimestamp) -> Result<MemoryStore, sqlx::Error> {
    let mut store = MemoryStore::starting_at(clock);

    for row in sqlx::query("SELECT * FROM competitors ORDER BY id")
        .fetch_all(pool)
        .await?
    {
        let c = competitor_from_row(&row)?;
        store.id_gen.observe(c.id);
        store.competitors.insert(c.id, c);
    }

    for row in sqlx::query("SELECT * FROM titles ORDER BY id")
        .fetch_all(pool)
        .await?
    {
        let t = Title {
            id: id(&row, "id")?,
            name: row.try_get("name")?,
            promotion_id: id(&row, "promotion_id")?,
            prestige: row.try_get("prestige")?,
            current_champion: opt_id(&row, "current_champion_id")?,
            defenses: count(&row, "defenses")?,
        };
        store.id_gen.observe(t.id);
        store.titles.insert(t.id, t);
    }

    for row in sqlx::query("SELECT * FROM events ORDER BY id")
        .fetch_all(pool)
        .await?
    {
        let e = Event {
            id: id(&row, "id")?,
            promotion_id: id(&row, "promotion_id")?,
            name: row.try_get("name")?,
            venue: row.try_get("venue")?,
            date: ts(&row, "date_ts")?,
            average_rating: row.try_get("average_rating")?,
        };
        store.id_gen.observe(e.id);
        store.events.insert(e.id, e);
    }

    let mut participants: BTreeMap<u64, Vec<u64>> = BTreeMap::new();
    for row in sqlx::query(
        "SELECT match_id, competitor_id FROM match_participants ORDER BY match_id, slot",
    )
    .fetch_all(pool)
    .await?
    {
        participants
            .entry(id(&row, "match_id")?)
            .or_default()
            .push(id(&row, "competitor_id")?);
    }

    for row in sqlx::query("SELECT * FROM matches ORDER BY id")
        .fetch_all(pool)
        .await?
    {
        let match_id = id(&row, "id")?;
        let m = MatchRecord {
            id: match_id,
            event_id: id(&row, "event_id")?,
            participants: participants.remove(&match_id).unwrap_or_default(),
            winner_id: id(&row, "winner_id")?,
            match_type: decode::<MatchType>(&row, "match_type")?,
            title_id: opt_id(&row, "title_id")?,
            quality: row.try_get("quality")?,
            segment_rating: row.try_get("segment_rating")?,
            crowd_reaction: decode::<CrowdReaction>(&row, "crowd_reaction")?,
            finish: decode::<FinishType>(&row, "finish_type")?,
            description: row.try_get("description")?,
            created_at: ts(&row, "created_ts")?,
        };
        store.id_gen.observe(m.id);
        store.matches.insert(m.id, m);
    }

    for row in sqlx::query("SELECT * FROM reigns ORDER BY id")
        .fetch_all(pool)
        .await?
    {
        let r = Reign {
            id: id(&row, "id")?,
            title_id: id(&row, "title_id")?,
            champion_id: id(&row, "champion_id")?,
            start: ts(&row, "start_ts")?,
            end: opt_id(&row, "end_ts")?
                .map(|raw| narrow::<u64, u32>("end_ts", raw).map(SimTimestamp::from_raw))
                .transpose()?,
            defenses: count(&row, "defenses")?,
        };
        store.id_gen.observe(r.id);
        store.reigns.insert(r.id, r);
    }

    Ok(store)
}

fn competitor_from_row(row: &PgRow) -> Result<Competitor, sqlx::Error> {
    Ok(Competitor {
        id: id(row, "id")?,
        name: row.try_get("name")?,
        promotion_id: id(row, "promotion_id")?,
        attributes: Attributes {
            skill: row.try_get("skill")?,
            entertainment: row.try_get("entertainment")?,
            star_power: row.try_get("star_power")?,
            intimidation: row.try_get("intimidation")?,
            psychology: row.try_get("psychology")?,
            stamina: row.try_get("stamina")?,
        },
        popularity: RegionalPopularity {
            north_america: row.try_get("popularity_north_america")?,
            south_america: row.try_get("popularity_south_america")?,
            asia: row.try_get("popularity_asia")?,
            oceania: row.try_get("popularity_oceania")?,
            africa: row.try_get("popularity_africa")?,
            europe: row.try_get("popularity_europe")?,
        },
        record: Record {
            matches: count(row, "total_matches")?,
            wins: count(row, "total_wins")?,
            losses: count(row, "total_losses")?,
        },
    })
}

fn id(row: &PgRow, column: &str) -> Result<u64, sqlx::Error> {
    narrow(column, row.try_get::<i64, _>(column)?)
}

fn opt_id(row: &PgRow, column: &str) -> Result<Option<u64>, sqlx::Error> {
    row.try_get::<Option<i64>, _>(column)?
        .map(|v| narrow(column, v))
        .transpose()
}

fn count(row: &PgRow, column: &str) -> Result<u32, sqlx::Error> {
    narrow(column, row.try_get::<i32, _>(column)?)
}

fn ts(row: &PgRow, column: &str) -> Result<SimTimestamp, sqlx::Error> {
    narrow(column, row.try_get::<i64, _>(column)?).map(SimTimestamp::from_raw)
}

/// Convert a signed Postgres integer into the unsigned width the model uses.
/// Negative or oversized values are decode errors, never wrapped.
fn narrow<S, T>(column: &str, value: S) -> Result<T, sqlx::Error>
where
    T: TryFrom<S, Error = TryFromIntError>,
{
    T::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: e.into(),
    })
}

/// Parse a TEXT column into one of the string enums.
fn decode<T: TryFrom<String, Error = String>>(row: &PgRow, column: &str) -> Result<T, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    T::try_from(raw).map_err(|e| sqlx::Error::Decode(e.into()))
}
