use std::fmt::Display;

use sqlx::PgPool;

use crate::store::MemoryStore;

/// Load an entire store snapshot into Postgres using COPY FROM STDIN (text format).
///
/// Order respects FK constraints: competitors → titles → events → matches →
/// match_participants → reigns.
pub async fn load_store(pool: &PgPool, store: &MemoryStore) -> Result<(), sqlx::Error> {
    // Competitors
    {
        let mut buf = String::new();
        for c in store.competitors.values() {
            let a = &c.attributes;
            let p = &c.popularity;
            buf.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                c.id,
                escape(&c.name),
                c.promotion_id,
                a.skill,
                a.entertainment,
                a.star_power,
                a.intimidation,
                a.psychology,
                a.stamina,
                p.north_america,
                p.south_america,
                p.asia,
                p.oceania,
                p.africa,
                p.europe,
                c.record.matches,
                c.record.wins,
                c.record.losses,
            ));
        }
        copy_in(pool, include_str!("../../sql/copy_competitors.sql"), &buf).await?;
    }

    // Titles (after competitors: current_champion_id FK)
    {
        let mut buf = String::new();
        for t in store.titles.values() {
            buf.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\n",
                t.id,
                escape(&t.name),
                t.promotion_id,
                t.prestige,
                opt(t.current_champion),
                t.defenses,
            ));
        }
        copy_in(pool, include_str!("../../sql/copy_titles.sql"), &buf).await?;
    }

    // Events
    {
        let mut buf = String::new();
        for e in store.events.values() {
            buf.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\n",
                e.id,
                e.promotion_id,
                escape(&e.name),
                escape(&e.venue),
                e.date.as_u32(),
                opt(e.average_rating),
            ));
        }
        copy_in(pool, include_str!("../../sql/copy_events.sql"), &buf).await?;
    }

    // Matches, then their participants
    {
        let mut matches = String::new();
        let mut participants = String::new();
        for m in store.matches.values() {
            matches.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                m.id,
                m.event_id,
                m.winner_id,
                escape(m.match_type.as_str()),
                opt(m.title_id),
                m.quality,
                m.segment_rating,
                m.crowd_reaction.as_str(),
                m.finish.as_str(),
                escape(&m.description),
                m.created_at.as_u32(),
            ));
            for (slot, competitor_id) in m.participants.iter().enumerate() {
                participants.push_str(&format!("{}\t{}\t{}\n", m.id, competitor_id, slot));
            }
        }
        copy_in(pool, include_str!("../../sql/copy_matches.sql"), &matches).await?;
        copy_in(
            pool,
            include_str!("../../sql/copy_match_participants.sql"),
            &participants,
        )
        .await?;
    }

    // Reigns
    {
        let mut buf = String::new();
        for r in store.reigns.values() {
            buf.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\n",
                r.id,
                r.title_id,
                r.champion_id,
                r.start.as_u32(),
                opt(r.end.map(|ts| ts.as_u32())),
                r.defenses,
            ));
        }
        copy_in(pool, include_str!("../../sql/copy_reigns.sql"), &buf).await?;
    }

    Ok(())
}

/// Execute a COPY FROM STDIN with the given text-format payload.
async fn copy_in(pool: &PgPool, statement: &str, data: &str) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let mut copy = conn.copy_in_raw(statement).await?;
    copy.send(data.as_bytes()).await?;
    copy.finish().await?;
    Ok(())
}

/// Escape a string for Postgres COPY text format.
/// Backslash must be escaped first, then the special whitespace characters.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Render an optional value as a COPY text value (`\N` for NULL).
fn opt<T: Display>(v: Option<T>) -> String {
    match v {
        Some(x) => x.to_string(),
        None => "\\N".to_string(),
    }
}
