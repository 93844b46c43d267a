//! Postgres persistence for a league store.
//!
//! The simulation runs against a [`MemoryStore`](crate::store::MemoryStore);
//! these functions move whole snapshots in and out of Postgres.

mod fetch;
mod load;

pub use fetch::fetch_store;
pub use load::load_store;

use sqlx::PgPool;

/// Create every league table and index (idempotent).
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(include_str!("../../sql/schema.sql"))
        .execute(pool)
        .await?;
    Ok(())
}
