//! SQLite persistence for indexed events and the poll cursor.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::errors::Result;
use crate::events::{EventRecord, FundingEvent};

/// Where the poller left off: the last ledger it has fully consumed and,
/// when a page was cut short, the RPC's opaque pagination token.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    pub last_ledger: i64,
    pub last_cursor: Option<String>,
}

/// Open (creating if missing) the SQLite database and apply migrations.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("database ready, migrations applied");
    Ok(pool)
}

// ─────────────────────────────────────────────────────────
// Cursor
// ─────────────────────────────────────────────────────────

/// Load the persisted cursor; a missing row reads as "start from zero".
pub async fn load_cursor(pool: &SqlitePool) -> Result<Cursor> {
    let row: Option<(i64, Option<String>)> =
        sqlx::query_as("SELECT last_ledger, last_cursor FROM indexer_cursor WHERE id = 1")
            .fetch_optional(pool)
            .await?;
    let (last_ledger, last_cursor) = row.unwrap_or((0, None));
    Ok(Cursor {
        last_ledger,
        last_cursor,
    })
}

/// Persist the cursor so a restart resumes exactly where this poll stopped.
pub async fn save_cursor(pool: &SqlitePool, cursor: &Cursor) -> Result<()> {
    sqlx::query("UPDATE indexer_cursor SET last_ledger = ?1, last_cursor = ?2 WHERE id = 1")
        .bind(cursor.last_ledger)
        .bind(&cursor.last_cursor)
        .execute(pool)
        .await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────

/// Store a batch of decoded events, returning how many were new.
///
/// The `events` table carries a uniqueness constraint over
/// `(ledger, tx_hash, event_type, project, actor)`, so replaying an
/// already-indexed ledger range is harmless.
pub async fn store_events(pool: &SqlitePool, events: &[FundingEvent]) -> Result<usize> {
    let mut stored = 0usize;
    for ev in events {
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO events
                (event_type, project, actor, amount, ledger, timestamp, contract_id, tx_hash)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&ev.event_type)
        .bind(&ev.project)
        .bind(&ev.actor)
        .bind(&ev.amount)
        .bind(ev.ledger)
        .bind(ev.timestamp)
        .bind(&ev.contract_id)
        .bind(&ev.tx_hash)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            stored += 1;
        }
    }
    Ok(stored)
}

/// All events for one project (owner address), oldest first.
pub async fn events_for_project(pool: &SqlitePool, project: &str) -> Result<Vec<EventRecord>> {
    let rows = sqlx::query_as::<_, EventRecord>(
        r#"
        SELECT id, event_type, project, actor, amount, ledger, timestamp,
               contract_id, tx_hash, created_at
        FROM   events
        WHERE  project = ?1
        ORDER  BY ledger ASC, id ASC
        "#,
    )
    .bind(project)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Every indexed event across all projects, oldest first.
pub async fn all_events(pool: &SqlitePool) -> Result<Vec<EventRecord>> {
    let rows = sqlx::query_as::<_, EventRecord>(
        r#"
        SELECT id, event_type, project, actor, amount, ledger, timestamp,
               contract_id, tx_hash, created_at
        FROM   events
        ORDER  BY ledger ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
