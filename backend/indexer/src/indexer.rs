//! Background task that keeps the local database in sync with the
//! contract's on-chain event stream.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use sqlx::SqlitePool;
use tracing::{error, info};

use crate::config::Config;
use crate::db::{self, Cursor};
use crate::errors::Result;
use crate::rpc;

/// Everything the poll loop needs, shared behind one `Arc`.
pub struct IndexerState {
    pub pool: SqlitePool,
    pub config: Config,
    pub client: Client,
}

/// Poll forever. Individual tick failures are logged and retried on the
/// next interval; only the caller shutting the task down ends the loop.
pub async fn run(state: Arc<IndexerState>) {
    info!("indexer started for contract {}", state.config.contract_id);

    let mut cursor = db::load_cursor(&state.pool).await.unwrap_or_default();
    if cursor.last_ledger == 0 {
        cursor.last_ledger = i64::from(state.config.start_ledger);
    }
    info!("resuming from ledger {}", cursor.last_ledger);

    let interval = Duration::from_secs(state.config.poll_interval_secs);
    loop {
        if let Err(e) = poll_tick(&state, &mut cursor).await {
            error!("poll failed: {e}");
        }
        tokio::time::sleep(interval).await;
    }
}

/// One fetch-decode-store round trip, advancing the cursor on success.
async fn poll_tick(state: &IndexerState, cursor: &mut Cursor) -> Result<()> {
    let (raw, next_cursor, latest_ledger) = rpc::fetch_events(
        &state.client,
        &state.config.rpc_url,
        &state.config.contract_id,
        cursor.last_ledger as u32,
        cursor.last_cursor.as_deref(),
        state.config.events_per_page,
    )
    .await?;

    if !raw.is_empty() {
        let decoded = rpc::decode_events(&raw, &state.config.contract_id);
        let stored = db::store_events(&state.pool, &decoded).await?;
        info!("{} raw events fetched, {} new records stored", raw.len(), stored);
    }

    // A pagination token means the current ledger range has more pages, so
    // the start ledger must not move; otherwise jump forward to the latest
    // ledger the RPC reported.
    if next_cursor.is_none() {
        if let Some(latest) = latest_ledger {
            cursor.last_ledger = cursor.last_ledger.max(latest as i64);
        }
    }
    cursor.last_cursor = next_cursor;

    db::save_cursor(&state.pool, cursor).await?;
    Ok(())
}
