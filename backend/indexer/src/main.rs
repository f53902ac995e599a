//! FundingMe event indexer binary.
//!
//! Runs two halves off one SQLite database: a background task polling
//! Soroban `getEvents` for the FundingMe contract, and an Axum REST API
//! serving what has been indexed so far.

mod api;
mod config;
mod db;
mod errors;
mod events;
mod indexer;
mod rpc;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use indexer::IndexerState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A local .env is optional; real deployments set the environment.
    let _ = dotenvy::dotenv();

    // RUST_LOG controls verbosity; default to info when unset.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let pool = db::init_pool(&config.database_url).await?;

    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let api_port = config.api_port;
    tokio::spawn(indexer::run(Arc::new(IndexerState {
        pool: pool.clone(),
        config,
        client,
    })));

    let app = api::router(Arc::new(api::ApiState { pool }));
    let addr = format!("0.0.0.0:{api_port}");
    info!("serving API on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
