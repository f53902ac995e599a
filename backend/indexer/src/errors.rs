//! Error type shared across the indexer's subsystems.

use thiserror::Error;

/// Anything that can go wrong while polling, decoding, storing, or
/// serving FundingMe events.
#[derive(Debug, Error)]
pub enum IndexerError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),

    #[error("migration: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("rpc transport: {0}")]
    Rpc(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("config: {0}")]
    Config(String),

    #[error("bad event: {0}")]
    BadEvent(String),
}

pub type Result<T> = std::result::Result<T, IndexerError>;
