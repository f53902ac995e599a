//! Runtime configuration, sourced from the environment.

use std::str::FromStr;

use crate::errors::{IndexerError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Soroban RPC endpoint (e.g. https://soroban-testnet.stellar.org)
    pub rpc_url: String,
    /// The FundingMe contract address (Strkey format)
    pub contract_id: String,
    /// SQLite database URL or file path
    pub database_url: String,
    /// Port for the REST API server
    pub api_port: u16,
    /// How often (in seconds) to poll the RPC for new events
    pub poll_interval_secs: u64,
    /// Maximum number of events to fetch per RPC request
    pub events_per_page: u32,
    /// Ledger to start from if no cursor is saved
    pub start_ledger: u32,
}

impl Config {
    /// Read every setting from the environment. Only `CONTRACT_ID` is
    /// mandatory; the rest fall back to testnet-friendly defaults.
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            rpc_url: optional("RPC_URL", "https://soroban-testnet.stellar.org"),
            contract_id: required("CONTRACT_ID")?,
            database_url: optional("DATABASE_URL", "sqlite:./fundingme_events.db"),
            api_port: parsed("API_PORT", 3001)?,
            poll_interval_secs: parsed("POLL_INTERVAL_SECS", 5)?,
            events_per_page: parsed("EVENTS_PER_PAGE", 100)?,
            start_ledger: parsed("START_LEDGER", 0)?,
        })
    }
}

fn required(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| IndexerError::Config(format!("{key} must be set")))
}

fn optional(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parsed<T: FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .parse()
            .map_err(|_| IndexerError::Config(format!("{key} has an invalid value: {raw}"))),
    }
}
