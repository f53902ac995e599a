//! Canonical event types emitted by the FundingMe contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/fundingme/src/events.rs`. The second topic element of every
//! contract event is the project address (the owner identity), stored here
//! as the `project` column.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the FundingMe contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A project account was created (`created` topic).
    ProjectCreated,
    /// A contribution was escrowed (`funded` topic).
    Contribution,
    /// The owner confirmed a fully-funded project (`closed` topic).
    ProjectClosed,
    /// Escrow was paid out and the account removed (`withdrawn` topic).
    FundsWithdrawn,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::ProjectCreated,
            "funded" => Self::Contribution,
            "closed" => Self::ProjectClosed,
            "withdrawn" => Self::FundsWithdrawn,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectCreated => "project_created",
            Self::Contribution => "contribution",
            Self::ProjectClosed => "project_closed",
            Self::FundsWithdrawn => "funds_withdrawn",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded FundingMe event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingEvent {
    pub event_type: String,
    /// Project address (owner identity) in Strkey form.
    pub project: Option<String>,
    /// The acting identity: owner for created/closed/withdrawn,
    /// contributor for contributions.
    pub actor: Option<String>,
    /// Amount for contributions and withdrawals; the funding target for
    /// creations. Kept as a string to avoid i128 truncation.
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub project: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
