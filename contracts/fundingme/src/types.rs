//! # Types
//!
//! Shared data structures of the FundingMe contract.
//!
//! ## Status as a Finite-State Machine
//!
//! [`ProjectStatus`] enforces a strict forward-only lifecycle:
//!
//! ```text
//! Active ──► TargetReached ──► Success ──► [withdrawn, entry removed]
//! ```
//!
//! The `Active → TargetReached` edge fires automatically inside
//! `contribute` once `balance >= financial_target`; the
//! `TargetReached → Success` edge requires an explicit owner-authorized
//! `close_project`. Backward transitions never occur: status writes always
//! move to a strictly larger discriminant.
//!
//! ## Contributor accounting
//!
//! `Project::contributors` holds one [`Contribution`] per unique donor in
//! first-contribution order. Repeat donations fold into the existing
//! entry's running total, so the list is an aggregate, not a transaction
//! log, and the sum of all entries always equals `Project::balance`.

use soroban_sdk::{contracttype, Address, String, Vec};

/// Lifecycle status of a project.
///
/// Explicit discriminants match the single-byte status tag of the
/// persisted account layout (0 = Active, 1 = TargetReached, 2 = Success).
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum ProjectStatus {
    /// Accepting contributions; funding target not yet met.
    Active = 0,
    /// Balance has reached the target at least once; awaiting owner close.
    TargetReached = 1,
    /// Owner confirmed the goal; funds are withdrawable exactly once.
    Success = 2,
}

/// Running total contributed by a single identity.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    /// The contributing identity.
    pub contributor: Address,
    /// Cumulative amount contributed so far, not a per-transaction value.
    pub amount: u64,
}

/// A crowdfunding project account.
///
/// Exactly one exists per owner identity at any time; it is located under
/// the owner-keyed storage entry and removed when the owner withdraws.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    /// Creator of the project; sole authority for close and withdrawal.
    pub owner: Address,
    /// Display label, set once at creation.
    pub name: String,
    /// Funding goal in the escrow token's base unit.
    pub financial_target: u64,
    /// Cumulative amount contributed; monotonically non-decreasing.
    pub balance: u64,
    /// Current lifecycle status.
    pub status: ProjectStatus,
    /// Per-contributor running totals in first-contribution order.
    pub contributors: Vec<Contribution>,
}
