//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers used by FundingMe:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key           | Type      | Description                       |
//! |---------------|-----------|-----------------------------------|
//! | `EscrowToken` | `Address` | Token all projects escrow in      |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day
//! remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                | Type      | Description                      |
//! |--------------------|-----------|----------------------------------|
//! | `Project(owner)`   | `Project` | The owner's single project       |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.
//!
//! ## Owner-keyed addressing
//!
//! `DataKey::Project(owner)` is the project's deterministic address: a
//! fixed namespace tag (the variant) plus the owner identity. The ledger
//! guarantees at most one entry per key, which is exactly the
//! one-project-per-owner rule; `create_project` refuses to overwrite an
//! occupied key, and withdrawal removes the entry so the key can be
//! reused by a later creation.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::Project;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Token every project escrows funds in (Instance).
    EscrowToken,
    /// A project account keyed by its owner identity (Persistent).
    Project(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Store the escrow token address. Called once at initialization.
pub fn set_escrow_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::EscrowToken, token);
    bump_instance(env);
}

/// Retrieve the escrow token address, or `None` before `init`.
pub fn escrow_token(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::EscrowToken)
}

/// Whether the contract has been initialized with an escrow token.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::EscrowToken)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Whether a project account currently exists for `owner`.
pub fn has_project(env: &Env, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Project(owner.clone()))
}

/// Write a project account under its owner's key.
pub fn save_project(env: &Env, project: &Project) {
    let key = DataKey::Project(project.owner.clone());
    env.storage().persistent().set(&key, project);
    bump_persistent(env, &key);
}

/// Load the project account owned by `owner`, or `None` if it does not
/// exist (never created, or already withdrawn).
pub fn load_project(env: &Env, owner: &Address) -> Option<Project> {
    let key = DataKey::Project(owner.clone());
    let project: Option<Project> = env.storage().persistent().get(&key);
    if project.is_some() {
        bump_persistent(env, &key);
    }
    project
}

/// Delete the project account owned by `owner`. The key becomes
/// unoccupied and a future `create_project` may reuse it.
pub fn remove_project(env: &Env, owner: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Project(owner.clone()));
}
