//! # Events
//!
//! Payload structs and publish helpers for every state mutation the
//! contract performs. Each event's topic list is
//! `(<short symbol>, project_address)`, so off-chain consumers can filter
//! by project without decoding the payload.
//!
//! | Topic       | Payload                  | Emitted by        |
//! |-------------|--------------------------|-------------------|
//! | `created`   | [`ProjectCreated`]       | `create_project`  |
//! | `funded`    | [`ContributionReceived`] | `contribute`      |
//! | `closed`    | [`ProjectClosed`]        | `close_project`   |
//! | `withdrawn` | [`FundsWithdrawn`]       | `withdraw`        |

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

use crate::types::ProjectStatus;

/// A new project account was created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectCreated {
    pub owner: Address,
    pub name: String,
    pub financial_target: u64,
}

/// A contribution was escrowed into a project.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionReceived {
    pub contributor: Address,
    pub amount: u64,
    /// Project balance after this contribution was applied.
    pub balance: u64,
    /// Project status after this contribution was applied.
    pub status: ProjectStatus,
}

/// The owner confirmed a fully-funded project.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectClosed {
    pub owner: Address,
}

/// Escrowed funds were paid out and the project account removed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub owner: Address,
    pub amount: u64,
}

pub fn publish_created(env: &Env, project: &Address, data: ProjectCreated) {
    env.events()
        .publish((symbol_short!("created"), project.clone()), data);
}

pub fn publish_funded(env: &Env, project: &Address, data: ContributionReceived) {
    env.events()
        .publish((symbol_short!("funded"), project.clone()), data);
}

pub fn publish_closed(env: &Env, project: &Address, data: ProjectClosed) {
    env.events()
        .publish((symbol_short!("closed"), project.clone()), data);
}

pub fn publish_withdrawn(env: &Env, project: &Address, data: FundsWithdrawn) {
    env.events()
        .publish((symbol_short!("withdrawn"), project.clone()), data);
}
