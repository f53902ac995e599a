//! # FundingMe Contract
//!
//! This is the root crate of the **FundingMe** crowdfunding escrow. It
//! exposes the single Soroban contract `FundingMe` whose entry points
//! cover the full campaign lifecycle:
//!
//! | Phase        | Entry Point(s)                               |
//! |--------------|----------------------------------------------|
//! | Bootstrap    | [`FundingMe::init`]                          |
//! | Creation     | [`FundingMe::create_project`]                |
//! | Funding      | [`FundingMe::contribute`]                    |
//! | Finalization | [`FundingMe::close_project`]                 |
//! | Withdrawal   | [`FundingMe::withdraw`]                      |
//! | Queries      | `get_project`, `get_funding_percentage`      |
//!
//! ## Architecture
//!
//! Storage access is fully delegated to [`storage`], event payloads to
//! [`events`]. The entry points in this file hold the business rules: the
//! forward-only status machine, cumulative contributor accounting, and the
//! owner gates on finalization and withdrawal.
//!
//! Every entry point is a single host transaction. Returning an [`Error`]
//! fails the invocation and rolls back all storage writes and token
//! transfers made so far, so a failed operation leaves no partial state
//! behind.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, token, Address, Env, String};

mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_contributors;
#[cfg(test)]
mod test_events;

pub use events::{ContributionReceived, FundsWithdrawn, ProjectClosed, ProjectCreated};
pub use types::{Contribution, Project, ProjectStatus};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Operation referenced a project address with no account behind it.
    ProjectNotFound = 1,
    /// `init` called twice, or `create_project` for an owner that already
    /// has a live project.
    AlreadyInitialized = 2,
    /// `close_project` / `withdraw` attempted by a non-owner identity.
    UserNotAuthorized = 3,
    /// `close_project` attempted while status is not `TargetReached`.
    ProjectCloseNotAvailable = 4,
    /// `withdraw` attempted while status is not `Success`.
    ProjectWithdrawNotAvailable = 5,
    /// Contribution would overflow the project balance.
    ArithmeticOverflow = 6,
    /// `create_project` called with a zero funding target.
    InvalidFinancialTarget = 7,
    /// `contribute` called with a zero amount.
    InvalidContributionAmount = 8,
    /// Contract used before `init` configured the escrow token.
    NotInitialized = 9,
}

#[contract]
pub struct FundingMe;

#[contractimpl]
impl FundingMe {
    // ─────────────────────────────────────────────────────────
    // Bootstrap
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract with the token all projects escrow in.
    ///
    /// Must be called exactly once after deployment. Subsequent calls
    /// fail with `Error::AlreadyInitialized`.
    pub fn init(env: Env, token: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        storage::set_escrow_token(&env, &token);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Creation
    // ─────────────────────────────────────────────────────────

    /// Create a new project account owned by `owner`.
    ///
    /// The account lives under the owner-keyed storage entry, so each
    /// identity can run at most one project at a time; a second creation
    /// while the first is live fails with `Error::AlreadyInitialized`.
    ///
    /// Returns the project's address, which under owner-keyed storage is
    /// the owner identity itself.
    pub fn create_project(
        env: Env,
        owner: Address,
        name: String,
        financial_target: u64,
    ) -> Result<Address, Error> {
        owner.require_auth();

        if financial_target == 0 {
            return Err(Error::InvalidFinancialTarget);
        }
        if storage::has_project(&env, &owner) {
            return Err(Error::AlreadyInitialized);
        }

        let project = Project {
            owner: owner.clone(),
            name: name.clone(),
            financial_target,
            balance: 0,
            status: ProjectStatus::Active,
            contributors: soroban_sdk::Vec::new(&env),
        };
        storage::save_project(&env, &project);

        events::publish_created(
            &env,
            &owner,
            ProjectCreated {
                owner: owner.clone(),
                name,
                financial_target,
            },
        );

        Ok(owner)
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Contribute `amount` of the escrow token to `project`.
    ///
    /// Atomically: transfers the funds into the contract, adds `amount`
    /// to the project balance (rejecting on overflow), folds the amount
    /// into the contributor's running total (appending a new entry on
    /// first contribution), and advances `Active → TargetReached` once
    /// the balance meets the target.
    ///
    /// Contributions stay open after `TargetReached` and even after
    /// `Success`: overfunding is allowed with no cap, and anything
    /// escrowed before the withdrawal is included in it. The status
    /// never moves backward.
    pub fn contribute(
        env: Env,
        contributor: Address,
        project: Address,
        amount: u64,
    ) -> Result<(), Error> {
        contributor.require_auth();

        if amount == 0 {
            return Err(Error::InvalidContributionAmount);
        }

        let mut record = storage::load_project(&env, &project).ok_or(Error::ProjectNotFound)?;

        // Escrow the funds before touching the accounting; an error below
        // rolls the transfer back together with the storage writes.
        let token_addr = storage::escrow_token(&env).ok_or(Error::NotInitialized)?;
        let token_client = token::Client::new(&env, &token_addr);
        token_client.transfer(
            &contributor,
            &env.current_contract_address(),
            &i128::from(amount),
        );

        record.balance = record
            .balance
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        // Fold into the existing entry, or append in first-contribution
        // order. Running totals cannot overflow if `balance` did not.
        let mut existing: Option<u32> = None;
        for i in 0..record.contributors.len() {
            if record.contributors.get_unchecked(i).contributor == contributor {
                existing = Some(i);
                break;
            }
        }
        match existing {
            Some(i) => {
                let entry = record.contributors.get_unchecked(i);
                record.contributors.set(
                    i,
                    Contribution {
                        contributor: contributor.clone(),
                        amount: entry.amount + amount,
                    },
                );
            }
            None => record.contributors.push_back(Contribution {
                contributor: contributor.clone(),
                amount,
            }),
        }

        if record.status == ProjectStatus::Active && record.balance >= record.financial_target {
            record.status = ProjectStatus::TargetReached;
        }

        storage::save_project(&env, &record);

        events::publish_funded(
            &env,
            &project,
            ContributionReceived {
                contributor,
                amount,
                balance: record.balance,
                status: record.status,
            },
        );
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Finalization
    // ─────────────────────────────────────────────────────────

    /// Confirm a fully-funded project, unlocking withdrawal.
    ///
    /// Separates "goal met" (an automatic fact any donor can trigger)
    /// from "ready to disburse" (an owner decision). Moves no funds.
    ///
    /// - `requester` must be the project owner, else
    ///   `Error::UserNotAuthorized`.
    /// - Status must be `TargetReached`, else
    ///   `Error::ProjectCloseNotAvailable`; closing from `Active` or
    ///   repeating a close from `Success` both fail this way.
    pub fn close_project(env: Env, requester: Address, project: Address) -> Result<(), Error> {
        requester.require_auth();

        let mut record = storage::load_project(&env, &project).ok_or(Error::ProjectNotFound)?;

        if requester != record.owner {
            return Err(Error::UserNotAuthorized);
        }
        if record.status != ProjectStatus::TargetReached {
            return Err(Error::ProjectCloseNotAvailable);
        }

        record.status = ProjectStatus::Success;
        storage::save_project(&env, &record);

        events::publish_closed(
            &env,
            &project,
            ProjectClosed {
                owner: record.owner,
            },
        );
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Withdrawal
    // ─────────────────────────────────────────────────────────

    /// Pay out the full escrowed balance to the owner and destroy the
    /// project account.
    ///
    /// - `requester` must be the project owner, else
    ///   `Error::UserNotAuthorized`.
    /// - Status must be `Success`, else
    ///   `Error::ProjectWithdrawNotAvailable` (applies equally from
    ///   `Active` and `TargetReached`).
    ///
    /// Afterwards the account no longer exists: reads fail with
    /// `Error::ProjectNotFound` and the owner key is free for a future
    /// `create_project`.
    pub fn withdraw(env: Env, requester: Address, project: Address) -> Result<(), Error> {
        requester.require_auth();

        let record = storage::load_project(&env, &project).ok_or(Error::ProjectNotFound)?;

        if requester != record.owner {
            return Err(Error::UserNotAuthorized);
        }
        if record.status != ProjectStatus::Success {
            return Err(Error::ProjectWithdrawNotAvailable);
        }

        let token_addr = storage::escrow_token(&env).ok_or(Error::NotInitialized)?;
        let token_client = token::Client::new(&env, &token_addr);
        token_client.transfer(
            &env.current_contract_address(),
            &record.owner,
            &i128::from(record.balance),
        );

        storage::remove_project(&env, &project);

        events::publish_withdrawn(
            &env,
            &project,
            FundsWithdrawn {
                owner: record.owner,
                amount: record.balance,
            },
        );
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Retrieve the project account at `project`.
    pub fn get_project(env: Env, project: Address) -> Result<Project, Error> {
        storage::load_project(&env, &project).ok_or(Error::ProjectNotFound)
    }

    /// Integer funding progress: `balance * 100 / financial_target`.
    ///
    /// Can exceed 100 for overfunded projects; saturates at `u64::MAX`
    /// rather than truncating for pathological balance/target ratios.
    pub fn get_funding_percentage(env: Env, project: Address) -> Result<u64, Error> {
        let record = storage::load_project(&env, &project).ok_or(Error::ProjectNotFound)?;
        // Widened intermediate so balance * 100 cannot overflow.
        let percent = u128::from(record.balance) * 100 / u128::from(record.financial_target);
        Ok(u64::try_from(percent).unwrap_or(u64::MAX))
    }
}
