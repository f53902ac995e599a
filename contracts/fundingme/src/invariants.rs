#![allow(dead_code)]

extern crate std;

use crate::types::{Project, ProjectStatus};

/// INV-1: Project balance equals the sum of all contributor running totals.
pub fn assert_balance_matches_contributors(project: &Project) {
    let sum: u128 = project
        .contributors
        .iter()
        .map(|c| u128::from(c.amount))
        .sum();
    assert_eq!(
        u128::from(project.balance),
        sum,
        "INV-1 violated: balance {} != contributor sum {}",
        project.balance,
        sum
    );
}

/// INV-2: Project financial target must always be positive.
pub fn assert_target_positive(project: &Project) {
    assert!(
        project.financial_target > 0,
        "INV-2 violated: project has zero financial target"
    );
}

/// INV-3: Status agrees with the balance/target relation.
/// `Active` iff the balance has never reached the target; once it has,
/// the status is `TargetReached` or `Success`.
pub fn assert_status_matches_balance(project: &Project) {
    if project.balance >= project.financial_target {
        assert_ne!(
            project.status,
            ProjectStatus::Active,
            "INV-3 violated: balance {} >= target {} but status is Active",
            project.balance,
            project.financial_target
        );
    } else {
        // A balance below target with non-Active status can only happen if
        // the balance regressed, which contribute never does.
        assert_eq!(
            project.status,
            ProjectStatus::Active,
            "INV-3 violated: balance {} < target {} but status is {:?}",
            project.balance,
            project.financial_target,
            project.status
        );
    }
}

/// INV-4: Status transition validity. Only forward transitions are allowed:
///   Active        -> TargetReached
///   TargetReached -> Success
///   Success       -> (account removal only)
pub fn assert_valid_status_transition(from: &ProjectStatus, to: &ProjectStatus) {
    let valid = from == to
        || matches!(
            (from, to),
            (ProjectStatus::Active, ProjectStatus::TargetReached)
                | (ProjectStatus::TargetReached, ProjectStatus::Success)
        );
    assert!(
        valid,
        "INV-4 violated: invalid status transition from {:?} to {:?}",
        from, to
    );
}

/// INV-5: Contribution invariant — after a contribution of `amount`, the
/// project balance increases by exactly `amount`.
pub fn assert_contribution_invariant(balance_before: u64, balance_after: u64, amount: u64) {
    assert_eq!(
        balance_after,
        balance_before + amount,
        "INV-5 violated: {} + {} != {}",
        balance_before,
        amount,
        balance_after
    );
}

/// INV-6: Fields immutable after creation (owner, name, financial_target)
/// remain unchanged.
pub fn assert_immutable_fields(original: &Project, current: &Project) {
    assert_eq!(
        original.owner, current.owner,
        "INV-6 violated: project owner changed"
    );
    assert_eq!(
        original.name, current.name,
        "INV-6 violated: project name changed"
    );
    assert_eq!(
        original.financial_target, current.financial_target,
        "INV-6 violated: project financial_target changed"
    );
}

/// INV-7: Each contributing identity appears at most once in the list.
pub fn assert_contributors_unique(project: &Project) {
    let mut seen = std::vec::Vec::new();
    for entry in project.contributors.iter() {
        assert!(
            !seen.contains(&entry.contributor),
            "INV-7 violated: duplicate contributor entry"
        );
        seen.push(entry.contributor.clone());
    }
}

/// Run all stateless project invariants.
pub fn assert_all_project_invariants(project: &Project) {
    assert_balance_matches_contributors(project);
    assert_target_positive(project);
    assert_status_matches_balance(project);
    assert_contributors_unique(project);
}
