extern crate std;

use soroban_sdk::{testutils::Address as _, token, Address, Env, String};

use crate::{FundingMe, FundingMeClient};

fn setup() -> (Env, FundingMeClient<'static>, token::StellarAssetClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(FundingMe, ());
    let client = FundingMeClient::new(&env, &contract_id);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token_sac = token::StellarAssetClient::new(&env, &token_contract.address());
    client.init(&token_contract.address());

    (env, client, token_sac)
}

fn new_project(env: &Env, client: &FundingMeClient, target: u64) -> Address {
    let owner = Address::generate(env);
    client.create_project(&owner, &String::from_str(env, "Community garden"), &target)
}

fn contribute(
    client: &FundingMeClient,
    token_sac: &token::StellarAssetClient,
    donor: &Address,
    project: &Address,
    amount: u64,
) {
    token_sac.mint(donor, &i128::from(amount));
    client.contribute(donor, project, &amount);
}

#[test]
fn contributor_list_starts_empty() {
    let (env, client, _) = setup();
    let project = new_project(&env, &client, 10_000);

    assert_eq!(client.get_project(&project).contributors.len(), 0);
}

#[test]
fn first_contribution_appends_entry() {
    let (env, client, sac) = setup();
    let project = new_project(&env, &client, 10_000);
    let donor = Address::generate(&env);

    contribute(&client, &sac, &donor, &project, 500);

    let record = client.get_project(&project);
    assert_eq!(record.contributors.len(), 1);
    let entry = record.contributors.get_unchecked(0);
    assert_eq!(entry.contributor, donor);
    assert_eq!(entry.amount, 500);
}

#[test]
fn repeat_donor_keeps_single_entry() {
    let (env, client, sac) = setup();
    let project = new_project(&env, &client, 10_000);
    let donor = Address::generate(&env);

    contribute(&client, &sac, &donor, &project, 500);
    contribute(&client, &sac, &donor, &project, 300);

    let record = client.get_project(&project);
    assert_eq!(record.contributors.len(), 1);
    assert_eq!(record.contributors.get_unchecked(0).amount, 800);
}

#[test]
fn entries_preserve_first_contribution_order() {
    let (env, client, sac) = setup();
    let project = new_project(&env, &client, 100_000);
    let donor1 = Address::generate(&env);
    let donor2 = Address::generate(&env);
    let donor3 = Address::generate(&env);

    contribute(&client, &sac, &donor1, &project, 100);
    contribute(&client, &sac, &donor2, &project, 200);
    contribute(&client, &sac, &donor3, &project, 300);

    // A repeat from donor1 must not move it to the back.
    contribute(&client, &sac, &donor1, &project, 150);

    let record = client.get_project(&project);
    assert_eq!(record.contributors.len(), 3);
    assert_eq!(record.contributors.get_unchecked(0).contributor, donor1);
    assert_eq!(record.contributors.get_unchecked(0).amount, 250);
    assert_eq!(record.contributors.get_unchecked(1).contributor, donor2);
    assert_eq!(record.contributors.get_unchecked(2).contributor, donor3);
}

#[test]
fn interleaved_donors_aggregate_independently() {
    let (env, client, sac) = setup();
    let project = new_project(&env, &client, 100_000);
    let donor1 = Address::generate(&env);
    let donor2 = Address::generate(&env);

    contribute(&client, &sac, &donor1, &project, 1_000);
    contribute(&client, &sac, &donor2, &project, 2_000);
    contribute(&client, &sac, &donor1, &project, 3_000);
    contribute(&client, &sac, &donor2, &project, 4_000);
    contribute(&client, &sac, &donor1, &project, 5_000);

    let record = client.get_project(&project);
    assert_eq!(record.contributors.len(), 2);
    assert_eq!(record.contributors.get_unchecked(0).amount, 9_000);
    assert_eq!(record.contributors.get_unchecked(1).amount, 6_000);
    assert_eq!(record.balance, 15_000);
}

#[test]
fn contributor_totals_survive_status_transitions() {
    let (env, client, sac) = setup();
    let project = new_project(&env, &client, 1_000);
    let donor = Address::generate(&env);

    contribute(&client, &sac, &donor, &project, 900);
    contribute(&client, &sac, &donor, &project, 200); // crosses the target

    let record = client.get_project(&project);
    assert_eq!(record.contributors.len(), 1);
    assert_eq!(record.contributors.get_unchecked(0).amount, 1_100);
    assert_eq!(record.balance, 1_100);
}
