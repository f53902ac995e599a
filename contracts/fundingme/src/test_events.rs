extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{ContributionReceived, FundsWithdrawn, ProjectClosed, ProjectCreated};
use crate::{FundingMe, FundingMeClient, ProjectStatus};

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

#[test]
fn test_project_created_event() {
    let (env, client, _) = setup();
    let owner = Address::generate(&env);
    let name = String::from_str(&env, "Open hardware lab");
    let target = 5_000u64;

    let project = client.create_project(&owner, &name, &target);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("created"), project_address)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        project.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: ProjectCreated struct
    let event_data: ProjectCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ProjectCreated {
            owner: owner.clone(),
            name,
            financial_target: target,
        }
    );
}

#[test]
fn test_contribution_received_event() {
    let (env, client, sac) = setup();
    let owner = Address::generate(&env);
    let donor = Address::generate(&env);
    let project = client.create_project(&owner, &String::from_str(&env, "Mesh relay"), &10_000u64);

    sac.mint(&donor, &1_000i128);
    client.contribute(&donor, &project, &1_000u64);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("funded"), project_address)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("funded").into_val(&env),
        project.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data carries the post-contribution balance and status.
    let event_data: ContributionReceived = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ContributionReceived {
            contributor: donor.clone(),
            amount: 1_000,
            balance: 1_000,
            status: ProjectStatus::Active,
        }
    );
}

#[test]
fn test_project_closed_event() {
    let (env, client, sac) = setup();
    let owner = Address::generate(&env);
    let donor = Address::generate(&env);
    let project = client.create_project(&owner, &String::from_str(&env, "Night shelter"), &1_000u64);

    sac.mint(&donor, &1_000i128);
    client.contribute(&donor, &project, &1_000u64);
    client.close_project(&owner, &project);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("closed").into_val(&env),
        project.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProjectClosed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, ProjectClosed { owner: owner.clone() });
}

#[test]
fn test_funds_withdrawn_event() {
    let (env, client, sac) = setup();
    let owner = Address::generate(&env);
    let donor = Address::generate(&env);
    let project = client.create_project(&owner, &String::from_str(&env, "River cleanup"), &1_000u64);

    sac.mint(&donor, &1_500i128);
    client.contribute(&donor, &project, &1_500u64);
    client.close_project(&owner, &project);
    client.withdraw(&owner, &project);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("withdrawn").into_val(&env),
        project.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundsWithdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundsWithdrawn {
            owner: owner.clone(),
            amount: 1_500,
        }
    );
}
