//! Shared test helpers for construction_escrow tests.

#![cfg(test)]

use crate::{ConstructionEscrow, ConstructionEscrowClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env, String, Vec};

pub const TOTAL_BUDGET: i128 = 1_000_000;

/// Milestone plan used by most scenarios: sums exactly to `TOTAL_BUDGET`.
pub fn default_milestones(e: &Env) -> Vec<i128> {
    vec![e, 250_000_i128, 500_000_i128, 250_000_i128]
}

/// Deploys and initializes the escrow.
/// Returns `(client, owner, contractor)`.
pub fn setup(e: &Env) -> (ConstructionEscrowClient<'_>, Address, Address) {
    e.mock_all_auths();

    let contract_id = e.register(ConstructionEscrow, ());
    let client = ConstructionEscrowClient::new(e, &contract_id);
    let owner = Address::generate(e);
    let contractor = Address::generate(e);

    client.initialize(&owner);
    (client, owner, contractor)
}

pub fn create_project_with(
    e: &Env,
    client: &ConstructionEscrowClient,
    owner: &Address,
    contractor: &Address,
    total_budget: i128,
    milestones: &Vec<i128>,
) -> u64 {
    client.create_project(
        owner,
        &String::from_str(e, "Community Center"),
        &String::from_str(e, "Build a new community center"),
        contractor,
        &total_budget,
        milestones,
    )
}

/// Creates the default 1,000,000 project and returns its id.
pub fn create_default_project(
    e: &Env,
    client: &ConstructionEscrowClient,
    owner: &Address,
    contractor: &Address,
) -> u64 {
    create_project_with(e, client, owner, contractor, TOTAL_BUDGET, &default_milestones(e))
}

/// Completes and approves milestone `index`.
pub fn sign_off(
    client: &ConstructionEscrowClient,
    owner: &Address,
    contractor: &Address,
    project_id: u64,
    index: u32,
) {
    client.complete_milestone(contractor, &project_id, &index);
    client.approve_milestone(owner, &project_id, &index);
}
