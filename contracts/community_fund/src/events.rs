use soroban_sdk::{Address, Env, Symbol};

/// Emitted once when the fund is initialized.
///
/// # Topics
/// * `Symbol` - "fund_initialized"
///
/// # Data
/// * `Address` - The owner
pub fn emit_initialized(e: &Env, owner: &Address) {
    e.events()
        .publish((Symbol::new(e, "fund_initialized"),), owner.clone());
}

/// Emitted when the owner issues voting credits.
///
/// # Topics
/// * `Symbol` - "credits_issued"
/// * `Address` - The credited account
///
/// # Data
/// * `i128` - Amount issued
/// * `i128` - New balance
pub fn emit_credits_issued(e: &Env, account: &Address, amount: i128, balance: i128) {
    let topics = (Symbol::new(e, "credits_issued"), account.clone());
    e.events().publish(topics, (amount, balance));
}

/// Emitted when a proposal is created.
///
/// # Topics
/// * `Symbol` - "proposal_created"
/// * `u64` - Proposal id
///
/// # Data
/// * `Address` - Proposer
/// * `i128` - Requested amount
pub fn emit_proposal_created(e: &Env, proposal_id: u64, proposer: &Address, amount: i128) {
    let topics = (Symbol::new(e, "proposal_created"), proposal_id);
    e.events().publish(topics, (proposer.clone(), amount));
}

/// Emitted when a vote is cast.
///
/// # Topics
/// * `Symbol` - "vote_cast"
/// * `u64` - Proposal id
///
/// # Data
/// * `Address` - Voter
/// * `i128` - Credits committed
/// * `i128` - New vote tally
pub fn emit_vote_cast(e: &Env, proposal_id: u64, voter: &Address, amount: i128, tally: i128) {
    let topics = (Symbol::new(e, "vote_cast"), proposal_id);
    e.events().publish(topics, (voter.clone(), amount, tally));
}

/// Emitted when a proposal is finalized.
///
/// # Topics
/// * `Symbol` - "proposal_finalized"
/// * `u64` - Proposal id
///
/// # Data
/// * `bool` - Whether the proposal was approved
/// * `i128` - Final vote tally
/// * `i128` - Pool total after finalization
pub fn emit_proposal_finalized(
    e: &Env,
    proposal_id: u64,
    approved: bool,
    tally: i128,
    total_funds: i128,
) {
    let topics = (Symbol::new(e, "proposal_finalized"), proposal_id);
    e.events().publish(topics, (approved, tally, total_funds));
}

/// Emitted when the owner withdraws from the pool.
///
/// # Topics
/// * `Symbol` - "funds_withdrawn"
///
/// # Data
/// * `i128` - Amount withdrawn
/// * `i128` - Pool total remaining
pub fn emit_funds_withdrawn(e: &Env, amount: i128, remaining: i128) {
    e.events()
        .publish((Symbol::new(e, "funds_withdrawn"),), (amount, remaining));
}
