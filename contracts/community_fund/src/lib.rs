//! Community Improvement Fund Contract
//!
//! Residents propose community projects and back them with community-token
//! credits. The owner finalizes each proposal: if the credits committed reach
//! the requested amount the proposal is approved and its tally is added to a
//! withdrawable pool; otherwise it is rejected and the pool is untouched.
//!
//! ## Key design decisions
//!
//! - **One vote per (proposal, voter)**: the vote marker is written once and
//!   never overwritten.
//! - **Credits are consumed by voting**: committed credits are not refunded,
//!   whether the proposal is approved or rejected.
//! - **Guards before writes**: every check runs before the first storage
//!   write, so a failed call leaves state untouched.
//! - **Owner-only finalize and withdraw**.

#![no_std]

mod errors;
mod events;
mod types;

pub use errors::Error;
pub use types::{DataKey, FundProposal, ProposalStatus};

use ledger_core::{math, ownership, storage};
use soroban_sdk::{contract, contractimpl, Address, Env, String};


// ─── Helpers ───────────────────────────────────────────────────────────────

fn load_proposal(e: &Env, proposal_id: u64) -> Result<FundProposal, Error> {
    storage::load(e, &DataKey::Proposal(proposal_id)).ok_or(Error::InvalidProposal)
}

fn load_active_proposal(e: &Env, proposal_id: u64) -> Result<FundProposal, Error> {
    let proposal = load_proposal(e, proposal_id)?;
    if proposal.status != ProposalStatus::Active {
        return Err(Error::InvalidProposal);
    }
    Ok(proposal)
}

fn read_balance(e: &Env, account: &Address) -> i128 {
    storage::load(e, &DataKey::Balance(account.clone())).unwrap_or(0)
}

fn read_total_funds(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalFunds)
        .unwrap_or(0)
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct CommunityFund;

#[contractimpl]
impl CommunityFund {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization. Records `owner` as the privileged identity.
    pub fn initialize(e: Env, owner: Address) -> Result<(), Error> {
        ownership::initialize_owner(&e, &owner)?;
        e.storage().instance().set(&DataKey::TotalFunds, &0_i128);
        storage::bump_instance(&e);
        events::emit_initialized(&e, &owner);
        Ok(())
    }

    /// Issue community-token credits to `account`. Owner only.
    /// Returns the account's new balance.
    pub fn issue_credits(
        e: Env,
        caller: Address,
        account: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        ownership::require_owner(&e, &caller)?;
        let balance =
            math::credit(read_balance(&e, &account), amount).ok_or(Error::InvalidAmount)?;

        storage::save(&e, &DataKey::Balance(account.clone()), &balance);
        storage::bump_instance(&e);
        events::emit_credits_issued(&e, &account, amount, balance);
        Ok(balance)
    }

    // ── Proposal lifecycle ─────────────────────────────────────────────────

    /// Create a fund proposal requesting `amount`. Any caller may propose.
    /// Returns the new proposal id (1-based, sequential).
    pub fn create_fund_proposal(
        e: Env,
        caller: Address,
        title: String,
        description: String,
        amount: i128,
    ) -> Result<u64, Error> {
        caller.require_auth();
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let proposal_id = storage::next_id(&e, &DataKey::ProposalCounter);
        let proposal = FundProposal {
            title,
            description,
            proposer: caller.clone(),
            amount,
            votes: 0,
            status: ProposalStatus::Active,
            created_at: e.ledger().timestamp(),
        };
        storage::save(&e, &DataKey::Proposal(proposal_id), &proposal);
        storage::bump_instance(&e);

        events::emit_proposal_created(&e, proposal_id, &caller, amount);
        Ok(proposal_id)
    }

    /// Commit `amount` credits from the caller to an active proposal.
    ///
    /// # Errors
    /// * `InvalidProposal` - unknown id or proposal no longer active
    /// * `InvalidAmount` - negative amount
    /// * `AlreadyVoted` - caller already voted on this proposal
    /// * `InsufficientBalance` - caller holds fewer than `amount` credits
    pub fn vote_on_fund_proposal(
        e: Env,
        caller: Address,
        proposal_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut proposal = load_active_proposal(&e, proposal_id)?;
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let vote_key = DataKey::Vote(proposal_id, caller.clone());
        if storage::exists(&e, &vote_key) {
            return Err(Error::AlreadyVoted);
        }

        let balance =
            math::debit(read_balance(&e, &caller), amount).ok_or(Error::InsufficientBalance)?;
        proposal.votes = math::credit(proposal.votes, amount).ok_or(Error::InvalidAmount)?;

        storage::save(&e, &DataKey::Balance(caller.clone()), &balance);
        storage::save(&e, &vote_key, &amount);
        storage::save(&e, &DataKey::Proposal(proposal_id), &proposal);
        storage::bump_instance(&e);

        events::emit_vote_cast(&e, proposal_id, &caller, amount, proposal.votes);
        Ok(())
    }

    /// Decide an active proposal. Owner only.
    ///
    /// Approved iff the committed credits reach the requested amount; the
    /// approved tally is added to the pool. Returns `true` when approved.
    pub fn finalize_fund_proposal(
        e: Env,
        caller: Address,
        proposal_id: u64,
    ) -> Result<bool, Error> {
        ownership::require_owner(&e, &caller)?;
        let mut proposal = load_active_proposal(&e, proposal_id)?;

        let approved = math::meets_threshold(proposal.votes, proposal.amount);
        let mut total_funds = read_total_funds(&e);
        if approved {
            total_funds = math::credit(total_funds, proposal.votes).ok_or(Error::InvalidAmount)?;
            e.storage()
                .instance()
                .set(&DataKey::TotalFunds, &total_funds);
            proposal.status = ProposalStatus::Approved;
        } else {
            proposal.status = ProposalStatus::Rejected;
        }

        storage::save(&e, &DataKey::Proposal(proposal_id), &proposal);
        storage::bump_instance(&e);

        events::emit_proposal_finalized(&e, proposal_id, approved, proposal.votes, total_funds);
        Ok(approved)
    }

    /// Withdraw `amount` from the pool. Owner only.
    /// Returns the pool total remaining.
    pub fn withdraw_funds(e: Env, caller: Address, amount: i128) -> Result<i128, Error> {
        ownership::require_owner(&e, &caller)?;
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let remaining =
            math::debit(read_total_funds(&e), amount).ok_or(Error::InsufficientBalance)?;
        e.storage().instance().set(&DataKey::TotalFunds, &remaining);
        storage::bump_instance(&e);

        events::emit_funds_withdrawn(&e, amount, remaining);
        Ok(remaining)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn get_proposal(e: Env, proposal_id: u64) -> Result<FundProposal, Error> {
        load_proposal(&e, proposal_id)
    }

    /// Credits committed by `voter` to `proposal_id`, if they voted.
    pub fn get_vote(e: Env, proposal_id: u64, voter: Address) -> Option<i128> {
        storage::load(&e, &DataKey::Vote(proposal_id, voter))
    }

    pub fn has_voted(e: Env, proposal_id: u64, voter: Address) -> bool {
        storage::exists(&e, &DataKey::Vote(proposal_id, voter))
    }

    /// Community-token credits held by `account` (0 if none were issued).
    pub fn get_balance(e: Env, account: Address) -> i128 {
        read_balance(&e, &account)
    }

    pub fn get_total_funds(e: Env) -> i128 {
        read_total_funds(&e)
    }

    /// Number of proposals ever created.
    pub fn get_proposal_count(e: Env) -> u64 {
        storage::current_id(&e, &DataKey::ProposalCounter)
    }

    pub fn get_owner(e: Env) -> Result<Address, Error> {
        ownership::read_owner(&e).ok_or(Error::NotInitialized)
    }
}
