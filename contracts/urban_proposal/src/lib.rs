//! Urban Development Proposal Contract
//!
//! Residents file development proposals, optionally linking an AR model of
//! the planned site, and vote on them with voting tokens issued by the
//! contract owner. Each vote costs one token and is cast once per
//! (proposal, voter). The owner closes a proposal: it is approved when
//! votes for strictly outnumber votes against.

#![no_std]

mod errors;
mod types;

pub use errors::Error;
pub use types::{DataKey, ProposalStatus, UrbanProposal, VOTE_COST};

use ledger_core::{math, ownership, storage};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol};


fn load_proposal(e: &Env, proposal_id: u64) -> Result<UrbanProposal, Error> {
    storage::load(e, &DataKey::Proposal(proposal_id)).ok_or(Error::InvalidProposal)
}

fn read_tokens(e: &Env, account: &Address) -> i128 {
    storage::load(e, &DataKey::VotingTokens(account.clone())).unwrap_or(0)
}

#[contract]
pub struct UrbanProposalContract;

#[contractimpl]
impl UrbanProposalContract {
    pub fn initialize(e: Env, owner: Address) -> Result<(), Error> {
        ownership::initialize_owner(&e, &owner)?;
        storage::bump_instance(&e);
        e.events()
            .publish((Symbol::new(&e, "proposal_board_initialized"),), owner);
        Ok(())
    }

    /// Grant `amount` voting tokens to `account`. Owner only.
    /// Returns the account's new token balance.
    pub fn issue_voting_tokens(
        e: Env,
        caller: Address,
        account: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        ownership::require_owner(&e, &caller)?;
        let balance =
            math::credit(read_tokens(&e, &account), amount).ok_or(Error::InvalidAmount)?;
        storage::save(&e, &DataKey::VotingTokens(account.clone()), &balance);
        storage::bump_instance(&e);

        e.events().publish(
            (Symbol::new(&e, "tokens_issued"), account),
            (amount, balance),
        );
        Ok(balance)
    }

    pub fn create_proposal(
        e: Env,
        caller: Address,
        title: String,
        description: String,
        ar_model_hash: Option<String>,
    ) -> u64 {
        caller.require_auth();

        let proposal_id = storage::next_id(&e, &DataKey::ProposalCounter);
        let proposal = UrbanProposal {
            title,
            description,
            proposer: caller.clone(),
            votes_for: 0,
            votes_against: 0,
            status: ProposalStatus::Active,
            ar_model_hash,
            created_at: e.ledger().timestamp(),
        };
        storage::save(&e, &DataKey::Proposal(proposal_id), &proposal);
        storage::bump_instance(&e);

        e.events().publish(
            (Symbol::new(&e, "proposal_created"), proposal_id),
            caller,
        );
        proposal_id
    }

    /// Cast one vote on an active proposal, spending `VOTE_COST` tokens.
    ///
    /// # Errors
    /// * `InvalidProposal` - unknown id or proposal closed
    /// * `AlreadyVoted` - caller already voted on this proposal
    /// * `InsufficientVotingTokens` - caller cannot cover `VOTE_COST`
    pub fn vote(e: Env, caller: Address, proposal_id: u64, vote_for: bool) -> Result<(), Error> {
        caller.require_auth();

        let mut proposal = load_proposal(&e, proposal_id)?;
        if proposal.status != ProposalStatus::Active {
            return Err(Error::InvalidProposal);
        }
        let vote_key = DataKey::Vote(proposal_id, caller.clone());
        if storage::exists(&e, &vote_key) {
            return Err(Error::AlreadyVoted);
        }
        let tokens = math::debit(read_tokens(&e, &caller), VOTE_COST)
            .ok_or(Error::InsufficientVotingTokens)?;

        if vote_for {
            proposal.votes_for += 1;
        } else {
            proposal.votes_against += 1;
        }

        storage::save(&e, &DataKey::VotingTokens(caller.clone()), &tokens);
        storage::save(&e, &vote_key, &vote_for);
        storage::save(&e, &DataKey::Proposal(proposal_id), &proposal);
        storage::bump_instance(&e);

        e.events().publish(
            (Symbol::new(&e, "vote_cast"), proposal_id, caller),
            vote_for,
        );
        Ok(())
    }

    /// Close an active proposal. Owner only. Returns `true` when approved.
    pub fn close_proposal(e: Env, caller: Address, proposal_id: u64) -> Result<bool, Error> {
        ownership::require_owner(&e, &caller)?;

        let mut proposal = load_proposal(&e, proposal_id)?;
        if proposal.status != ProposalStatus::Active {
            return Err(Error::InvalidProposal);
        }

        let approved = math::has_majority(proposal.votes_for, proposal.votes_against);
        proposal.status = if approved {
            ProposalStatus::Approved
        } else {
            ProposalStatus::Rejected
        };
        storage::save(&e, &DataKey::Proposal(proposal_id), &proposal);
        storage::bump_instance(&e);

        e.events().publish(
            (Symbol::new(&e, "proposal_closed"), proposal_id),
            (approved, proposal.votes_for, proposal.votes_against),
        );
        Ok(approved)
    }

    pub fn get_proposal(e: Env, proposal_id: u64) -> Result<UrbanProposal, Error> {
        load_proposal(&e, proposal_id)
    }

    pub fn get_vote(e: Env, proposal_id: u64, voter: Address) -> Option<bool> {
        storage::load(&e, &DataKey::Vote(proposal_id, voter))
    }

    pub fn get_voting_tokens(e: Env, account: Address) -> i128 {
        read_tokens(&e, &account)
    }

    pub fn get_proposal_count(e: Env) -> u64 {
        storage::current_id(&e, &DataKey::ProposalCounter)
    }

    pub fn get_owner(e: Env) -> Result<Address, Error> {
        ownership::read_owner(&e).ok_or(Error::NotInitialized)
    }
}
