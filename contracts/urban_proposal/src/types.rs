use soroban_sdk::{contracttype, Address, String};

/// Voting tokens debited per vote cast.
pub const VOTE_COST: i128 = 1;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Active,
    Approved,
    Rejected,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UrbanProposal {
    pub title: String,
    pub description: String,
    pub proposer: Address,
    pub votes_for: u64,
    pub votes_against: u64,
    pub status: ProposalStatus,
    /// Content hash of an optional AR visualisation of the development.
    pub ar_model_hash: Option<String>,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    ProposalCounter,
    Proposal(u64),
    /// Direction of a cast vote: `true` for, `false` against.
    Vote(u64, Address),
    VotingTokens(Address),
}
