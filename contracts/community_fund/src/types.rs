use soroban_sdk::{contracttype, Address, String};

// ─── Proposal state ────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    /// Accepting votes.
    Active,
    /// Weighted votes reached the requested amount; added to the pool.
    Approved,
    /// Finalized below the requested amount.
    Rejected,
}

/// A request for community funds, decided by credit-weighted votes.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundProposal {
    pub title: String,
    pub description: String,
    /// Address that created the proposal.
    pub proposer: Address,
    /// Requested amount; the approval threshold for `votes`.
    pub amount: i128,
    /// Sum of credits committed by voters.
    pub votes: i128,
    pub status: ProposalStatus,
    /// Ledger timestamp at creation.
    pub created_at: u64,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Last proposal id handed out. `instance()`.
    ProposalCounter,
    /// Withdrawable pool fed by approved proposals. `instance()`.
    TotalFunds,
    /// Proposal record by id. `persistent()`.
    Proposal(u64),
    /// Credits committed by (proposal_id, voter). `persistent()`.
    Vote(u64, Address),
    /// Community-token credits per account. `persistent()`.
    Balance(Address),
}
