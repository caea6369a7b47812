use ledger_core::{ErrorCategory, ErrorExt, OwnerError};
use soroban_sdk::contracterror;

/// Error codes returned by the community fund.
///
/// Codes are wire-stable and asserted by existing callers. Never renumber.
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Error {
    /// Owner-gated call before `initialize`.
    NotInitialized = 1,
    /// `initialize` called a second time.
    AlreadyInitialized = 2,
    /// Caller is not the fund owner.
    Unauthorized = 100,
    /// Proposal does not exist or is no longer active.
    InvalidProposal = 101,
    /// Vote exceeds the voter's credits, or withdrawal exceeds the pool.
    InsufficientBalance = 102,
    /// Voter already voted on this proposal.
    AlreadyVoted = 103,
    /// Amount is negative or would overflow a balance.
    InvalidAmount = 104,
}

impl From<OwnerError> for Error {
    fn from(err: OwnerError) -> Self {
        match err {
            OwnerError::NotInitialized => Error::NotInitialized,
            OwnerError::AlreadyInitialized => Error::AlreadyInitialized,
            OwnerError::NotOwner => Error::Unauthorized,
        }
    }
}

impl ErrorExt for Error {
    fn code(&self) -> u32 {
        *self as u32
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Error::NotInitialized | Error::AlreadyInitialized => ErrorCategory::Initialization,
            Error::Unauthorized => ErrorCategory::Authorization,
            Error::InvalidProposal => ErrorCategory::InvalidState,
            Error::InsufficientBalance => ErrorCategory::InsufficientBalance,
            Error::AlreadyVoted => ErrorCategory::AlreadyParticipated,
            Error::InvalidAmount => ErrorCategory::InvalidInput,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Error::NotInitialized => "Fund has not been initialized",
            Error::AlreadyInitialized => "Fund has already been initialized",
            Error::Unauthorized => "Caller is not the fund owner",
            Error::InvalidProposal => "Proposal does not exist or is not active",
            Error::InsufficientBalance => "Insufficient credits or pool balance",
            Error::AlreadyVoted => "Caller has already voted on this proposal",
            Error::InvalidAmount => "Amount must be non-negative and representable",
        }
    }
}
