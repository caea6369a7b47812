use ledger_core::{ErrorCategory, ErrorExt, OwnerError};
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 100,
    /// Unknown proposal id, or the proposal is already closed.
    InvalidProposal = 101,
    AlreadyVoted = 102,
    InsufficientVotingTokens = 103,
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
            Error::AlreadyVoted => ErrorCategory::AlreadyParticipated,
            Error::InsufficientVotingTokens => ErrorCategory::InsufficientBalance,
            Error::InvalidAmount => ErrorCategory::InvalidInput,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Error::NotInitialized => "Contract has not been initialized",
            Error::AlreadyInitialized => "Contract has already been initialized",
            Error::Unauthorized => "Caller is not the contract owner",
            Error::InvalidProposal => "Proposal does not exist or is closed",
            Error::AlreadyVoted => "Caller already voted on this proposal",
            Error::InsufficientVotingTokens => "Caller holds no voting tokens",
            Error::InvalidAmount => "Amount must be non-negative",
        }
    }
}
