use ledger_core::{ErrorCategory, ErrorExt, OwnerError};
use soroban_sdk::contracterror;

/// Wire-stable error codes of the construction escrow.
///
/// Code Layout:
///   1 -  2  : Initialization
///   100-105 : Project / milestone transitions
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is not the escrow owner.
    Unauthorized = 100,
    /// Project missing, milestone out of range or not completed, or project
    /// already completed.
    InvalidState = 101,
    /// Caller is not the project's contractor, or the payable milestone has
    /// not been approved.
    NotEligible = 102,
    /// Remaining budget does not cover the milestone payment.
    InsufficientBudget = 103,
    /// Milestone completion or approval was already recorded.
    AlreadyRecorded = 104,
    /// Negative budget or milestone amount, or an empty milestone list.
    InvalidAmount = 105,
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
            Error::Unauthorized | Error::NotEligible => ErrorCategory::Authorization,
            Error::InvalidState => ErrorCategory::InvalidState,
            Error::InsufficientBudget => ErrorCategory::InsufficientBalance,
            Error::AlreadyRecorded => ErrorCategory::AlreadyParticipated,
            Error::InvalidAmount => ErrorCategory::InvalidInput,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Error::NotInitialized => "Escrow has not been initialized",
            Error::AlreadyInitialized => "Escrow has already been initialized",
            Error::Unauthorized => "Caller is not the escrow owner",
            Error::InvalidState => "Project or milestone is missing or not in the required state",
            Error::NotEligible => "Caller is not the contractor, or the milestone is not approved",
            Error::InsufficientBudget => "Remaining budget does not cover the milestone",
            Error::AlreadyRecorded => "Milestone step has already been recorded",
            Error::InvalidAmount => "Budget and milestone amounts must be non-negative",
        }
    }
}
