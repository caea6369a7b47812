use ledger_core::{ErrorCategory, ErrorExt, OwnerError};
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Negative amount.
    InvalidAmount = 400,
    /// Withdraw attempted by someone other than the pool owner.
    Unauthorized = 401,
    /// Withdrawal exceeds the pooled total.
    InsufficientFunds = 402,
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
            Error::InvalidAmount => ErrorCategory::InvalidInput,
            Error::Unauthorized => ErrorCategory::Authorization,
            Error::InsufficientFunds => ErrorCategory::InsufficientBalance,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Error::NotInitialized => "Pool has not been initialized",
            Error::AlreadyInitialized => "Pool has already been initialized",
            Error::InvalidAmount => "Amount must be non-negative",
            Error::Unauthorized => "Caller is not the pool owner",
            Error::InsufficientFunds => "Withdrawal exceeds pooled funds",
        }
    }
}
