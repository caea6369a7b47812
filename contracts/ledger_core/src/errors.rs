/// @title  ErrorCategory
/// @notice Abstract failure taxonomy shared by all ledger contracts.
/// @dev    Wire codes are contract-local and never shared; consumers that need
///         to reason across contracts switch on the category instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup errors (not initialized, initialized twice).
    Initialization,
    /// Caller lacks the privilege required for the transition.
    Authorization,
    /// The addressed record does not exist.
    NotFound,
    /// The record exists but is not in a status that accepts the transition.
    InvalidState,
    /// A single-use action was attempted a second time.
    AlreadyParticipated,
    /// A debit exceeds the available balance, budget or pool.
    InsufficientBalance,
    /// An argument is outside its accepted range.
    InvalidInput,
}

/// @title  ErrorExt
/// @notice Provides code(), category() and description() on a contract error.
/// @dev    Implemented by every contract's `#[contracterror]` enum.
pub trait ErrorExt {
    /// @return The wire-stable numeric code.
    fn code(&self) -> u32;

    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for display.
    fn description(&self) -> &'static str;
}
