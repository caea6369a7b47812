//! Overflow-safe balance arithmetic and the decision rules used at
//! finalization.
//!
//! Balance helpers return `None` instead of panicking so that callers can map
//! the failure onto their own wire code.

/// Add `amount` to `balance`. `None` on a negative amount or on overflow.
#[inline]
#[must_use]
pub fn credit(balance: i128, amount: i128) -> Option<i128> {
    if amount < 0 {
        return None;
    }
    balance.checked_add(amount)
}

/// Remove `amount` from `balance`. `None` if the amount is negative or the
/// result would drop below zero.
#[inline]
#[must_use]
pub fn debit(balance: i128, amount: i128) -> Option<i128> {
    if amount < 0 || amount > balance {
        return None;
    }
    Some(balance - amount)
}

/// Weighted-vote rule: the tally must reach the requested amount.
#[inline]
#[must_use]
pub fn meets_threshold(tally: i128, target: i128) -> bool {
    tally >= target
}

/// Simple-majority rule: ties are not a majority.
#[inline]
#[must_use]
pub fn has_majority(votes_for: u64, votes_against: u64) -> bool {
    votes_for > votes_against
}

/// Sum a list of non-negative amounts. `None` on a negative entry or overflow.
#[must_use]
pub fn checked_sum<I>(amounts: I) -> Option<i128>
where
    I: IntoIterator<Item = i128>,
{
    amounts
        .into_iter()
        .try_fold(0_i128, |acc, amount| credit(acc, amount))
}
