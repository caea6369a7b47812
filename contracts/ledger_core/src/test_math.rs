//! Property tests for the balance helpers and decision rules.

#![cfg(test)]

use crate::math::{checked_sum, credit, debit, has_majority, meets_threshold};
use proptest::prelude::*;

proptest! {
    /// A successful debit never leaves a negative balance.
    #[test]
    fn prop_debit_never_negative(balance in 0_i128..1_000_000_000, amount in -1_000_i128..2_000_000_000) {
        if let Some(rest) = debit(balance, amount) {
            prop_assert!(rest >= 0);
            prop_assert_eq!(rest + amount, balance);
        }
    }

    /// A debit succeeds exactly when the amount is within the balance.
    #[test]
    fn prop_debit_iff_covered(balance in 0_i128..1_000_000, amount in -1_000_i128..2_000_000) {
        prop_assert_eq!(debit(balance, amount).is_some(), amount >= 0 && amount <= balance);
    }

    /// Credit followed by a debit of the same amount restores the balance.
    #[test]
    fn prop_credit_then_debit_restores(balance in 0_i128..1_000_000_000, amount in 0_i128..1_000_000_000) {
        let credited = credit(balance, amount).unwrap();
        prop_assert_eq!(debit(credited, amount), Some(balance));
    }

    /// Majority is strict: equal tallies never pass.
    #[test]
    fn prop_majority_strict(votes in 0_u64..10_000) {
        prop_assert!(!has_majority(votes, votes));
        prop_assert!(has_majority(votes + 1, votes));
    }

    /// The threshold is inclusive.
    #[test]
    fn prop_threshold_inclusive(target in 0_i128..1_000_000) {
        prop_assert!(meets_threshold(target, target));
        prop_assert!(!meets_threshold(target - 1, target));
    }
}

#[test]
fn test_credit_rejects_negative_amount() {
    assert_eq!(credit(100, -1), None);
}

#[test]
fn test_credit_overflow() {
    assert_eq!(credit(i128::MAX, 1), None);
}

#[test]
fn test_debit_exact_balance() {
    assert_eq!(debit(1000, 1000), Some(0));
    assert_eq!(debit(1000, 1001), None);
}

#[test]
fn test_community_fund_rejection_case() {
    // 2000 + 1000 weighted votes against a 5000 request.
    assert!(!meets_threshold(3000, 5000));
}

#[test]
fn test_checked_sum() {
    assert_eq!(checked_sum([250_000, 500_000, 250_000]), Some(1_000_000));
    assert_eq!(checked_sum([0_i128; 0]), Some(0));
    assert_eq!(checked_sum([10, -1]), None);
    assert_eq!(checked_sum([i128::MAX, 1]), None);
}
