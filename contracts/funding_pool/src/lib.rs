#![no_std]

//! Funding Pool Contract
//!
//! Anyone can contribute to a shared pool; the pool owner withdraws from it
//! on behalf of a recipient. Contributions and withdrawals are tracked per
//! address so the pool's history can be audited from contract state alone.
//!
//! Invariant: `total_funds == sum(contributions) - sum(withdrawn)`.

mod errors;

pub use errors::Error;

use ledger_core::{math, ownership, storage};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    TotalFunds,
    Contribution(Address),
    Withdrawn(Address),
}

fn read_total(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalFunds)
        .unwrap_or(0)
}

fn write_total(e: &Env, total: i128) {
    e.storage().instance().set(&DataKey::TotalFunds, &total);
    storage::bump_instance(e);
}

fn read_entry(e: &Env, key: &DataKey) -> i128 {
    storage::load(e, key).unwrap_or(0)
}

#[contract]
pub struct FundingPool;

#[contractimpl]
impl FundingPool {
    pub fn initialize(e: Env, owner: Address) -> Result<(), Error> {
        ownership::initialize_owner(&e, &owner)?;
        write_total(&e, 0);
        e.events()
            .publish((Symbol::new(&e, "pool_initialized"),), owner);
        Ok(())
    }

    /// Add `amount` to the pool from `caller`. Returns the new pool total.
    pub fn fund(e: Env, caller: Address, amount: i128) -> Result<i128, Error> {
        caller.require_auth();

        let key = DataKey::Contribution(caller.clone());
        let contribution = math::credit(read_entry(&e, &key), amount).ok_or(Error::InvalidAmount)?;
        let total = math::credit(read_total(&e), amount).ok_or(Error::InvalidAmount)?;

        storage::save(&e, &key, &contribution);
        write_total(&e, total);

        e.events()
            .publish((Symbol::new(&e, "pool_funded"), caller), (amount, total));
        Ok(total)
    }

    /// Pay `amount` out of the pool to `recipient`. Owner only.
    /// Returns the pool total remaining.
    ///
    /// # Errors
    /// * `Unauthorized` - caller is not the owner
    /// * `InvalidAmount` - negative amount
    /// * `InsufficientFunds` - amount exceeds the pool total
    pub fn withdraw(
        e: Env,
        caller: Address,
        amount: i128,
        recipient: Address,
    ) -> Result<i128, Error> {
        ownership::require_owner(&e, &caller)?;
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let remaining = math::debit(read_total(&e), amount).ok_or(Error::InsufficientFunds)?;
        let key = DataKey::Withdrawn(recipient.clone());
        let withdrawn = math::credit(read_entry(&e, &key), amount).ok_or(Error::InvalidAmount)?;

        storage::save(&e, &key, &withdrawn);
        write_total(&e, remaining);

        e.events().publish(
            (Symbol::new(&e, "pool_withdrawn"), recipient),
            (amount, remaining),
        );
        Ok(remaining)
    }

    pub fn get_total_funds(e: Env) -> i128 {
        read_total(&e)
    }

    /// Lifetime contributions made by `funder`.
    pub fn get_contribution(e: Env, funder: Address) -> i128 {
        read_entry(&e, &DataKey::Contribution(funder))
    }

    /// Lifetime withdrawals paid to `recipient`.
    pub fn get_withdrawn(e: Env, recipient: Address) -> i128 {
        read_entry(&e, &DataKey::Withdrawn(recipient))
    }

    pub fn get_owner(e: Env) -> Result<Address, Error> {
        ownership::read_owner(&e).ok_or(Error::NotInitialized)
    }
}
