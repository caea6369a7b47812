#![no_std]

//! # Debris Token Contract
//!
//! Minimal fungible token rewarding debris reporting. The owner mints;
//! holders transfer. There is no burn, allowance, or supply cap.
//!
//! Invariant: the sum of all balances equals `total_supply`.

use ledger_core::{math, ownership, storage, ErrorCategory, ErrorExt, OwnerError};
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    TotalSupply,
    Balance(Address),
}

#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Mint attempted by someone other than the token owner.
    Unauthorized = 100,
    InsufficientBalance = 101,
    InvalidAmount = 102,
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
            Error::InsufficientBalance => ErrorCategory::InsufficientBalance,
            Error::InvalidAmount => ErrorCategory::InvalidInput,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Error::NotInitialized => "Token has not been initialized",
            Error::AlreadyInitialized => "Token has already been initialized",
            Error::Unauthorized => "Only the token owner may mint",
            Error::InsufficientBalance => "Balance too low for transfer",
            Error::InvalidAmount => "Amount must be non-negative",
        }
    }
}

fn read_balance(e: &Env, account: &Address) -> i128 {
    storage::load(e, &DataKey::Balance(account.clone())).unwrap_or(0)
}

fn write_balance(e: &Env, account: &Address, balance: i128) {
    storage::save(e, &DataKey::Balance(account.clone()), &balance);
}

fn read_supply(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

#[contract]
pub struct DebrisToken;

#[contractimpl]
impl DebrisToken {
    pub fn initialize(e: Env, owner: Address) -> Result<(), Error> {
        ownership::initialize_owner(&e, &owner)?;
        e.storage().instance().set(&DataKey::TotalSupply, &0_i128);
        storage::bump_instance(&e);
        e.events()
            .publish((Symbol::new(&e, "token_initialized"),), owner);
        Ok(())
    }

    /// Mint `amount` new tokens to `recipient`. Owner only.
    ///
    /// # Events
    /// Emits `tokens_minted` with `(amount, new_balance)`
    pub fn mint(e: Env, caller: Address, amount: i128, recipient: Address) -> Result<(), Error> {
        ownership::require_owner(&e, &caller)?;

        let balance =
            math::credit(read_balance(&e, &recipient), amount).ok_or(Error::InvalidAmount)?;
        let supply = math::credit(read_supply(&e), amount).ok_or(Error::InvalidAmount)?;

        write_balance(&e, &recipient, balance);
        e.storage().instance().set(&DataKey::TotalSupply, &supply);
        storage::bump_instance(&e);

        e.events().publish(
            (Symbol::new(&e, "tokens_minted"), recipient),
            (amount, balance),
        );
        Ok(())
    }

    /// Move `amount` from `from` to `to`. `from` must authorize.
    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let from_balance =
            math::debit(read_balance(&e, &from), amount).ok_or(Error::InsufficientBalance)?;
        // A self-transfer only needs the balance check.
        if from != to {
            let to_balance =
                math::credit(read_balance(&e, &to), amount).ok_or(Error::InvalidAmount)?;
            write_balance(&e, &from, from_balance);
            write_balance(&e, &to, to_balance);
        }
        storage::bump_instance(&e);

        e.events()
            .publish((Symbol::new(&e, "transfer"), from, to), amount);
        Ok(())
    }

    pub fn balance(e: Env, account: Address) -> i128 {
        read_balance(&e, &account)
    }

    pub fn total_supply(e: Env) -> i128 {
        read_supply(&e)
    }

    pub fn get_owner(e: Env) -> Result<Address, Error> {
        ownership::read_owner(&e).ok_or(Error::NotInitialized)
    }
}
