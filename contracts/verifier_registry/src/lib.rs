#![no_std]

//! # Verifier Registry Contract
//!
//! Owner-managed allow-list of addresses trusted to verify reports.
//! Membership is a plain key lookup: removing a verifier deletes its entry,
//! removing an address that is not listed is a no-op, and re-adding an
//! address overwrites the previous entry.

use ledger_core::{ownership, storage, ErrorCategory, ErrorExt, OwnerError};
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env, String, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifierEntry {
    /// Display name, e.g. "Space Agency 1".
    pub name: String,
    pub active: bool,
    pub added_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Number of addresses currently on the list. `instance()`.
    VerifierCount,
    Verifier(Address),
}

#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 401,
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
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Error::NotInitialized => "Registry has not been initialized",
            Error::AlreadyInitialized => "Registry has already been initialized",
            Error::Unauthorized => "Caller is not the registry owner",
        }
    }
}

fn read_count(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::VerifierCount)
        .unwrap_or(0)
}

fn write_count(e: &Env, count: u32) {
    e.storage().instance().set(&DataKey::VerifierCount, &count);
    storage::bump_instance(e);
}

#[contract]
pub struct VerifierRegistry;

#[contractimpl]
impl VerifierRegistry {
    pub fn initialize(e: Env, owner: Address) -> Result<(), Error> {
        ownership::initialize_owner(&e, &owner)?;
        write_count(&e, 0);
        e.events()
            .publish((Symbol::new(&e, "registry_initialized"),), owner);
        Ok(())
    }

    /// Add `verifier` to the allow-list, or overwrite its existing entry.
    /// Owner only.
    ///
    /// # Events
    /// Emits `verifier_added` with the verifier's name
    pub fn add_verifier(
        e: Env,
        caller: Address,
        verifier: Address,
        name: String,
    ) -> Result<(), Error> {
        ownership::require_owner(&e, &caller)?;

        let key = DataKey::Verifier(verifier.clone());
        let count = if storage::exists(&e, &key) {
            read_count(&e)
        } else {
            read_count(&e) + 1
        };
        write_count(&e, count);

        let entry = VerifierEntry {
            name: name.clone(),
            active: true,
            added_at: e.ledger().timestamp(),
        };
        storage::save(&e, &key, &entry);

        e.events()
            .publish((Symbol::new(&e, "verifier_added"), verifier), name);
        Ok(())
    }

    /// Delete `verifier` from the allow-list. Owner only.
    ///
    /// Removing an address that is not listed succeeds and changes nothing.
    pub fn remove_verifier(e: Env, caller: Address, verifier: Address) -> Result<(), Error> {
        ownership::require_owner(&e, &caller)?;

        let key = DataKey::Verifier(verifier.clone());
        if !storage::exists(&e, &key) {
            storage::bump_instance(&e);
            return Ok(());
        }
        storage::remove(&e, &key);
        write_count(&e, read_count(&e).saturating_sub(1));

        e.events()
            .publish((Symbol::new(&e, "verifier_removed"), verifier), ());
        Ok(())
    }

    pub fn is_verifier(e: Env, address: Address) -> bool {
        storage::exists(&e, &DataKey::Verifier(address))
    }

    pub fn get_verifier(e: Env, address: Address) -> Option<VerifierEntry> {
        storage::load(&e, &DataKey::Verifier(address))
    }

    pub fn get_verifier_count(e: Env) -> u32 {
        read_count(&e)
    }

    pub fn get_owner(e: Env) -> Result<Address, Error> {
        ownership::read_owner(&e).ok_or(Error::NotInitialized)
    }
}
