#![no_std]

//! # Debris Registry Contract
//!
//! Open registry of tracked orbital debris. Anyone may report an object;
//! the registry owner marks reports as verified once they have been
//! independently confirmed.
//!
//! ## Features
//! - Sequential report ids starting at 1
//! - Owner-gated, one-way verification
//! - Events for every report and verification

use ledger_core::{ownership, storage, ErrorCategory, ErrorExt, OwnerError};
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env, String, Symbol};

/// A reported debris object.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DebrisEntry {
    /// Catalogue designation supplied by the reporter, e.g. "Debris-001".
    pub identifier: String,
    pub size: u32,
    /// Orbit class, e.g. "LEO" or "GEO".
    pub orbit: String,
    pub risk_level: u32,
    pub reporter: Address,
    pub verified: bool,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    DebrisCounter,
    Debris(u64),
}

#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 401,
    NotFound = 404,
    AlreadyVerified = 409,
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
            Error::NotFound => ErrorCategory::NotFound,
            Error::AlreadyVerified => ErrorCategory::InvalidState,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Error::NotInitialized => "Registry has not been initialized",
            Error::AlreadyInitialized => "Registry has already been initialized",
            Error::Unauthorized => "Caller is not the registry owner",
            Error::NotFound => "No debris entry with this id",
            Error::AlreadyVerified => "Debris entry is already verified",
        }
    }
}

#[contract]
pub struct DebrisRegistry;

#[contractimpl]
impl DebrisRegistry {
    /// Initialize the registry with its owner, the only verifier.
    pub fn initialize(e: Env, owner: Address) -> Result<(), Error> {
        ownership::initialize_owner(&e, &owner)?;
        storage::bump_instance(&e);
        e.events()
            .publish((Symbol::new(&e, "registry_initialized"),), owner);
        Ok(())
    }

    /// Report a debris object. Any caller may report.
    ///
    /// # Returns
    /// The new debris id.
    ///
    /// # Events
    /// Emits `debris_reported` with `(reporter, risk_level)`
    pub fn report_debris(
        e: Env,
        caller: Address,
        identifier: String,
        size: u32,
        orbit: String,
        risk_level: u32,
    ) -> u64 {
        caller.require_auth();

        let debris_id = storage::next_id(&e, &DataKey::DebrisCounter);
        let entry = DebrisEntry {
            identifier,
            size,
            orbit,
            risk_level,
            reporter: caller.clone(),
            verified: false,
        };
        storage::save(&e, &DataKey::Debris(debris_id), &entry);
        storage::bump_instance(&e);

        e.events().publish(
            (Symbol::new(&e, "debris_reported"), debris_id),
            (caller, risk_level),
        );
        debris_id
    }

    /// Mark a report as verified. Owner only; verification cannot be undone.
    ///
    /// # Errors
    /// * `Unauthorized` - caller is not the owner
    /// * `NotFound` - unknown debris id
    /// * `AlreadyVerified` - entry was verified before
    pub fn verify_debris(e: Env, caller: Address, debris_id: u64) -> Result<(), Error> {
        ownership::require_owner(&e, &caller)?;

        let key = DataKey::Debris(debris_id);
        let mut entry: DebrisEntry = storage::load(&e, &key).ok_or(Error::NotFound)?;
        if entry.verified {
            return Err(Error::AlreadyVerified);
        }

        entry.verified = true;
        storage::save(&e, &key, &entry);
        storage::bump_instance(&e);

        e.events()
            .publish((Symbol::new(&e, "debris_verified"), debris_id), caller);
        Ok(())
    }

    pub fn get_debris(e: Env, debris_id: u64) -> Option<DebrisEntry> {
        storage::load(&e, &DataKey::Debris(debris_id))
    }

    pub fn get_debris_count(e: Env) -> u64 {
        storage::current_id(&e, &DataKey::DebrisCounter)
    }

    pub fn get_owner(e: Env) -> Result<Address, Error> {
        ownership::read_owner(&e).ok_or(Error::NotInitialized)
    }
}
