//! Privileged-identity handling.
//!
//! The owner is recorded once in `instance()` storage by the contract's
//! `initialize` entrypoint. Every owner-gated transition goes through
//! [`require_owner`], and contracts convert [`OwnerError`] into their own
//! wire codes with a `From` impl so the guard composes with `?`.

use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
enum OwnershipKey {
    /// The privileged identity of this contract instance.
    LedgerOwner,
}

/// Failure of an ownership check, before mapping to a contract error code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OwnerError {
    /// No owner has been recorded yet.
    NotInitialized,
    /// An owner is already recorded; `initialize` ran before.
    AlreadyInitialized,
    /// The caller is not the recorded owner.
    NotOwner,
}

pub fn has_owner(e: &Env) -> bool {
    e.storage().instance().has(&OwnershipKey::LedgerOwner)
}

pub fn read_owner(e: &Env) -> Option<Address> {
    e.storage().instance().get(&OwnershipKey::LedgerOwner)
}

pub fn write_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&OwnershipKey::LedgerOwner, owner);
}

/// Record `owner` as the privileged identity. Fails if one is already set.
pub fn initialize_owner(e: &Env, owner: &Address) -> Result<(), OwnerError> {
    if has_owner(e) {
        return Err(OwnerError::AlreadyInitialized);
    }
    owner.require_auth();
    write_owner(e, owner);
    Ok(())
}

/// Compare `caller` against the stored owner without touching auth.
pub fn check_owner(e: &Env, caller: &Address) -> Result<(), OwnerError> {
    let owner = read_owner(e).ok_or(OwnerError::NotInitialized)?;
    if owner != *caller {
        return Err(OwnerError::NotOwner);
    }
    Ok(())
}

/// Authenticate `caller` and require it to be the stored owner.
pub fn require_owner(e: &Env, caller: &Address) -> Result<(), OwnerError> {
    caller.require_auth();
    check_owner(e, caller)
}
