#![cfg(test)]

use crate::ownership::{self, OwnerError};
use crate::storage;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String};

/// Minimal contract giving the helpers a storage context to run in.
#[contract]
pub struct Scratch;

#[contractimpl]
impl Scratch {
    pub fn owner(e: Env) -> Option<Address> {
        ownership::read_owner(&e)
    }
}

#[contracttype]
#[derive(Clone)]
enum ScratchKey {
    Counter,
    OtherCounter,
    Entry(u64),
}

fn setup(e: &Env) -> Address {
    e.register(Scratch, ())
}

#[test]
fn test_next_id_starts_at_one_and_increments() {
    let e = Env::default();
    let id = setup(&e);

    e.as_contract(&id, || {
        assert_eq!(storage::current_id(&e, &ScratchKey::Counter), 0);
        assert_eq!(storage::next_id(&e, &ScratchKey::Counter), 1);
        assert_eq!(storage::next_id(&e, &ScratchKey::Counter), 2);
        assert_eq!(storage::next_id(&e, &ScratchKey::Counter), 3);
        assert_eq!(storage::current_id(&e, &ScratchKey::Counter), 3);
    });
}

#[test]
fn test_counters_are_independent() {
    let e = Env::default();
    let id = setup(&e);

    e.as_contract(&id, || {
        storage::next_id(&e, &ScratchKey::Counter);
        storage::next_id(&e, &ScratchKey::Counter);
        assert_eq!(storage::next_id(&e, &ScratchKey::OtherCounter), 1);
    });
}

#[test]
fn test_load_missing_is_none() {
    let e = Env::default();
    let id = setup(&e);

    e.as_contract(&id, || {
        let value: Option<String> = storage::load(&e, &ScratchKey::Entry(7));
        assert!(value.is_none());
        assert!(!storage::exists(&e, &ScratchKey::Entry(7)));
    });
}

#[test]
fn test_save_load_remove() {
    let e = Env::default();
    let id = setup(&e);

    e.as_contract(&id, || {
        let value = String::from_str(&e, "Debris-001");
        storage::save(&e, &ScratchKey::Entry(1), &value);
        assert!(storage::exists(&e, &ScratchKey::Entry(1)));

        let loaded: Option<String> = storage::load(&e, &ScratchKey::Entry(1));
        assert_eq!(loaded, Some(value));

        storage::remove(&e, &ScratchKey::Entry(1));
        assert!(!storage::exists(&e, &ScratchKey::Entry(1)));
    });
}

#[test]
fn test_check_owner_before_initialization() {
    let e = Env::default();
    let id = setup(&e);
    let caller = Address::generate(&e);

    e.as_contract(&id, || {
        assert!(!ownership::has_owner(&e));
        assert_eq!(
            ownership::check_owner(&e, &caller),
            Err(OwnerError::NotInitialized)
        );
    });
}

#[test]
fn test_check_owner_matches_only_owner() {
    let e = Env::default();
    let id = setup(&e);
    let owner = Address::generate(&e);
    let stranger = Address::generate(&e);

    e.as_contract(&id, || {
        ownership::write_owner(&e, &owner);
        assert_eq!(ownership::check_owner(&e, &owner), Ok(()));
        assert_eq!(
            ownership::check_owner(&e, &stranger),
            Err(OwnerError::NotOwner)
        );
    });

    let client = ScratchClient::new(&e, &id);
    assert_eq!(client.owner(), Some(owner));
}

#[test]
fn test_initialize_owner_twice_rejected() {
    let e = Env::default();
    let id = setup(&e);
    let owner = Address::generate(&e);
    let usurper = Address::generate(&e);

    e.as_contract(&id, || {
        ownership::write_owner(&e, &owner);
        assert_eq!(
            ownership::initialize_owner(&e, &usurper),
            Err(OwnerError::AlreadyInitialized)
        );
        assert_eq!(ownership::read_owner(&e), Some(owner.clone()));
    });
}
