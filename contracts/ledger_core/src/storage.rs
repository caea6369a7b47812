//! Storage helpers for keyed ledger records.
//!
//! | Data                         | Tier          |
//! |------------------------------|---------------|
//! | owner, id counters, totals   | `instance()`  |
//! | records, markers, balances   | `persistent()`|
//!
//! `instance()` holds a small bounded set of globals that share the
//! contract's TTL. Records and markers grow without bound, so each lives in
//! `persistent()` with its own TTL, bumped on every read and write.

use core::fmt::Debug;

use soroban_sdk::{Env, IntoVal, TryFromVal, Val};

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
pub const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub const BUMP_TARGET: u32 = 518_400;

/// Last id handed out by the counter stored under `counter` (0 if none).
pub fn current_id<K>(e: &Env, counter: &K) -> u64
where
    K: IntoVal<Env, Val>,
{
    e.storage().instance().get(counter).unwrap_or(0)
}

/// Allocate the next sequential id. Ids start at 1 and are never reused.
pub fn next_id<K>(e: &Env, counter: &K) -> u64
where
    K: IntoVal<Env, Val>,
{
    let next = current_id(e, counter)
        .checked_add(1)
        .expect("id counter overflow");
    e.storage().instance().set(counter, &next);
    next
}

/// Read a `persistent()` entry and bump its TTL if present.
pub fn load<K, V>(e: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
    V::Error: Debug,
{
    let storage = e.storage().persistent();
    let value = storage.get(key)?;
    storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
    Some(value)
}

/// Write a `persistent()` entry with a fresh TTL.
pub fn save<K, V>(e: &Env, key: &K, value: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    let storage = e.storage().persistent();
    storage.set(key, value);
    storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn exists<K>(e: &Env, key: &K) -> bool
where
    K: IntoVal<Env, Val>,
{
    e.storage().persistent().has(key)
}

pub fn remove<K>(e: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    e.storage().persistent().remove(key);
}

/// Extend the contract instance TTL. Every mutating entrypoint calls this on success.
pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}
