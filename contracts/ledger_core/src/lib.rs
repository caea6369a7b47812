#![no_std]

//! # Ledger Core
//!
//! Building blocks shared by every civic ledger contract in this workspace.
//! Each contract is a small state machine over keyed records: a privileged
//! owner, sequential record ids, one-shot participation markers and
//! non-negative balances. This crate holds the pieces of that pattern that
//! do not depend on a particular record shape.
//!
//! ## Modules
//! - [`errors`]: error taxonomy every contract maps its wire codes onto
//! - [`ownership`]: one-time owner registration and the owner guard
//! - [`storage`]: id counters and TTL-bumping persistent load/save
//! - [`math`]: checked balance arithmetic and the decision rules

pub mod errors;
pub mod math;
pub mod ownership;
pub mod storage;

pub use errors::{ErrorCategory, ErrorExt};
pub use ownership::OwnerError;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test_math;

#[cfg(test)]
mod test_storage;
