//! Construction Milestone Escrow Contract
//!
//! The escrow owner registers a project with a total budget split into an
//! ordered list of milestone payments. The project's contractor marks
//! milestones complete, the owner approves them, and the owner releases the
//! approved payments one at a time against the remaining budget.
//!
//! ## Lifecycle
//!
//! ```text
//! complete_milestone(i)  ->  approve_milestone(i)  ->  release_payment()
//!   (contractor)              (owner)                   (owner, pays the
//!                                                        next unpaid milestone)
//! ```
//!
//! Approving the last milestone moves the project to `Completed`; payments for
//! approved milestones can still be released afterwards.

#![no_std]

mod errors;
mod events;
mod types;

pub use errors::Error;
pub use types::{DataKey, MilestoneRecord, Project, ProjectStatus};

use ledger_core::{math, ownership, storage};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

#[cfg(test)]
mod test_helpers;


fn load_project(e: &Env, project_id: u64) -> Result<Project, Error> {
    storage::load(e, &DataKey::Project(project_id)).ok_or(Error::InvalidState)
}

fn load_milestone(e: &Env, project_id: u64, index: u32) -> Option<MilestoneRecord> {
    storage::load(e, &DataKey::Milestone(project_id, index))
}

#[contract]
pub struct ConstructionEscrow;

#[contractimpl]
impl ConstructionEscrow {
    pub fn initialize(e: Env, owner: Address) -> Result<(), Error> {
        ownership::initialize_owner(&e, &owner)?;
        storage::bump_instance(&e);
        events::emit_initialized(&e, &owner);
        Ok(())
    }

    /// Register a project. Owner only.
    ///
    /// `milestones` lists the payment for each milestone in order. It must be
    /// non-empty and every entry, like `total_budget`, non-negative.
    pub fn create_project(
        e: Env,
        caller: Address,
        title: String,
        description: String,
        contractor: Address,
        total_budget: i128,
        milestones: Vec<i128>,
    ) -> Result<u64, Error> {
        ownership::require_owner(&e, &caller)?;
        if total_budget < 0 || milestones.is_empty() {
            return Err(Error::InvalidAmount);
        }
        math::checked_sum(milestones.iter()).ok_or(Error::InvalidAmount)?;

        let project_id = storage::next_id(&e, &DataKey::ProjectCounter);
        let milestone_count = milestones.len();
        let project = Project {
            title,
            description,
            contractor: contractor.clone(),
            total_budget,
            remaining_budget: total_budget,
            milestones,
            current_milestone: 0,
            paid_milestones: 0,
            status: ProjectStatus::Active,
            created_at: e.ledger().timestamp(),
        };
        storage::save(&e, &DataKey::Project(project_id), &project);
        storage::bump_instance(&e);

        events::emit_project_created(&e, project_id, &contractor, total_budget, milestone_count);
        Ok(project_id)
    }

    /// Mark milestone `index` complete. Contractor only.
    ///
    /// # Errors
    /// * `InvalidState` - unknown project, index out of range, or project completed
    /// * `NotEligible` - caller is not the project's contractor
    /// * `AlreadyRecorded` - milestone already marked complete
    pub fn complete_milestone(
        e: Env,
        caller: Address,
        project_id: u64,
        index: u32,
    ) -> Result<(), Error> {
        caller.require_auth();

        let project = load_project(&e, project_id)?;
        if caller != project.contractor {
            return Err(Error::NotEligible);
        }
        if index >= project.milestones.len() || project.status == ProjectStatus::Completed {
            return Err(Error::InvalidState);
        }
        if load_milestone(&e, project_id, index).is_some_and(|m| m.completed) {
            return Err(Error::AlreadyRecorded);
        }

        let record = MilestoneRecord {
            completed: true,
            approved: false,
            completed_at: e.ledger().timestamp(),
            approved_at: 0,
        };
        storage::save(&e, &DataKey::Milestone(project_id, index), &record);
        storage::bump_instance(&e);

        events::emit_milestone_completed(&e, project_id, index);
        Ok(())
    }

    /// Approve a completed milestone. Owner only.
    ///
    /// Approving the last milestone completes the project; otherwise the
    /// project's current milestone advances past `index`. A completed
    /// project accepts no further approvals.
    ///
    /// # Errors
    /// * `InvalidState` - unknown project, project completed, or milestone not completed
    /// * `AlreadyRecorded` - milestone already approved
    pub fn approve_milestone(
        e: Env,
        caller: Address,
        project_id: u64,
        index: u32,
    ) -> Result<(), Error> {
        ownership::require_owner(&e, &caller)?;

        let mut project = load_project(&e, project_id)?;
        if project.status == ProjectStatus::Completed {
            return Err(Error::InvalidState);
        }
        let mut record = load_milestone(&e, project_id, index)
            .filter(|m| m.completed)
            .ok_or(Error::InvalidState)?;
        if record.approved {
            return Err(Error::AlreadyRecorded);
        }

        record.approved = true;
        record.approved_at = e.ledger().timestamp();

        let is_last = index + 1 == project.milestones.len();
        if is_last {
            project.status = ProjectStatus::Completed;
        } else {
            project.current_milestone = index + 1;
        }

        storage::save(&e, &DataKey::Milestone(project_id, index), &record);
        storage::save(&e, &DataKey::Project(project_id), &project);
        storage::bump_instance(&e);

        events::emit_milestone_approved(&e, project_id, index, is_last);
        Ok(())
    }

    /// Release the payment for the next unpaid milestone. Owner only.
    /// Returns the amount released.
    ///
    /// # Errors
    /// * `InvalidState` - unknown project
    /// * `NotEligible` - every milestone is paid, or the next one is not approved
    /// * `InsufficientBudget` - remaining budget is below the milestone amount
    pub fn release_payment(e: Env, caller: Address, project_id: u64) -> Result<i128, Error> {
        ownership::require_owner(&e, &caller)?;

        let mut project = load_project(&e, project_id)?;
        let index = project.paid_milestones;
        let amount = project.milestones.get(index).ok_or(Error::NotEligible)?;
        if !load_milestone(&e, project_id, index).is_some_and(|m| m.approved) {
            return Err(Error::NotEligible);
        }

        project.remaining_budget =
            math::debit(project.remaining_budget, amount).ok_or(Error::InsufficientBudget)?;
        project.paid_milestones += 1;
        storage::save(&e, &DataKey::Project(project_id), &project);
        storage::bump_instance(&e);

        events::emit_payment_released(&e, project_id, index, amount, project.remaining_budget);
        Ok(amount)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn get_project(e: Env, project_id: u64) -> Result<Project, Error> {
        load_project(&e, project_id)
    }

    pub fn get_milestone(e: Env, project_id: u64, index: u32) -> Option<MilestoneRecord> {
        load_milestone(&e, project_id, index)
    }

    pub fn get_project_count(e: Env) -> u64 {
        storage::current_id(&e, &DataKey::ProjectCounter)
    }

    pub fn get_owner(e: Env) -> Result<Address, Error> {
        ownership::read_owner(&e).ok_or(Error::NotInitialized)
    }
}
