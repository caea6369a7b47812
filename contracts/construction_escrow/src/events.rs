use soroban_sdk::{Address, Env, Symbol};

pub fn emit_initialized(e: &Env, owner: &Address) {
    e.events()
        .publish((Symbol::new(e, "escrow_initialized"),), owner.clone());
}

/// Emitted when a project is created.
///
/// # Topics
/// * `Symbol` - "project_created"
/// * `u64` - Project id
///
/// # Data
/// * `Address` - Contractor
/// * `i128` - Total budget
/// * `u32` - Number of milestones
pub fn emit_project_created(
    e: &Env,
    project_id: u64,
    contractor: &Address,
    total_budget: i128,
    milestone_count: u32,
) {
    let topics = (Symbol::new(e, "project_created"), project_id);
    e.events()
        .publish(topics, (contractor.clone(), total_budget, milestone_count));
}

/// Emitted when the contractor marks a milestone complete.
///
/// # Topics
/// * `Symbol` - "milestone_completed"
/// * `u64` - Project id
///
/// # Data
/// * `u32` - Milestone index
pub fn emit_milestone_completed(e: &Env, project_id: u64, index: u32) {
    let topics = (Symbol::new(e, "milestone_completed"), project_id);
    e.events().publish(topics, index);
}

/// Emitted when the owner approves a completed milestone.
///
/// # Topics
/// * `Symbol` - "milestone_approved"
/// * `u64` - Project id
///
/// # Data
/// * `u32` - Milestone index
/// * `bool` - Whether this approval completed the project
pub fn emit_milestone_approved(e: &Env, project_id: u64, index: u32, project_completed: bool) {
    let topics = (Symbol::new(e, "milestone_approved"), project_id);
    e.events().publish(topics, (index, project_completed));
}

/// Emitted when a milestone payment is released.
///
/// # Topics
/// * `Symbol` - "payment_released"
/// * `u64` - Project id
///
/// # Data
/// * `u32` - Milestone index paid
/// * `i128` - Amount released
/// * `i128` - Remaining budget
pub fn emit_payment_released(e: &Env, project_id: u64, index: u32, amount: i128, remaining: i128) {
    let topics = (Symbol::new(e, "payment_released"), project_id);
    e.events().publish(topics, (index, amount, remaining));
}
