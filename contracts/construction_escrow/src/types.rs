use soroban_sdk::{contracttype, Address, String, Vec};

// ─── Project state ─────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProjectStatus {
    /// Milestones are still being worked through.
    Active,
    /// The last milestone has been approved. Terminal.
    Completed,
}

/// A construction project with a fixed budget split into milestones.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Only this address may mark milestones complete.
    pub contractor: Address,
    pub total_budget: i128,
    /// Budget left after released payments.
    pub remaining_budget: i128,
    /// Payment allocated to each milestone, in order.
    pub milestones: Vec<i128>,
    /// Index after the most recently approved milestone.
    pub current_milestone: u32,
    /// Number of milestone payments released so far; also the index of the
    /// next payable milestone.
    pub paid_milestones: u32,
    pub status: ProjectStatus,
    pub created_at: u64,
}

/// Progress marker for one (project, milestone) pair.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestoneRecord {
    pub completed: bool,
    pub approved: bool,
    pub completed_at: u64,
    /// 0 until approved.
    pub approved_at: u64,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Last project id handed out. `instance()`.
    ProjectCounter,
    /// Project record by id. `persistent()`.
    Project(u64),
    /// Milestone progress by (project_id, milestone_index). `persistent()`.
    Milestone(u64, u32),
}
