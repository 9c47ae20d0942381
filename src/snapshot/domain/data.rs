//! Composite snapshot aggregate consumed by the metrics engine.

use super::{MemberSnapshot, MilestoneSnapshot, ProjectSnapshot, TaskSnapshot};
use serde::{Deserialize, Serialize};

/// One project record together with its task, milestone, and member
/// collections.
///
/// The external data layer assembles this aggregate in full before
/// handing it to the engine; nothing is fetched lazily and nothing is
/// written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    /// Project record.
    pub project: ProjectSnapshot,
    /// Tasks belonging to the project.
    pub tasks: Vec<TaskSnapshot>,
    /// Milestones belonging to the project.
    pub milestones: Vec<MilestoneSnapshot>,
    /// Project memberships, active and inactive.
    pub members: Vec<MemberSnapshot>,
}

impl ProjectData {
    /// Creates an aggregate with empty collections.
    #[must_use]
    pub const fn new(project: ProjectSnapshot) -> Self {
        Self {
            project,
            tasks: Vec::new(),
            milestones: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Sets the task collection.
    #[must_use]
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = TaskSnapshot>) -> Self {
        self.tasks = tasks.into_iter().collect();
        self
    }

    /// Sets the milestone collection.
    #[must_use]
    pub fn with_milestones(
        mut self,
        milestones: impl IntoIterator<Item = MilestoneSnapshot>,
    ) -> Self {
        self.milestones = milestones.into_iter().collect();
        self
    }

    /// Sets the member collection.
    #[must_use]
    pub fn with_members(mut self, members: impl IntoIterator<Item = MemberSnapshot>) -> Self {
        self.members = members.into_iter().collect();
        self
    }

    /// Returns the active memberships.
    pub fn active_members(&self) -> impl Iterator<Item = &MemberSnapshot> {
        self.members.iter().filter(|member| member.is_active)
    }
}
