//! Project membership snapshot record.

use super::{ProjectId, UserId};
use serde::{Deserialize, Serialize};

/// Read-only membership record linking a user to a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSnapshot {
    /// Member user identifier.
    pub user_id: UserId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Whether the membership is currently active.
    pub is_active: bool,
}

impl MemberSnapshot {
    /// Creates an active membership record.
    #[must_use]
    pub const fn new(user_id: UserId, project_id: ProjectId) -> Self {
        Self {
            user_id,
            project_id,
            is_active: true,
        }
    }

    /// Marks the membership as inactive.
    #[must_use]
    pub const fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
