use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-submitted rating for a project.
///
/// Created only by the `rate` command, and only when the named project
/// exists. Entries are append-only: never mutated or deleted, and they are
/// lost when the process exits (there is no feedback persistence).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: Uuid,
    /// Canonical project name as stored, not as the user typed it.
    pub project: String,
    /// Rating out of 5, validated to 1-5 before the entry is created.
    pub rating: u8,
    pub created_at: DateTime<Utc>,
}

impl FeedbackEntry {
    pub fn new(project: impl Into<String>, rating: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            project: project.into(),
            rating,
            created_at: Utc::now(),
        }
    }

    /// The display line used by `show_feedback`.
    pub fn display_line(&self) -> String {
        format!("Project: {} | Rating: {}/5", self.project, self.rating)
    }
}
