use crewboard_protocol::Day;
use serde::{Deserialize, Serialize};

use crate::model::team::UNASSIGNED_ID;

/// The atomic schedulable unit on the board.
///
/// `priority` and `status` are opaque to the layout engine — they group and
/// color cards but never influence columns, spans, or lanes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique stable identifier.
    pub id: String,
    pub title: String,
    /// Parent project or demand code, shown as a card prefix. May be empty.
    #[serde(default)]
    pub project_id: String,
    /// Estimated effort in hours.
    #[serde(default)]
    pub hours: f64,
    /// Assigned team member; `None` means unassigned.
    #[serde(default)]
    pub owner_id: Option<String>,
    pub start: Day,
    pub end: Day,
    #[serde(default)]
    pub priority: Option<String>,
    /// Kanban column name this task currently sits in.
    #[serde(default)]
    pub status: String,
    pub created: Day,
    /// Whether the task came from a demand container rather than a project.
    #[serde(default)]
    pub demand: bool,
}

impl Task {
    /// The owner id with a missing owner normalized to the reserved
    /// unassigned sentinel.
    pub fn owner(&self) -> &str {
        self.owner_id.as_deref().unwrap_or(UNASSIGNED_ID)
    }

    /// Inclusive duration in days (single-day task = 1).
    pub fn duration_days(&self) -> i64 {
        self.start.days_between(self.end)
    }

    /// Whether the task's day-inclusive interval intersects `[from, to]`.
    pub fn overlaps(&self, from: Day, to: Day) -> bool {
        self.start <= to && self.end >= from
    }
}
