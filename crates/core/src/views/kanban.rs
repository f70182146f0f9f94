use std::cmp::Ordering;

use crewboard_protocol::Day;
use serde::{Deserialize, Serialize};

use crate::model::{Task, TeamMember, member_name};

/// Sort key for tasks within a kanban column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Priority,
    Title,
    Responsible,
    StartDate,
    EndDate,
    CreatedAt,
}

/// One status column with its tasks in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KanbanColumn {
    pub name: String,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KanbanLayout {
    pub columns: Vec<KanbanColumn>,
}

/// The Monday–Sunday window the kanban view shows: the week containing the
/// anchor.
pub fn week_window(anchor: Day) -> (Day, Day) {
    let start = anchor.start_of_week();
    (start, start.add_days(6))
}

/// Tasks whose interval touches the anchor's week.
pub fn tasks_in_week(tasks: &[Task], anchor: Day) -> Vec<Task> {
    let (from, to) = week_window(anchor);
    tasks
        .iter()
        .filter(|t| t.overlaps(from, to))
        .cloned()
        .collect()
}

/// Group tasks into the caller's ordered column list by status, sorting
/// each column by `sort`. Tasks whose status matches no configured column
/// are dropped.
pub fn layout_kanban(
    tasks: &[Task],
    column_names: &[String],
    sort: SortKey,
    members: &[TeamMember],
) -> KanbanLayout {
    let columns = column_names
        .iter()
        .map(|name| {
            let mut bucket: Vec<Task> = tasks
                .iter()
                .filter(|t| t.status == *name)
                .cloned()
                .collect();
            bucket.sort_by(|a, b| compare(a, b, sort, members));
            KanbanColumn {
                name: name.clone(),
                tasks: bucket,
            }
        })
        .collect();
    KanbanLayout { columns }
}

fn compare(a: &Task, b: &Task, sort: SortKey, members: &[TeamMember]) -> Ordering {
    let primary = match sort {
        SortKey::Priority => priority_rank(a.priority.as_deref())
            .cmp(&priority_rank(b.priority.as_deref())),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Responsible => owner_display(a, members).cmp(&owner_display(b, members)),
        SortKey::StartDate => a.start.cmp(&b.start),
        SortKey::EndDate => a.end.cmp(&b.end),
        SortKey::CreatedAt => a.created.cmp(&b.created),
    };
    // Deterministic ties: title, then the stable id.
    primary
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.id.cmp(&b.id))
}

fn owner_display(task: &Task, members: &[TeamMember]) -> String {
    member_name(members, task.owner())
        .unwrap_or_default()
        .to_lowercase()
}

/// Lower rank sorts first: urgent, high, medium, low, then unset/unknown.
fn priority_rank(priority: Option<&str>) -> usize {
    match priority {
        Some("urgent") => 0,
        Some("high") => 1,
        Some("medium") => 2,
        Some("low") => 3,
        _ => 4,
    }
}
