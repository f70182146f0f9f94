pub mod kanban;
pub mod workload;

pub use kanban::{KanbanColumn, KanbanLayout, SortKey, layout_kanban, tasks_in_week, week_window};
pub use workload::{MemberRow, PlacedCard, WorkloadLayout, layout_workload};
