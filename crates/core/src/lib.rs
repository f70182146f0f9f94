//! Layout engine for the crewboard team workload board.
//!
//! Pure computation only: given tasks with owners and day-inclusive date
//! ranges, produce the visible date columns, the column span each task
//! occupies, and non-colliding lane stacks per owner. Rendering, settings,
//! and input plumbing live in the caller.

pub mod calendar;
pub mod layout;
pub mod model;
pub mod views;

pub use calendar::{date_columns, period_heading};
pub use layout::{pack_lanes, pack_lanes_by_owner, project_span};
pub use model::{Board, BoardError, Task, TaskFilter, TeamMember};
pub use views::{KanbanLayout, WorkloadLayout, layout_kanban, layout_workload};
