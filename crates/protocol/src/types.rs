use serde::{Deserialize, Serialize};

use crate::day::Day;

/// Timeline zoom level: how the visible window is partitioned into columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    /// Five single-day columns, Monday through Friday.
    Day,
    /// Five Monday–Sunday week columns around the anchor's month.
    Week,
    /// Twelve month columns covering the anchor's year.
    Month,
}

/// One header column of the timeline grid, with inclusive day bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateColumn {
    pub start: Day,
    pub end: Day,
    /// Display string for the column header.
    pub label: String,
}

/// The inclusive range of column indices a task occupies once clipped to
/// the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpan {
    pub start_col: usize,
    pub end_col: usize,
}

impl ColumnSpan {
    /// Number of columns covered; at least 1 by construction.
    pub fn count(&self) -> usize {
        self.end_col - self.start_col + 1
    }
}

/// Vertical stacking slot for one task within its owner's row.
///
/// `lane_count` is the same for every task of the same owner in a single
/// layout pass — it is the owner's maximum overlap depth, used for
/// proportional row heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneAssignment {
    pub lane: usize,
    pub lane_count: usize,
}
