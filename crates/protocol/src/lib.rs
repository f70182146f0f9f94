pub mod day;
pub mod locale;
pub mod types;

pub use day::Day;
pub use locale::Locale;
pub use types::{ColumnSpan, DateColumn, Granularity, LaneAssignment};
