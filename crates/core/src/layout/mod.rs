pub mod lanes;
pub mod span;

pub use lanes::{pack_lanes, pack_lanes_by_owner};
pub use span::project_span;
