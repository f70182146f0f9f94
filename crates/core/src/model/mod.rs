pub mod board;
pub mod filter;
pub mod task;
pub mod team;

pub use board::{Board, BoardError, Demand, Phase, Project, WorkPackage};
pub use filter::{TaskFilter, card_options, responsible_options};
pub use task::Task;
pub use team::{MemberOrder, TeamMember, UNASSIGNED_ID, member_name, order_members};
