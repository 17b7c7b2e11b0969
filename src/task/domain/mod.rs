//! Domain model for case tasks.

mod status;
mod task;

pub use status::{COMPLETED_STATUSES, DRAFT_STATUS, TaskStatus};
pub use task::Task;
