//! Domain model for tracked legal cases.
//!
//! A case is an immutable snapshot of one process as read from the store:
//! identity, parties, ownership, review state, deadline sources and the
//! movement history that later feeds staleness and deadline inference.

mod case;
mod error;
mod status;

pub use case::{Case, Movement};
pub use error::{ParseApprovalStatusError, ParseManualStatusError};
pub use status::{ApprovalStatus, ManualStatus};
