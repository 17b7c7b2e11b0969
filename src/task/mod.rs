//! Task records and completion status.
//!
//! Tasks are units of work logged against a case. The module follows
//! hexagonal architecture:
//!
//! - Domain types and the status classifier in [`domain`]
//! - Raw-row normalisation in [`adapters`]
//!
//! Tasks tagged `draft` hold generated documents rather than actionable
//! work; [`domain::TaskStatus`] keeps them out of every open, overdue and
//! completed count.

pub mod adapters;
pub mod domain;

#[cfg(test)]
mod tests;
