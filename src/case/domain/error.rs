//! Error types for case status parsing.

use thiserror::Error;

/// Error returned while parsing a manual review status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown manual status: {0}")]
pub struct ParseManualStatusError(pub String);

/// Error returned while parsing an approval status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown approval status: {0}")]
pub struct ParseApprovalStatusError(pub String);
