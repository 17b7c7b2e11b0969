//! Domain model for ingestion runs.

mod run;

pub use run::{FAILURE_STATUSES, PipelineRun, RunPayload, SUCCESS_STATUS};
