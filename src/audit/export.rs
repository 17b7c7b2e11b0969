//! CSV export of audit entries.

use std::io;
use std::string::FromUtf8Error;

use csv::{Terminator, WriterBuilder};
use thiserror::Error;

use crate::audit::domain::AuditLogEntry;

/// Header row of [`export_csv`].
pub const CSV_HEADER: &str = "created_at,actor,action,resource,target_id";

/// Errors raised while rendering an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A record could not be written.
    #[error("failed to write CSV record: {0}")]
    Record(#[from] csv::Error),
    /// The buffered output could not be flushed.
    #[error("failed to flush CSV output: {0}")]
    Flush(#[from] io::Error),
    /// The rendered output was not valid UTF-8.
    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

/// Renders entries as CSV text with a header row and `\n` line endings.
///
/// Fields containing commas, quotes or line breaks are quoted, with inner
/// quotes doubled.
///
/// # Errors
///
/// Returns [`ExportError`] when the writer fails. Writing to memory does
/// not fail in practice.
pub fn export_csv(entries: &[AuditLogEntry]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER.split(','))?;
    for entry in entries {
        let created = entry
            .created_at
            .map(|created| created.to_rfc3339())
            .unwrap_or_default();
        writer.write_record([
            created.as_str(),
            entry.actor_name.as_str(),
            entry.action.as_str(),
            entry.resource.as_str(),
            entry.target_id.as_str(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(csv::IntoInnerError::into_error)?;
    Ok(String::from_utf8(bytes)?)
}
