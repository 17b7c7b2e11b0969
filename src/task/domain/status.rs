//! Completion status and due date of a task.
//!
//! Completion is a literal, case-insensitive membership test over the status
//! tags the office has used. Accented and unaccented spellings are listed
//! separately on purpose: no diacritic folding takes place here.

use serde::{Deserialize, Serialize};

use super::Task;
use crate::calendar::normalize_date;

/// Status tags that mark a task as completed, compared after lowercasing.
pub const COMPLETED_STATUSES: &[&str] = &[
    "analisado",
    "analisada",
    "concluido",
    "concluído",
    "concluida",
    "concluída",
    "finalizado",
    "finalizada",
    "feito",
    "feita",
    "done",
    "completed",
    "complete",
];

/// Status tag of generated-document artifacts.
pub const DRAFT_STATUS: &str = "draft";

/// Coarse lifecycle bucket of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Generated document; not actionable.
    Draft,
    /// Actionable and not yet completed.
    Open,
    /// Completed.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Open => "open",
            Self::Completed => "completed",
        }
    }
}

impl Task {
    /// Returns whether the status tag denotes completed work.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        let lowered = self.status.to_lowercase();
        COMPLETED_STATUSES.contains(&lowered.as_str())
    }

    /// Returns whether the task is a generated-document draft.
    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.status.trim().to_lowercase() == DRAFT_STATUS
    }

    /// Returns whether the task is actionable and not completed.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.classify() == TaskStatus::Open
    }

    /// Buckets the task into draft, open or completed.
    #[must_use]
    pub fn classify(&self) -> TaskStatus {
        if self.is_draft() {
            TaskStatus::Draft
        } else if self.is_completed() {
            TaskStatus::Completed
        } else {
            TaskStatus::Open
        }
    }

    /// Returns the normalised due date.
    ///
    /// Reads the limit date, then the generic deadline, then the alternate
    /// deadline, taking the first populated one. Empty when none is set.
    #[must_use]
    pub fn due_date(&self) -> String {
        let first = [&self.limit_date, &self.deadline, &self.alt_deadline]
            .into_iter()
            .flatten()
            .find(|value| !value.trim().is_empty());
        normalize_date(first.map(String::as_str))
    }
}
