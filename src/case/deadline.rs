//! Deadline inference from authoritative dates and free-text hints.
//!
//! Resolution order:
//!
//! 1. The case's authoritative deadline, normalised.
//! 2. The leftmost `DD/MM/YY[YY]` or `DD-MM-YY[YY]` date in the hint.
//! 3. A relative `<N> dias` phrase in the hint, counted from the latest
//!    movement date or, failing that, the creation date.
//! 4. Nothing.
//!
//! Hints often quote several dates (filing date, hearing date, deadline).
//! The leftmost one wins unconditionally: existing data was reviewed by
//! people against that rule.

use std::sync::OnceLock;

use chrono::{Days, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::calendar::{self, format_date, normalize_date, parse_date};
use crate::case::domain::Case;

pub use crate::calendar::days_to_due;

/// Deadline resolved for a case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveDeadline {
    /// Due date in `YYYY-MM-DD` form, empty when none could be resolved.
    pub date: String,
    /// Whether the date was inferred from the hint rather than stored.
    pub inferred: bool,
}

impl EffectiveDeadline {
    fn stored(date: String) -> Self {
        Self {
            date,
            inferred: false,
        }
    }

    fn inferred(date: String) -> Self {
        Self {
            date,
            inferred: true,
        }
    }

    /// Returns whether no date could be resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.date.is_empty()
    }

    /// Whole days from `today` until this deadline, `None` when empty.
    #[must_use]
    pub fn days_to_due(&self, today: NaiveDate) -> Option<i64> {
        calendar::days_to_due(&self.date, today)
    }
}

fn absolute_date_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(\d{2})[/-](\d{2})[/-](\d{4}|\d{2})").ok())
        .as_ref()
}

fn relative_days_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?i)(\d+)\s*dias").ok())
        .as_ref()
}

/// Resolves the deadline that currently governs `case`.
///
/// # Examples
///
/// ```rust
/// use jurisdash::case::{deadline::effective_deadline, domain::Case};
///
/// let case = Case {
///     deadline_hint: Some("prazo em 05/08/24".to_owned()),
///     ..Case::default()
/// };
/// let deadline = effective_deadline(&case);
/// assert_eq!(deadline.date, "2024-08-05");
/// assert!(deadline.inferred);
/// ```
#[must_use]
pub fn effective_deadline(case: &Case) -> EffectiveDeadline {
    let stored = normalize_date(case.deadline.as_deref());
    if !stored.trim().is_empty() {
        return EffectiveDeadline::stored(stored);
    }

    let Some(hint) = case
        .deadline_hint
        .as_deref()
        .filter(|hint| !hint.trim().is_empty())
    else {
        return EffectiveDeadline::default();
    };

    if let Some(date) = absolute_date_in(hint) {
        return EffectiveDeadline::inferred(date);
    }

    relative_date_in(hint, &case.activity_date())
        .map_or_else(EffectiveDeadline::default, EffectiveDeadline::inferred)
}

/// Extracts the leftmost absolute date in `text` as `YYYY-MM-DD`.
///
/// Two-digit years are read as `20YY`. The parts are reordered lexically
/// without calendar validation.
#[must_use]
pub fn absolute_date_in(text: &str) -> Option<String> {
    let captures = absolute_date_pattern()?.captures(text)?;
    let day = captures.get(1)?.as_str();
    let month = captures.get(2)?.as_str();
    let year = captures.get(3)?.as_str();
    let century = if year.len() == 2 { "20" } else { "" };
    Some(format!("{century}{year}-{month}-{day}"))
}

/// Resolves a relative `<N> dias` phrase in `text` against `base_date`.
///
/// Returns `None` when no phrase is present, the base date is malformed or
/// the addition overflows the calendar.
#[must_use]
pub fn relative_date_in(text: &str, base_date: &str) -> Option<String> {
    let captures = relative_days_pattern()?.captures(text)?;
    let days: u64 = captures.get(1)?.as_str().parse().ok()?;
    let base = parse_date(base_date)?;
    base.checked_add_days(Days::new(days)).map(format_date)
}
