//! Draft document (minuta) rendering from the office template.
//!
//! The template is a `minijinja` source string stored in the office
//! settings. It sees the case record as `case`, the effective deadline as
//! `deadline` with `deadline_inferred`, and the current day as `today`.
//! Rendered drafts are stored as tasks tagged `draft`, which keeps them out
//! of every workload count.

use chrono::NaiveDate;
use mockable::Clock;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::calendar::format_date;
use crate::case::{deadline::effective_deadline, domain::Case};
use crate::task::domain::{DRAFT_STATUS, Task};

/// Errors raised while rendering a minuta.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MinutaError {
    /// The office has not configured a template.
    #[error("minuta template is empty")]
    EmptyTemplate,

    /// The template failed to compile or render.
    #[error("failed to render minuta for case {case_id}: {reason}")]
    Render {
        /// Case being rendered.
        case_id: String,
        /// Rendering failure reason.
        reason: String,
    },
}

/// Renders `template` for `case` as of `today`.
///
/// # Errors
///
/// Returns [`MinutaError::EmptyTemplate`] for a blank template and
/// [`MinutaError::Render`] when `minijinja` rejects it.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use jurisdash::{case::domain::Case, minuta::render_minuta};
///
/// let case = Case {
///     case_number: "0001234-55.2024.8.26.0100".to_owned(),
///     deadline_hint: Some("prazo em 05/08/24".to_owned()),
///     ..Case::default()
/// };
/// let today = NaiveDate::from_ymd_opt(2024, 8, 1).expect("valid date");
/// let text = render_minuta("{{ case.case_number }} vence {{ deadline }}", &case, today)
///     .expect("template renders");
/// assert_eq!(text, "0001234-55.2024.8.26.0100 vence 2024-08-05");
/// ```
pub fn render_minuta(template: &str, case: &Case, today: NaiveDate) -> Result<String, MinutaError> {
    if template.trim().is_empty() {
        return Err(MinutaError::EmptyTemplate);
    }
    let context = build_context(case, today)?;
    minijinja::Environment::new()
        .render_str(template, context)
        .map_err(|error| MinutaError::Render {
            case_id: case.id.clone(),
            reason: error.to_string(),
        })
}

fn build_context(case: &Case, today: NaiveDate) -> Result<Map<String, Value>, MinutaError> {
    let deadline = effective_deadline(case);
    let record = serde_json::to_value(case).map_err(|error| MinutaError::Render {
        case_id: case.id.clone(),
        reason: error.to_string(),
    })?;

    let mut context = Map::new();
    context.insert("case".to_owned(), record);
    context.insert("deadline".to_owned(), Value::String(deadline.date));
    context.insert("deadline_inferred".to_owned(), Value::Bool(deadline.inferred));
    context.insert("today".to_owned(), Value::String(format_date(today)));
    Ok(context)
}

/// Renders a minuta and wraps it in a draft task authored by `author_id`.
///
/// # Errors
///
/// Propagates [`render_minuta`] failures.
pub fn draft_task(
    case: &Case,
    author_id: &str,
    template: &str,
    clock: &impl Clock,
) -> Result<Task, MinutaError> {
    let now = clock.utc();
    let report = render_minuta(template, case, clock.local().date_naive())?;
    debug!(case_id = %case.id, author_id, "rendered minuta draft");
    Ok(Task {
        id: Uuid::new_v4().to_string(),
        case_id: case.id.clone(),
        author_id: author_id.to_owned(),
        status: DRAFT_STATUS.to_owned(),
        report,
        created_at: Some(now),
        updated_at: Some(now),
        ..Task::default()
    })
}

#[cfg(test)]
mod tests {
    use super::{MinutaError, draft_task, render_minuta};
    use crate::case::domain::Case;
    use crate::task::domain::TaskStatus;
    use chrono::NaiveDate;
    use mockable::DefaultClock;
    use rstest::{fixture, rstest};

    #[fixture]
    fn case() -> Case {
        Case {
            id: "c-1".to_owned(),
            case_number: "5008877-10.2023.4.03.6100".to_owned(),
            party_name: "Maria Souza".to_owned(),
            deadline: Some("2024-09-10T00:00:00Z".to_owned()),
            ..Case::default()
        }
    }

    #[fixture]
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 1).expect("valid date")
    }

    #[rstest]
    fn template_sees_case_deadline_and_today(case: Case, today: NaiveDate) {
        let template = "{{ case.party_name }}|{{ deadline }}|{{ deadline_inferred }}|{{ today }}";
        let rendered = render_minuta(template, &case, today).expect("template renders");
        assert_eq!(rendered, "Maria Souza|2024-09-10|false|2024-08-01");
    }

    #[rstest]
    #[case("")]
    #[case("  \n ")]
    fn blank_templates_are_rejected(case: Case, today: NaiveDate, #[case] template: &str) {
        assert_eq!(
            render_minuta(template, &case, today),
            Err(MinutaError::EmptyTemplate)
        );
    }

    #[rstest]
    fn syntax_errors_name_the_case(case: Case, today: NaiveDate) {
        let result = render_minuta("{{ case.party_name ", &case, today);
        assert!(matches!(result, Err(MinutaError::Render { case_id, .. }) if case_id == "c-1"));
    }

    #[rstest]
    fn drafts_are_stored_as_draft_tasks(case: Case) {
        let task = draft_task(&case, "ana", "Minuta para {{ case.case_number }}", &DefaultClock)
            .expect("draft renders");
        assert_eq!(task.classify(), TaskStatus::Draft);
        assert_eq!(task.case_id, "c-1");
        assert_eq!(task.author_id, "ana");
        assert_eq!(task.report, "Minuta para 5008877-10.2023.4.03.6100");
        assert!(task.created_at.is_some());
    }
}
