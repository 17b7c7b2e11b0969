//! Unit tests for productivity aggregation.

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use rstest::{fixture, rstest};

use crate::case::domain::Case;
use crate::kpi::productivity::productivity_kpis;
use crate::task::domain::Task;

#[fixture]
fn now() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 8, 5, 12, 0, 0)
        .single()
        .expect("unambiguous local noon")
}

fn task(id: &str, case_id: &str, author: &str, status: &str) -> Task {
    Task {
        id: id.to_owned(),
        case_id: case_id.to_owned(),
        author_id: author.to_owned(),
        status: status.to_owned(),
        ..Task::default()
    }
}

fn case(id: &str, label: &str) -> Case {
    Case {
        id: id.to_owned(),
        risk_label: Some(label.to_owned()),
        ..Case::default()
    }
}

#[rstest]
fn groups_open_and_overdue_work_by_author(now: DateTime<Local>) {
    let created = now.with_timezone(&Utc) - TimeDelta::days(3);
    let tasks = vec![
        Task {
            created_at: Some(created),
            updated_at: Some(created + TimeDelta::hours(26)),
            ..task("t1", "c3", "ana", "Concluído")
        },
        task("t2", "c3", "ana", "draft"),
        Task {
            limit_date: Some("2024-08-01".to_owned()),
            ..task("t3", "c2", "bruno", "pendente")
        },
        task("t4", "c1", "ana", "em andamento"),
    ];
    let cases = vec![case("c1", "Alto"), case("c2", "alto"), case("c3", "alto"), case("c4", "médio")];

    let kpis = productivity_kpis(&cases, &tasks, &now, 7);

    assert_eq!(
        kpis.open_by_user.into_iter().collect::<Vec<_>>(),
        vec![("ana".to_owned(), 1), ("bruno".to_owned(), 1)]
    );
    assert_eq!(
        kpis.overdue_by_user.into_iter().collect::<Vec<_>>(),
        vec![("bruno".to_owned(), 1)]
    );
    assert_eq!(kpis.completed_this_week, 1);
    assert_eq!(kpis.avg_completion_hours, 26.0);
    assert_eq!(kpis.high_risk_no_open_task, vec!["c3".to_owned()]);
}

#[rstest]
fn draft_tasks_are_neither_open_nor_completed(now: DateTime<Local>) {
    let draft = Task {
        limit_date: Some("2024-01-01".to_owned()),
        ..task("t1", "c1", "ana", " Draft ")
    };
    let kpis = productivity_kpis(&[case("c1", "alto")], &[draft], &now, 7);
    assert!(kpis.open_by_user.is_empty());
    assert!(kpis.overdue_by_user.is_empty());
    assert_eq!(kpis.completed_this_week, 0);
    assert_eq!(kpis.high_risk_no_open_task, vec!["c1".to_owned()]);
}

#[rstest]
fn completions_outside_the_window_and_non_positive_spans_are_ignored(now: DateTime<Local>) {
    let created = now.with_timezone(&Utc) - TimeDelta::days(20);
    let tasks = vec![
        Task {
            created_at: Some(created),
            updated_at: Some(created + TimeDelta::hours(10)),
            ..task("old", "c1", "ana", "done")
        },
        Task {
            created_at: Some(created),
            updated_at: Some(created),
            ..task("instant", "c1", "ana", "feito")
        },
    ];

    let kpis = productivity_kpis(&[], &tasks, &now, 7);

    assert_eq!(kpis.completed_this_week, 0);
    assert_eq!(kpis.avg_completion_hours, 10.0);
}

#[rstest]
fn accented_spellings_outside_the_list_stay_open(now: DateTime<Local>) {
    let kpis = productivity_kpis(&[], &[task("t1", "c1", "ana", "analisádo")], &now, 7);
    assert_eq!(kpis.open_by_user.get("ana"), Some(&1));
}
