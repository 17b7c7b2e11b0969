//! Given steps for KPI aggregation BDD scenarios.

use chrono::{TimeDelta, Utc};
use jurisdash::case::domain::Case;
use jurisdash::pipeline::domain::PipelineRun;
use jurisdash::task::domain::Task;
use rstest_bdd_macros::given;

use super::world::{KpiWorld, local_noon};

#[given(r#"today is "{date}""#)]
fn today_is(world: &mut KpiWorld, date: String) -> Result<(), eyre::Report> {
    world.now = local_noon(&date)?;
    Ok(())
}

#[given("an alert window of {days:u32} days")]
fn alert_window(world: &mut KpiWorld, days: u32) {
    world.config = world.config.with_alert_window(days);
}

#[given(r#"a case "{id}" due on "{date}""#)]
fn case_due_on(world: &mut KpiWorld, id: String, date: String) {
    world.cases.push(Case {
        id,
        owner_id: Some("ana".to_owned()),
        deadline: Some(date),
        ..Case::default()
    });
}

#[given(r#"a case "{id}" with deadline hint "{hint}""#)]
fn case_with_hint(world: &mut KpiWorld, id: String, hint: String) {
    world.cases.push(Case {
        id,
        owner_id: Some("ana".to_owned()),
        deadline_hint: Some(hint),
        ..Case::default()
    });
}

#[given(r#"a completed task by "{author}" that took {hours:i64} hours"#)]
fn completed_task(world: &mut KpiWorld, author: String, hours: i64) {
    let created = world.now.with_timezone(&Utc) - TimeDelta::days(2);
    world.tasks.push(Task {
        id: format!("done-{}", world.tasks.len()),
        case_id: "c1".to_owned(),
        author_id: author,
        status: "concluído".to_owned(),
        created_at: Some(created),
        updated_at: Some(created + TimeDelta::hours(hours)),
        ..Task::default()
    });
}

#[given(r#"a draft task by "{author}""#)]
fn draft_task(world: &mut KpiWorld, author: String) {
    world.tasks.push(Task {
        id: format!("draft-{}", world.tasks.len()),
        case_id: "c1".to_owned(),
        author_id: author,
        status: "draft".to_owned(),
        limit_date: Some("2000-01-01".to_owned()),
        ..Task::default()
    });
}

#[given(r#"a successful run of "{file}" recorded {times:u32} times today"#)]
fn repeated_successful_run(world: &mut KpiWorld, file: String, times: u32) {
    let now = world.now.with_timezone(&Utc);
    for attempt in 0..times {
        world.runs.push(PipelineRun {
            id: format!("{file}-{attempt}"),
            source_id: Some(file.clone()),
            status: Some("success".to_owned()),
            cases_detected: Some(1),
            duration_ms: Some(1200),
            created_at: Some(now - TimeDelta::minutes(i64::from(attempt))),
            ..PipelineRun::default()
        });
    }
}

#[given(r#"a failed run of "{file}" recorded today"#)]
fn failed_run(world: &mut KpiWorld, file: String) {
    world.runs.push(PipelineRun {
        id: format!("{file}-failed"),
        source_id: Some(file),
        status: Some("failed".to_owned()),
        error: Some("timeout".to_owned()),
        created_at: Some(world.now.with_timezone(&Utc)),
        ..PipelineRun::default()
    });
}
