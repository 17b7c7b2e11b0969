//! Then steps for KPI aggregation BDD scenarios.

use rstest_bdd_macros::then;

use super::world::KpiWorld;

#[then("{count:usize} case is overdue")]
fn cases_overdue(world: &KpiWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.dashboard()?.deadlines.overdue;
    eyre::ensure!(actual == count, "expected {count} overdue, found {actual}");
    Ok(())
}

#[then("{count:usize} case is due today")]
fn cases_due_today(world: &KpiWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.dashboard()?.deadlines.due_today;
    eyre::ensure!(actual == count, "expected {count} due today, found {actual}");
    Ok(())
}

#[then("{count:usize} case is due within the window")]
fn cases_due_within_window(world: &KpiWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.dashboard()?.deadlines.due_within_window;
    eyre::ensure!(
        actual == count,
        "expected {count} due within the window, found {actual}"
    );
    Ok(())
}

#[then(r#"the first upcoming deadline is "{date}""#)]
fn first_upcoming(world: &KpiWorld, date: String) -> Result<(), eyre::Report> {
    let first = world
        .dashboard()?
        .upcoming
        .first()
        .ok_or_else(|| eyre::eyre!("no upcoming deadlines"))?;
    eyre::ensure!(first.date == date, "expected {date}, found {}", first.date);
    eyre::ensure!(first.inferred, "expected an inferred deadline");
    Ok(())
}

#[then("the average completion time is {hours:u32} hours")]
fn average_completion(world: &KpiWorld, hours: u32) -> Result<(), eyre::Report> {
    let actual = world.dashboard()?.productivity.avg_completion_hours;
    eyre::ensure!(
        actual == f64::from(hours),
        "expected {hours} hours, found {actual}"
    );
    Ok(())
}

#[then(r#""{author}" has {count:usize} open tasks"#)]
fn open_tasks(world: &KpiWorld, author: String, count: usize) -> Result<(), eyre::Report> {
    let actual = world
        .dashboard()?
        .productivity
        .open_by_user
        .get(&author)
        .copied()
        .unwrap_or_default();
    eyre::ensure!(actual == count, "expected {count} open tasks, found {actual}");
    Ok(())
}

#[then("{count:usize} task was completed this week")]
fn completed_this_week(world: &KpiWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.dashboard()?.productivity.completed_this_week;
    eyre::ensure!(actual == count, "expected {count} completed, found {actual}");
    Ok(())
}

#[then("{count:usize} run succeeded today")]
fn runs_succeeded(world: &KpiWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.dashboard()?.pipeline.success_count;
    eyre::ensure!(actual == count, "expected {count} successes, found {actual}");
    Ok(())
}

#[then("{count:usize} run failed today")]
fn runs_failed(world: &KpiWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.dashboard()?.pipeline.failure_count;
    eyre::ensure!(actual == count, "expected {count} failures, found {actual}");
    Ok(())
}
