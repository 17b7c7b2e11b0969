//! When steps for KPI aggregation BDD scenarios.

use jurisdash::kpi::{Snapshot, compute_dashboard};
use rstest_bdd_macros::when;

use super::world::KpiWorld;

#[when("the dashboard is computed")]
fn compute(world: &mut KpiWorld) {
    let snapshot = Snapshot::new(
        world.cases.clone(),
        world.tasks.clone(),
        world.runs.clone(),
    );
    world.dashboard = Some(compute_dashboard(&snapshot, &world.now, &world.config));
}
