//! When steps for health reporting BDD scenarios.

use super::world::{HealthWorld, run_async};
use eyre::WrapErr;
use pharos::snapshot::domain::ProjectData;
use rstest_bdd_macros::when;

#[when("the health report is generated")]
fn generate_health_report(world: &mut HealthWorld) -> Result<(), eyre::Report> {
    let project = world
        .project
        .clone()
        .ok_or_else(|| eyre::eyre!("no project defined in this scenario"))?;
    let project_id = project.id;
    let data = ProjectData::new(project)
        .with_tasks(world.tasks.clone())
        .with_milestones(world.milestones.clone())
        .with_members(world.members.clone());
    world
        .provider
        .insert(data)
        .wrap_err("store snapshot aggregate for scenario")?;

    let report = run_async(world.service.report(project_id))
        .wrap_err("generate health report for scenario")?;
    world.last_report = Some(report);
    Ok(())
}
