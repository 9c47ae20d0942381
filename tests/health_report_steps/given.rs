//! Given steps for health reporting BDD scenarios.

use super::world::HealthWorld;
use chrono::{Duration, Utc};
use pharos::snapshot::domain::{
    MemberSnapshot, ProjectId, ProjectSnapshot, ProjectStatus, TaskId, TaskPriority, TaskSnapshot,
    TaskStatus, UserId,
};
use rstest_bdd_macros::given;

fn base_project(started_days_ago: i64) -> ProjectSnapshot {
    let now = Utc::now();
    let start = now - Duration::days(started_days_ago);
    ProjectSnapshot::new(ProjectId::new(), ProjectStatus::Active, start)
}

#[given("an active project that started {started:i64} day(s) ago and is due in {due:i64} day(s)")]
fn project_due_in_the_future(world: &mut HealthWorld, started: i64, due: i64) {
    let now = Utc::now();
    let project = base_project(started).with_schedule(
        Some(now - Duration::days(started)),
        Some(now + Duration::days(due)),
    );
    world.project = Some(project);
}

#[given("an active project that started {started:i64} day(s) ago and was due {overdue:i64} day(s) ago")]
fn project_already_past_due(world: &mut HealthWorld, started: i64, overdue: i64) {
    let now = Utc::now();
    let project = base_project(started).with_schedule(
        Some(now - Duration::days(started)),
        Some(now - Duration::days(overdue)),
    );
    world.project = Some(project);
}

#[given(r#"the project has a budget of {amount:f64} "{currency}""#)]
fn project_budget(world: &mut HealthWorld, amount: f64, currency: String) -> Result<(), eyre::Report> {
    let project = world
        .project
        .take()
        .ok_or_else(|| eyre::eyre!("no project defined in this scenario"))?;
    world.project = Some(project.with_budget(amount, currency));
    Ok(())
}

#[given("the project has {count:usize} active team member(s)")]
fn project_members(world: &mut HealthWorld, count: usize) -> Result<(), eyre::Report> {
    let project = world
        .project
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no project defined in this scenario"))?;
    world.members = (0..count)
        .map(|_| MemberSnapshot::new(UserId::new(), project.id))
        .collect();
    Ok(())
}

#[given("the project has {count:usize} unassigned overdue task(s)")]
fn project_overdue_tasks(world: &mut HealthWorld, count: usize) -> Result<(), eyre::Report> {
    let project = world
        .project
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no project defined in this scenario"))?;
    let past_due = Utc::now() - Duration::days(2);
    world.tasks.extend((0..count).map(|_| {
        TaskSnapshot::new(
            TaskId::new(),
            project.id,
            TaskStatus::InProgress,
            TaskPriority::Normal,
        )
        .with_schedule(None, Some(past_due))
    }));
    Ok(())
}

#[given("every member has {count:usize} open task(s) assigned")]
fn tasks_for_every_member(world: &mut HealthWorld, count: usize) -> Result<(), eyre::Report> {
    let project_id = world
        .project
        .as_ref()
        .map(|project| project.id)
        .ok_or_else(|| eyre::eyre!("no project defined in this scenario"))?;
    let due = Utc::now() + Duration::days(14);
    let assignments: Vec<TaskSnapshot> = world
        .members
        .iter()
        .flat_map(|member| {
            let assignee = member.user_id;
            (0..count).map(move |_| {
                TaskSnapshot::new(
                    TaskId::new(),
                    project_id,
                    TaskStatus::InProgress,
                    TaskPriority::Normal,
                )
                .with_schedule(None, Some(due))
                .with_assignee(assignee)
            })
        })
        .collect();
    world.tasks.extend(assignments);
    Ok(())
}
