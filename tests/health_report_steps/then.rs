//! Then steps for health reporting BDD scenarios.

use super::world::HealthWorld;
use rstest_bdd_macros::then;

#[then("the health score is {expected:u8}")]
fn health_score_is(world: &HealthWorld, expected: u8) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if report.health.score != expected {
        return Err(eyre::eyre!(
            "expected health score {expected}, found {}",
            report.health.score
        ));
    }
    Ok(())
}

#[then(r#"the overall status is "{expected}""#)]
fn overall_status_is(world: &HealthWorld, expected: String) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if report.health.overall_status.as_str() != expected {
        return Err(eyre::eyre!(
            "expected overall status {expected}, found {}",
            report.health.overall_status
        ));
    }
    Ok(())
}

#[then("no risks are raised")]
fn no_risks_are_raised(world: &HealthWorld) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if !report.health.risks.is_empty() {
        return Err(eyre::eyre!(
            "expected no risks, found {} (first: {})",
            report.health.risks.len(),
            report.health.risks[0].title
        ));
    }
    Ok(())
}

#[then("the budget utilization is {expected:u32} percent")]
fn budget_utilization_is(world: &HealthWorld, expected: u32) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if report.budget.budget_utilization != expected {
        return Err(eyre::eyre!(
            "expected budget utilization {expected}, found {}",
            report.budget.budget_utilization
        ));
    }
    Ok(())
}

#[then(r#"the schedule indicator is "{expected}""#)]
fn schedule_indicator_is(world: &HealthWorld, expected: String) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if report.health.indicators.schedule.status.as_str() != expected {
        return Err(eyre::eyre!(
            "expected schedule indicator {expected}, found {}",
            report.health.indicators.schedule.status
        ));
    }
    Ok(())
}

#[then(r#"the team indicator is "{expected}""#)]
fn team_indicator_is(world: &HealthWorld, expected: String) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if report.health.indicators.team.status.as_str() != expected {
        return Err(eyre::eyre!(
            "expected team indicator {expected}, found {}",
            report.health.indicators.team.status
        ));
    }
    Ok(())
}

#[then(r#"a "{severity}" severity risk titled "{title}" is raised"#)]
fn risk_is_raised(
    world: &HealthWorld,
    severity: String,
    title: String,
) -> Result<(), eyre::Report> {
    let report = world.report()?;
    let risk = report
        .health
        .risks
        .iter()
        .find(|risk| risk.title == title)
        .ok_or_else(|| eyre::eyre!("no risk titled {title} was raised"))?;
    let actual = serde_json::to_value(risk.severity)
        .map_err(|err| eyre::eyre!("encode severity: {err}"))?;
    if actual != severity.as_str() {
        return Err(eyre::eyre!(
            "expected severity {severity} for risk {title}, found {actual}"
        ));
    }
    Ok(())
}

#[then("the cost performance index is {expected:f64}")]
fn cost_performance_index_is(world: &HealthWorld, expected: f64) -> Result<(), eyre::Report> {
    let report = world.report()?;
    let actual = report.budget.cost_performance_index;
    if (actual - expected).abs() > f64::EPSILON {
        return Err(eyre::eyre!(
            "expected cost performance index {expected}, found {actual}"
        ));
    }
    Ok(())
}

#[then("the budget variance percentage is {expected:i32}")]
fn variance_percentage_is(world: &HealthWorld, expected: i32) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if report.budget.variance_percentage != expected {
        return Err(eyre::eyre!(
            "expected variance percentage {expected}, found {}",
            report.budget.variance_percentage
        ));
    }
    Ok(())
}

#[then("the aggregate team utilization is {expected:u8} percent")]
fn aggregate_utilization_is(world: &HealthWorld, expected: u8) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if report.team.utilization != expected {
        return Err(eyre::eyre!(
            "expected aggregate utilization {expected}, found {}",
            report.team.utilization
        ));
    }
    Ok(())
}
