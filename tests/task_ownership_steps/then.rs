//! Then steps for task ownership BDD scenarios.

use super::world::{TaskOwnershipWorld, run_async};
use rstest_bdd_macros::then;
use taskery::task::{
    domain::{Task, TaskDomainError},
    services::TaskLifecycleError,
};

fn last_result(
    world: &TaskOwnershipWorld,
) -> Result<&Result<Task, TaskLifecycleError>, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))
}

#[then("the operation is denied")]
fn operation_denied(world: &TaskOwnershipWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(result, Err(TaskLifecycleError::AccessDenied { .. })) {
        return Err(eyre::eyre!("expected access denied, got {result:?}"));
    }
    Ok(())
}

#[then("the operation fails with an empty title error")]
fn fails_with_empty_title(world: &TaskOwnershipWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::EmptyTitle))
    ) {
        return Err(eyre::eyre!("expected empty title error, got {result:?}"));
    }
    Ok(())
}

#[then("the operation fails with a deadline error")]
fn fails_with_deadline_error(world: &TaskOwnershipWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::DeadlineBeforeNow))
    ) {
        return Err(eyre::eyre!("expected deadline error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the task title is still "{title}""#)]
fn title_unchanged(world: &TaskOwnershipWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.task()?;
    let stored = run_async(world.service.find_by_id(task.id(), task.owner_id()))?;
    if stored.title().as_str() != title {
        return Err(eyre::eyre!(
            "expected title '{title}', found '{}'",
            stored.title().as_str()
        ));
    }
    Ok(())
}

#[then("the task keeps its first completion time")]
fn keeps_first_completion(world: &TaskOwnershipWorld) -> Result<(), eyre::Report> {
    let first = world
        .first_completed_at
        .ok_or_else(|| eyre::eyre!("first completion did not record a timestamp"))?;
    let second = last_result(world)?
        .as_ref()
        .map_err(|err| eyre::eyre!("second completion failed: {err}"))?;
    if second.completed_at() != Some(first) {
        return Err(eyre::eyre!(
            "completion time moved from {first} to {:?}",
            second.completed_at()
        ));
    }
    Ok(())
}

#[then(r#""{name}" has {count:usize} tasks"#)]
fn owner_task_count(
    world: &TaskOwnershipWorld,
    name: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let owner = world.user(&name)?.id();
    let tasks = run_async(world.service.find_by_owner(owner))?;
    if tasks.len() != count {
        return Err(eyre::eyre!("expected {count} tasks, found {}", tasks.len()));
    }
    Ok(())
}
