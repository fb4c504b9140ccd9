//! When steps for task ownership BDD scenarios.

use super::world::{TaskOwnershipWorld, run_async};
use chrono::{Duration, Utc};
use rstest_bdd_macros::when;
use taskery::task::services::CreateTaskRequest;

#[when(r#""{name}" renames the task to "{title}""#)]
fn rename_task(
    world: &mut TaskOwnershipWorld,
    name: String,
    title: String,
) -> Result<(), eyre::Report> {
    let requester = world.user(&name)?.id();
    let task_id = world.task()?.id();
    let result = run_async(world.service.change_title(task_id, requester, &title));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#""{name}" clears the task title"#)]
fn clear_title(world: &mut TaskOwnershipWorld, name: String) -> Result<(), eyre::Report> {
    let requester = world.user(&name)?.id();
    let task_id = world.task()?.id();
    let result = run_async(world.service.change_title(task_id, requester, ""));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#""{name}" completes the task"#)]
fn complete_task(world: &mut TaskOwnershipWorld, name: String) -> Result<(), eyre::Report> {
    let requester = world.user(&name)?.id();
    let task_id = world.task()?.id();
    let completed = run_async(world.service.complete(task_id, requester))?;
    world.first_completed_at = completed.completed_at();
    world.last_created_task = Some(completed);
    Ok(())
}

#[when(r#""{name}" completes the task again"#)]
fn complete_task_again(world: &mut TaskOwnershipWorld, name: String) -> Result<(), eyre::Report> {
    let requester = world.user(&name)?.id();
    let task_id = world.task()?.id();
    let result = run_async(world.service.complete(task_id, requester));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#""{name}" creates a task titled "{title}" due {hours:i64} hours ago"#)]
fn create_overdue_task(
    world: &mut TaskOwnershipWorld,
    name: String,
    title: String,
    hours: i64,
) -> Result<(), eyre::Report> {
    let owner = world.user(&name)?.id();
    let request =
        CreateTaskRequest::new(title, "", owner).with_deadline(Utc::now() - Duration::hours(hours));
    let result = run_async(world.service.create(request));
    world.last_result = Some(result);
    Ok(())
}
