//! In-memory integration tests for task flows of registered users.

use super::helpers::{Harness, harness, register};
use chrono::{Duration, Utc};
use eyre::ensure;
use rstest::rstest;
use taskery::task::services::{CreateTaskRequest, TaskLifecycleError};
use taskery::user::domain::UserId;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registered_user_manages_own_tasks(harness: Harness) -> eyre::Result<()> {
    let alice = register(&harness, "alice").await?;

    let task = harness
        .tasks
        .create(
            CreateTaskRequest::new("Buy milk", "two litres", alice.id())
                .with_deadline(Utc::now() + Duration::days(1)),
        )
        .await?;
    harness
        .tasks
        .change_title(task.id(), alice.id(), "Buy oat milk")
        .await?;
    harness.tasks.complete(task.id(), alice.id()).await?;

    let tasks = harness.tasks.find_by_owner(alice.id()).await?;
    ensure!(tasks.len() == 1);
    let stored = tasks
        .first()
        .ok_or_else(|| eyre::eyre!("expected one task"))?;
    ensure!(stored.title().as_str() == "Buy oat milk");
    ensure!(stored.is_completed());
    ensure!(stored.has_deadline());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unregistered_owner_cannot_create_tasks(harness: Harness) -> eyre::Result<()> {
    let stranger = UserId::new();

    let result = harness
        .tasks
        .create(CreateTaskRequest::new("Orphan", "", stranger))
        .await;

    ensure!(matches!(
        result,
        Err(TaskLifecycleError::OwnerNotFound(owner)) if owner == stranger
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn users_cannot_touch_each_others_tasks(harness: Harness) -> eyre::Result<()> {
    let alice = register(&harness, "alice").await?;
    let bob = register(&harness, "bob").await?;
    let task = harness
        .tasks
        .create(CreateTaskRequest::new("Private", "", alice.id()))
        .await?;

    let read = harness.tasks.find_by_id(task.id(), bob.id()).await;
    let complete = harness.tasks.complete(task.id(), bob.id()).await;
    let delete = harness.tasks.delete(task.id(), bob.id()).await;

    ensure!(matches!(read, Err(TaskLifecycleError::AccessDenied { .. })));
    ensure!(matches!(complete, Err(TaskLifecycleError::AccessDenied { .. })));
    ensure!(matches!(delete, Err(TaskLifecycleError::AccessDenied { .. })));
    ensure!(harness.tasks.find_by_owner(bob.id()).await?.is_empty());

    let untouched = harness.tasks.find_by_id(task.id(), alice.id()).await?;
    ensure!(!untouched.is_completed());
    Ok(())
}
