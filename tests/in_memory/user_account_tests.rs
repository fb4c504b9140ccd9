//! In-memory integration tests for user account flows.

use super::helpers::{Harness, PASSWORD, harness, register};
use eyre::ensure;
use rstest::rstest;
use taskery::error_kind::ErrorKindMatch;
use taskery::task::services::CreateTaskRequest;
use taskery::user::services::{LoginRequest, UserAccountError, UserAccountErrorKind};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_token_identifies_registered_user(harness: Harness) -> eyre::Result<()> {
    let alice = register(&harness, "alice").await?;

    let token = harness
        .users
        .login(LoginRequest::new("alice@example.com", PASSWORD))
        .await?;

    ensure!(harness.tokens.validate(&token)? == alice.id());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn email_lookup_ignores_surrounding_whitespace(harness: Harness) -> eyre::Result<()> {
    register(&harness, "alice").await?;

    let token = harness
        .users
        .login(LoginRequest::new("  alice@example.com ", PASSWORD))
        .await?;

    ensure!(!token.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_login_email_reports_unknown_user(harness: Harness) -> eyre::Result<()> {
    let result = harness
        .users
        .login(LoginRequest::new("not-an-email", PASSWORD))
        .await;

    let Err(err) = result else {
        eyre::bail!("login with malformed email should fail");
    };
    ensure!(err.kind() == UserAccountErrorKind::NotFound);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn credential_errors_are_distinguishable(harness: Harness) -> eyre::Result<()> {
    let alice = register(&harness, "alice").await?;
    register(&harness, "bob").await?;

    let wrong_password = harness
        .users
        .change_username(alice.id(), "alicia", "not-the-password")
        .await;
    let taken_email = harness
        .users
        .change_email(alice.id(), "bob@example.com", PASSWORD)
        .await;

    ensure!(matches!(wrong_password, Err(UserAccountError::Unauthorized)));
    let Err(taken) = taken_email else {
        eyre::bail!("taking another user's email should fail");
    };
    ensure!(taken.is_any(&[
        UserAccountErrorKind::EmailAlreadyTaken,
        UserAccountErrorKind::UserExists
    ]));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_user_can_no_longer_log_in(harness: Harness) -> eyre::Result<()> {
    let alice = register(&harness, "alice").await?;

    harness.users.delete(alice.id(), PASSWORD).await?;
    let result = harness
        .users
        .login(LoginRequest::new("alice@example.com", PASSWORD))
        .await;

    ensure!(matches!(result, Err(UserAccountError::NotFound)));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_user_keeps_their_in_memory_tasks(harness: Harness) -> eyre::Result<()> {
    let alice = register(&harness, "alice").await?;
    harness
        .tasks
        .create(CreateTaskRequest::new("Orphaned", "", alice.id()))
        .await?;

    harness.users.delete(alice.id(), PASSWORD).await?;

    let remaining = harness.tasks.find_by_owner(alice.id()).await?;
    ensure!(remaining.len() == 1);
    Ok(())
}
