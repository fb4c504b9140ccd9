//! Behaviour tests for user registration and login.

#[path = "user_account_steps/mod.rs"]
mod user_account_steps_defs;

use rstest_bdd_macros::scenario;
use user_account_steps_defs::world::{UserAccountWorld, world};

#[scenario(
    path = "tests/features/user_accounts.feature",
    name = "Registering the same email twice is rejected"
)]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_email_is_rejected(world: UserAccountWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_accounts.feature",
    name = "Logging in with the wrong password is unauthorized"
)]
#[tokio::test(flavor = "multi_thread")]
async fn wrong_password_is_unauthorized(world: UserAccountWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_accounts.feature",
    name = "Logging in with the right password issues a token"
)]
#[tokio::test(flavor = "multi_thread")]
async fn login_issues_token(world: UserAccountWorld) {
    let _ = world;
}
