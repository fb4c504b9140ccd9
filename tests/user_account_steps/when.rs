//! When steps for user account BDD scenarios.

use super::world::{UserAccountWorld, run_async};
use rstest_bdd_macros::when;
use taskery::user::services::{LoginRequest, RegisterUserRequest};

#[when(r#""{username}" registers with email "{email}" and password "{password}""#)]
fn register(world: &mut UserAccountWorld, username: String, email: String, password: String) {
    let request = RegisterUserRequest::new(username, email, password);
    world.last_registration = Some(run_async(world.service.register(request)));
}

#[when(r#""{email}" logs in with password "{password}""#)]
fn login(world: &mut UserAccountWorld, email: String, password: String) {
    let request = LoginRequest::new(email, password);
    world.last_login = Some(run_async(world.service.login(request)));
}
