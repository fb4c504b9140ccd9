//! Given steps for user account BDD scenarios.

use super::world::{UserAccountWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskery::user::services::RegisterUserRequest;

#[given(r#""{username}" registered with email "{email}" and password "{password}""#)]
fn registered_user(
    world: &mut UserAccountWorld,
    username: String,
    email: String,
    password: String,
) -> Result<(), eyre::Report> {
    let request = RegisterUserRequest::new(username.as_str(), email, password);
    let user = run_async(world.service.register(request)).wrap_err("register scenario user")?;
    world.registered.insert(username, user);
    Ok(())
}
