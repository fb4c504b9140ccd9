//! Then steps for user account BDD scenarios.

use super::world::UserAccountWorld;
use rstest_bdd_macros::then;
use taskery::user::services::UserAccountError;

#[then("registration fails because the user exists")]
fn registration_conflicts(world: &UserAccountWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_registration
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result"))?;
    if !matches!(result, Err(UserAccountError::UserExists)) {
        return Err(eyre::eyre!("expected user exists error, got {result:?}"));
    }
    Ok(())
}

#[then("login is unauthorized")]
fn login_unauthorized(world: &UserAccountWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_login
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing login result"))?;
    if !matches!(result, Err(UserAccountError::Unauthorized)) {
        return Err(eyre::eyre!("expected unauthorized, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the issued token identifies "{username}""#)]
fn token_identifies(world: &UserAccountWorld, username: String) -> Result<(), eyre::Report> {
    let token = world
        .last_login
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing login result"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("login failed: {err}"))?;
    let expected = world
        .registered
        .get(&username)
        .ok_or_else(|| eyre::eyre!("user '{username}' was not registered"))?;
    let subject = world.tokens.validate(token)?;
    if subject != expected.id() {
        return Err(eyre::eyre!("token subject {subject} does not match {}", expected.id()));
    }
    Ok(())
}
