//! Given steps for task ownership BDD scenarios.

use super::world::{TaskOwnershipWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskery::{
    task::services::CreateTaskRequest,
    user::{domain::User, ports::UserRepository},
};

#[given(r#"a registered user "{name}""#)]
fn registered_user(world: &mut TaskOwnershipWorld, name: String) -> Result<(), eyre::Report> {
    let user = User::new(&name, &format!("{name}@example.com"), "longenough1")
        .wrap_err("build scenario user")?;
    run_async(world.users.store(&user)).wrap_err("store scenario user")?;
    world.known_users.insert(name, user);
    Ok(())
}

#[given(r#""{name}" owns a task titled "{title}""#)]
fn owns_task(
    world: &mut TaskOwnershipWorld,
    name: String,
    title: String,
) -> Result<(), eyre::Report> {
    let owner = world.user(&name)?.id();
    let request = CreateTaskRequest::new(title, "", owner);
    let created = run_async(world.service.create(request)).wrap_err("create scenario task")?;
    world.last_created_task = Some(created);
    Ok(())
}
