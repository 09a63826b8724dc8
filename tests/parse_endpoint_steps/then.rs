//! Then steps for parse endpoint BDD scenarios.

use super::world::ParseWorld;
use rstest_bdd_macros::then;
use serde_json::Value;

#[then("the response status is {status:u16}")]
fn response_status(world: &ParseWorld, status: u16) -> Result<(), eyre::Report> {
    let response = world.response()?;
    if response.status != status {
        return Err(eyre::eyre!(
            "expected status {status}, found {}",
            response.status
        ));
    }
    Ok(())
}

#[then("the response lists {count:usize} tasks")]
fn response_lists_tasks(world: &ParseWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks: Vec<Value> = serde_json::from_slice(&world.response()?.body)?;
    if tasks.len() != count {
        return Err(eyre::eyre!("expected {count} tasks, found {}", tasks.len()));
    }
    Ok(())
}

#[then(r#"task {position:usize} is named "{name}""#)]
fn task_is_named(world: &ParseWorld, position: usize, name: String) -> Result<(), eyre::Report> {
    let tasks: Vec<Value> = serde_json::from_slice(&world.response()?.body)?;
    let task = position
        .checked_sub(1)
        .and_then(|index| tasks.get(index))
        .ok_or_else(|| eyre::eyre!("response has no task at position {position}"))?;
    if task.get("name").and_then(Value::as_str) != Some(name.as_str()) {
        return Err(eyre::eyre!("expected task {position} named {name}, found {task}"));
    }
    Ok(())
}

#[then(r#"the response body is "{expected}""#)]
fn response_body_is(world: &ParseWorld, expected: String) -> Result<(), eyre::Report> {
    let body = String::from_utf8(world.response()?.body.clone())?;
    if body != expected {
        return Err(eyre::eyre!("expected body {expected:?}, found {body:?}"));
    }
    Ok(())
}

#[then(r#"the response body starts with "{prefix}""#)]
fn response_body_starts_with(world: &ParseWorld, prefix: String) -> Result<(), eyre::Report> {
    let body = String::from_utf8(world.response()?.body.clone())?;
    if !body.starts_with(&prefix) {
        return Err(eyre::eyre!("expected body starting with {prefix:?}, found {body:?}"));
    }
    Ok(())
}
