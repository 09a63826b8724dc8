//! Given steps for parse endpoint BDD scenarios.

use super::world::ParseWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use std::path::Path;

#[given(r#"the project file "{fixture}" is published at "{url}""#)]
fn project_file_published(
    world: &mut ParseWorld,
    fixture: String,
    url: String,
) -> Result<(), eyre::Report> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(&fixture);
    let bytes = std::fs::read(&path).wrap_err_with(|| format!("read fixture {fixture}"))?;
    world
        .fetcher
        .insert(url, bytes)
        .wrap_err("publish fixture in fetcher")?;
    Ok(())
}
