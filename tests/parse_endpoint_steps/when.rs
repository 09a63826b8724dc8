//! When steps for parse endpoint BDD scenarios.

use super::world::ParseWorld;
use rstest_bdd_macros::when;

#[when(r#"a client posts "{url}" to the parse endpoint"#)]
fn client_posts_url(world: &mut ParseWorld, url: String) -> Result<(), eyre::Report> {
    world.post_parse(url)
}

#[when("a client posts an empty body to the parse endpoint")]
fn client_posts_empty_body(world: &mut ParseWorld) -> Result<(), eyre::Report> {
    world.post_parse(String::new())
}
