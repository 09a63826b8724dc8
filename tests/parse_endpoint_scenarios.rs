//! Behaviour tests for the URL parse endpoint.

mod parse_endpoint_steps;

use parse_endpoint_steps::world::{ParseWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/parse_endpoint.feature",
    name = "Parse an MSPDI file referenced by URL"
)]
#[tokio::test(flavor = "multi_thread")]
async fn parse_mspdi_by_url(world: ParseWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/parse_endpoint.feature",
    name = "Parse an MPX file referenced by URL"
)]
#[tokio::test(flavor = "multi_thread")]
async fn parse_mpx_by_url(world: ParseWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/parse_endpoint.feature",
    name = "Reject a request without a URL"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_missing_url(world: ParseWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/parse_endpoint.feature",
    name = "Report an unreachable file as a server error"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unreachable_file_is_server_error(world: ParseWorld) {
    let _ = world;
}
