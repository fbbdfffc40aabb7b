/*! Integration tests for seqmap.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the library surface:
 * - paths: Path resolution, auto-vivifying writes, existence, removal
 * - ops: The combinator suite over the ordered iteration contract
 * - sorting: Natural ordering, comparator sorts, multi-field sorts
 * - boundary: The serialization boundary (serde/serde_json)
 * - properties: Algebraic properties checked with proptest
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("seqmap=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod boundary;
mod paths;
mod sorting;
