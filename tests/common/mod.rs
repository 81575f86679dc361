//! Shared helpers for integration tests

#![allow(dead_code)]

use dynamic_array_list::DynamicArrayList;
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber; later calls are no-ops.
///
/// Set `RUST_LOG=dynamic_array_list=debug` to see reallocations.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// List of the characters in `items`, in order
pub fn letters(items: &str) -> DynamicArrayList<char> {
    DynamicArrayList::from_elements(items.chars()).expect("fixture fits")
}

/// List of `0..n`
pub fn counting(n: u32) -> DynamicArrayList<u32> {
    DynamicArrayList::from_elements(0..n).expect("fixture fits")
}
