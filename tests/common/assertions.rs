//! Custom assertion helpers for tests.

use tracing::error;

use ssa::vdf::STORE_TERMINATOR;

#[must_use]
pub fn assert_json_has_fields(value: &serde_json::Value, fields: &[&str]) -> serde_json::Value {
    for field in fields {
        if value.get(field).is_none() {
            error!(field, json = %value, "Missing expected JSON field");
            panic!("Missing JSON field: {field}");
        }
    }
    value.clone()
}

pub fn assert_no_ansi(output: &str) {
    if output.contains("\u{1b}[") {
        error!("ANSI escape sequence detected");
        panic!("Expected no ANSI escape sequences");
    }
}

pub fn assert_contains_all(output: &str, expected: &[&str]) {
    for needle in expected {
        if !output.contains(needle) {
            error!(needle, "Missing expected substring");
            panic!("Missing expected substring: {needle}\nIn:\n{output}");
        }
    }
}

/// A store that still ends with the shortcuts terminator.
pub fn assert_well_terminated(store: &[u8]) {
    assert!(
        store.ends_with(&STORE_TERMINATOR),
        "store does not end with 08 08: tail {:02x?}",
        &store[store.len().saturating_sub(8)..]
    );
}

/// Count occurrences of `needle` in `haystack`.
#[must_use]
pub fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}
