//! Production name discovery.

use std::sync::LazyLock;

use regex::Regex;

static PRODUCTION_DECL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(struct|class) ([a-zA-Z0-9_]+)").unwrap());

/// List the production names declared in a grammar snippet.
///
/// Returns every `struct <name>` / `class <name>` match in source order.
/// Duplicates are preserved; callers that populate a selection control
/// rely on first-occurrence ordering.
#[must_use]
pub fn list_productions(snippet: &str) -> Vec<String> {
    PRODUCTION_DECL_RE
        .captures_iter(snippet)
        .map(|caps| caps[2].to_owned())
        .collect()
}
