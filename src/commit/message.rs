//! Checks on a generated commit message.

use std::sync::LazyLock;

use regex_lite::Regex;

/// `type(scope)!: subject` with `type` from the prompt's closed set.
static CONVENTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(feat|fix|chore|docs|refactor|test|style|perf)(\([^)\s]+\))?!?: \S")
        .expect("Invalid regex")
});

/// Whether the first line starts with one of the prefixes the prompt asks for.
pub fn has_conventional_prefix(message: &str) -> bool {
    message
        .lines()
        .next()
        .is_some_and(|line| CONVENTIONAL_RE.is_match(line))
}
