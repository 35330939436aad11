use std::sync::LazyLock;

use regex::Regex;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]").expect("slug pattern compiles"));

/// Collapses free-form input into a slug candidate: lowercase ascii alphanumerics only.
pub fn slugify(input: &str) -> String {
    let lowered = input.trim().to_lowercase();

    NON_ALPHANUMERIC.replace_all(&lowered, "").into_owned()
}

/// Lowercased and trimmed, keeping inner spaces and punctuation.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}
