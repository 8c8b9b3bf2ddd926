//! Input normalization applied before trigger comparison.

/// Trim outer whitespace and lowercase. Whitespace-only input becomes "".
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Collapse every interior whitespace run (spaces, tabs, newlines) to a single ASCII space.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
