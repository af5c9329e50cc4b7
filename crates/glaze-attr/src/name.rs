//! Attribute and token name normalization.
//!
//! Names are case-insensitive identifiers restricted to letters, digits,
//! `-`, `_`, and `:`. The scanner validates the charset while reading
//! input; programmatic APIs funnel through [`normalize_name`] instead and
//! treat an unrepresentable name as a no-op.

/// Returns true if `c` may appear anywhere in a name.
#[must_use]
pub fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | ':')
}

/// Normalize a programmatic name: trim surrounding whitespace, lowercase.
///
/// Returns `None` when the trimmed name is empty or contains a character
/// outside the name charset. Callers in the mutation APIs turn `None`
/// into a silent no-op rather than an error.
#[must_use]
pub fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() || !trimmed.chars().all(is_name_char) {
        return None;
    }
    Some(trimmed.to_lowercase())
}
