//! Qualified-name (`prefix:local`) splitting.
//!
//! A trivial string-split utility on top of the name rules; this is not
//! namespace handling, just the `xml:lang` → (`xml`, `lang`) split.

use core::fmt;

/// A possibly-prefixed attribute name such as `xml:lang`.
///
/// Stored normalized (trimmed, lowercased), so the accessors can hand
/// out slices.
///
/// <https://developer.mozilla.org/en-US/docs/Web/API/Attr/name>
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName(String);

impl QualifiedName {
    /// Normalize and wrap a qualified name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        QualifiedName(name.into().trim().to_lowercase())
    }

    /// The namespace prefix, or `None` when the name has no `:`.
    ///
    /// <https://developer.mozilla.org/en-US/docs/Web/API/Attr/prefix>
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.0.split_once(':').map(|(prefix, _)| prefix)
    }

    /// The name stripped of any prefix.
    ///
    /// <https://developer.mozilla.org/en-US/docs/Web/API/Attr/localName>
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.0
            .split_once(':')
            .map_or(self.0.as_str(), |(_, local)| local)
    }

    /// The full normalized name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
