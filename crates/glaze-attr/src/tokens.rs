//! [`TokenSet`]: an ordered set of unique, space-separated bare tokens.
//!
//! This is the container behind class-list-like attributes. Unlike
//! [`AttributeMap`](crate::AttributeMap), serialization keeps insertion
//! order: relative order of class tokens is sometimes significant to
//! callers, so it is never sorted.
//!
//! <https://developer.mozilla.org/en-US/docs/Web/API/DOMTokenList>

use core::fmt;

use crate::name::normalize_name;

/// An ordered sequence of unique, normalized names with no values.
///
/// Every entry point normalizes its input; a token that does not survive
/// normalization is silently dropped, so no operation here can fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: Vec<String>,
}

impl TokenSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        TokenSet { tokens: Vec::new() }
    }

    /// Build a set from a space-separated token string.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut set = TokenSet::new();
        let _ = set.parse(text);
        set
    }

    /// Replace the contents with the tokens of `text`, in first-seen
    /// order with duplicates dropped. Returns whether the contents
    /// actually changed.
    pub fn parse(&mut self, text: &str) -> bool {
        let mut tokens: Vec<String> = Vec::new();
        for token in text.split_whitespace().filter_map(normalize_name) {
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        let changed = tokens != self.tokens;
        self.tokens = tokens;
        changed
    }

    /// Number of tokens in the set.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the set holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token at `index`, or the empty string when out of range.
    #[must_use]
    pub fn at(&self, index: usize) -> &str {
        self.tokens.get(index).map_or("", String::as_str)
    }

    /// Whether `token` is in the set.
    #[must_use]
    pub fn has(&self, token: &str) -> bool {
        normalize_name(token).is_some_and(|t| self.tokens.contains(&t))
    }

    /// Add each token not already present, keeping order of addition.
    /// Returns whether anything changed.
    pub fn set(&mut self, tokens: &[&str]) -> bool {
        let mut changed = false;
        for token in tokens.iter().copied().filter_map(normalize_name) {
            if !self.tokens.contains(&token) {
                self.tokens.push(token);
                changed = true;
            }
        }
        changed
    }

    /// Drop each token that is present. Returns whether anything changed.
    pub fn remove(&mut self, tokens: &[&str]) -> bool {
        let targets: Vec<String> = tokens.iter().copied().filter_map(normalize_name).collect();
        let before = self.tokens.len();
        self.tokens.retain(|t| !targets.contains(t));
        self.tokens.len() != before
    }

    /// Add the token if absent (returning true), or remove it if present
    /// (returning false).
    ///
    /// <https://developer.mozilla.org/en-US/docs/Web/API/DOMTokenList/toggle>
    pub fn toggle(&mut self, token: &str) -> bool {
        let Some(token) = normalize_name(token) else {
            return false;
        };
        if let Some(index) = self.tokens.iter().position(|t| *t == token) {
            let _ = self.tokens.remove(index);
            false
        } else {
            self.tokens.push(token);
            true
        }
    }

    /// Replace `old_token` with `new_token` at its current position.
    ///
    /// Returns false, without touching the set, when `old_token` is
    /// absent or `new_token` is unrepresentable. When `new_token` is
    /// already present elsewhere, `old_token` is only removed.
    ///
    /// <https://developer.mozilla.org/en-US/docs/Web/API/DOMTokenList/replace>
    pub fn replace(&mut self, old_token: &str, new_token: &str) -> bool {
        let Some(old_token) = normalize_name(old_token) else {
            return false;
        };
        let Some(new_token) = normalize_name(new_token) else {
            return false;
        };
        let Some(index) = self.tokens.iter().position(|t| *t == old_token) else {
            return false;
        };
        if new_token == old_token {
            return true;
        }
        if self.tokens.contains(&new_token) {
            let _ = self.tokens.remove(index);
        } else {
            self.tokens[index] = new_token;
        }
        true
    }

    /// Iterate over the tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

/// Tokens joined by single spaces, in insertion order.
impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}
