//! Containers bound to an attribute sink.
//!
//! Each wrapper owns a core container and a sink, pushing the canonical
//! serialized form under a fixed target attribute name whenever a
//! mutation changes state. Reads go straight through to the container.

use core::fmt;

use glaze_attr::{AttributeMap, ParseError, TokenSet};

use crate::sink::AttributeSink;

/// An [`AttributeMap`] bound to a sink.
///
/// After every state-changing mutation the whole map's canonical form is
/// pushed to the sink under the target name given at construction.
#[derive(Debug)]
pub struct BoundAttributes<S: AttributeSink> {
    target: String,
    map: AttributeMap,
    sink: S,
}

impl<S: AttributeSink> BoundAttributes<S> {
    /// Bind an empty map to `sink`, pushing under `target`.
    #[must_use]
    pub fn new(target: impl Into<String>, sink: S) -> Self {
        BoundAttributes {
            target: target.into(),
            map: AttributeMap::new(),
            sink,
        }
    }

    /// Read access to the underlying map.
    #[must_use]
    pub const fn attributes(&self) -> &AttributeMap {
        &self.map
    }

    /// Unbind, returning the map and the sink.
    #[must_use]
    pub fn into_parts(self) -> (AttributeMap, S) {
        (self.map, self.sink)
    }

    /// Replace the map's contents with the parse of `text` and push.
    ///
    /// All-or-nothing: on error the map keeps its prior contents and
    /// nothing is pushed.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] from the underlying parse.
    pub fn parse(&mut self, text: &str) -> Result<(), ParseError> {
        let before = self.map.to_string();
        self.map.reparse(text)?;
        self.push_if_changed(&before);
        Ok(())
    }

    /// Insert or update a pair and push if that changed anything.
    pub fn set(&mut self, name: &str, value: &str) -> &mut Self {
        let before = self.map.to_string();
        let _ = self.map.set(name, value);
        self.push_if_changed(&before);
        self
    }

    /// Remove a pair and push if it was present.
    pub fn remove_attribute(&mut self, name: &str) -> &mut Self {
        let before = self.map.to_string();
        let _ = self.map.remove_attribute(name);
        self.push_if_changed(&before);
        self
    }

    /// Toggle a boolean attribute and push. Returns true when the name
    /// was added, false when it was removed.
    pub fn toggle(&mut self, name: &str) -> bool {
        let before = self.map.to_string();
        let updated = self.map.toggle(name);
        self.push_if_changed(&before);
        updated
    }

    /// Replace one name with another (as a boolean attribute) and push.
    pub fn replace(&mut self, old_name: &str, new_name: &str) -> bool {
        let before = self.map.to_string();
        let updated = self.map.replace(old_name, new_name);
        self.push_if_changed(&before);
        updated
    }

    /// Merge another map in and push if the merge changed anything.
    pub fn set_attributes(&mut self, other: &AttributeMap, overwrite: bool) -> &mut Self {
        let before = self.map.to_string();
        let _ = self.map.set_attributes(other, overwrite);
        self.push_if_changed(&before);
        self
    }

    /// Push when the canonical form moved away from `before`.
    fn push_if_changed(&mut self, before: &str) {
        let after = self.map.to_string();
        if after != before {
            self.sink.write_attribute(&self.target, &after);
        }
    }
}

impl<S: AttributeSink> fmt::Display for BoundAttributes<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.map.fmt(f)
    }
}

/// A [`TokenSet`] bound to a sink.
///
/// The change flags the core set reports decide whether to push, the way
/// a class list only writes back to its element when membership moved.
#[derive(Debug)]
pub struct BoundTokenList<S: AttributeSink> {
    target: String,
    tokens: TokenSet,
    sink: S,
}

impl<S: AttributeSink> BoundTokenList<S> {
    /// Bind an empty token list to `sink`, pushing under `target`.
    #[must_use]
    pub fn new(target: impl Into<String>, sink: S) -> Self {
        BoundTokenList {
            target: target.into(),
            tokens: TokenSet::new(),
            sink,
        }
    }

    /// Read access to the underlying set.
    #[must_use]
    pub const fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    /// Unbind, returning the set and the sink.
    #[must_use]
    pub fn into_parts(self) -> (TokenSet, S) {
        (self.tokens, self.sink)
    }

    /// Number of tokens in the list.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tokens.count()
    }

    /// The token at `index`, or the empty string when out of range.
    #[must_use]
    pub fn at(&self, index: usize) -> &str {
        self.tokens.at(index)
    }

    /// Whether `token` is in the list.
    #[must_use]
    pub fn has(&self, token: &str) -> bool {
        self.tokens.has(token)
    }

    /// Replace the contents with the tokens of `text`, pushing if that
    /// changed the list.
    pub fn parse(&mut self, text: &str) -> &mut Self {
        if self.tokens.parse(text) {
            self.push();
        }
        self
    }

    /// Add tokens, pushing if any were new.
    pub fn set(&mut self, tokens: &[&str]) -> &mut Self {
        if self.tokens.set(tokens) {
            self.push();
        }
        self
    }

    /// Remove tokens, pushing if any were present.
    pub fn remove(&mut self, tokens: &[&str]) -> &mut Self {
        if self.tokens.remove(tokens) {
            self.push();
        }
        self
    }

    /// Toggle a token and push. Returns true when the token was added,
    /// false when it was removed.
    pub fn toggle(&mut self, token: &str) -> bool {
        let before = self.tokens.count();
        let updated = self.tokens.toggle(token);
        if self.tokens.count() != before {
            self.push();
        }
        updated
    }

    /// Replace one token with another in place, pushing on success.
    pub fn replace(&mut self, old_token: &str, new_token: &str) -> bool {
        let updated = self.tokens.replace(old_token, new_token);
        if updated {
            self.push();
        }
        updated
    }

    fn push(&mut self) {
        let value = self.tokens.to_string();
        self.sink.write_attribute(&self.target, &value);
    }
}

impl<S: AttributeSink> fmt::Display for BoundTokenList<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tokens.fmt(f)
    }
}
