//! Attribute pairs and the [`AttributeMap`] container.
//!
//! An [`AttributeMap`] holds unique `name → optional value` pairs, the
//! way an element holds its attribute list. It is built from attribute
//! syntax by [`AttributeMap::parse`], mutated through never-failing
//! programmatic calls, and serialized back to a canonical string by its
//! [`fmt::Display`] impl.
//!
//! <https://developer.mozilla.org/en-US/docs/Web/API/Element/attributes>

use core::fmt;

use serde::Serialize;

use crate::error::ParseError;
use crate::name::normalize_name;
use crate::scanner::scan_attributes;

/// One of an element's attributes: a normalized name and an optional
/// value.
///
/// A pair with no value is a boolean attribute, signifying presence as
/// truthy.
///
/// <https://developer.mozilla.org/en-US/docs/Web/API/Attr>
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// The normalized (lowercase) attribute name.
    name: String,
    /// The attribute value, absent for boolean attributes.
    value: Option<String>,
}

impl Attribute {
    pub(crate) const fn from_parts(name: String, value: Option<String>) -> Self {
        Attribute { name, value }
    }

    /// The normalized attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute value, `None` for boolean attributes.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub(crate) fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Whether this attribute reads as true.
    ///
    /// False only when the value, compared case-insensitively, is exactly
    /// `false` or `0`. A boolean attribute is true by presence.
    #[must_use]
    pub fn is_true(&self) -> bool {
        match &self.value {
            Some(value) => !(value.eq_ignore_ascii_case("false") || value == "0"),
            None => true,
        }
    }

    /// Whether the value serializes without quote delimiters.
    ///
    /// Integers and the boolean literal stay bare (`tabindex=2`,
    /// `bool=false`); any other text is quoted.
    fn value_is_bare(value: &str) -> bool {
        value.parse::<i64>().is_ok() || value.eq_ignore_ascii_case("false")
    }
}

/// Canonical form of a single pair.
///
/// A missing value emits the name alone. A present value picks its
/// delimiter with a fixed heuristic: `'` by default, `"` when the
/// value contains a `'`. A value containing both quote characters is not
/// representable (no escaping is performed); it serializes with an
/// embedded delimiter and will not re-parse. The literal `false` is
/// lowercased and, like integer values, emitted bare.
impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        let Some(value) = &self.value else {
            return Ok(());
        };
        if value.eq_ignore_ascii_case("false") {
            write!(f, "=false")
        } else if Self::value_is_bare(value) {
            write!(f, "={value}")
        } else {
            let delim = if value.contains('\'') { '"' } else { '\'' };
            write!(f, "={delim}{value}{delim}")
        }
    }
}

/// An ordered collection of unique `name → optional value` pairs.
///
/// Names are unique under case-insensitive identity; insertion keeps the
/// first-seen position and a repeated name updates in place. The
/// [`fmt::Display`] impl serializes pairs in alphabetic name order, so
/// serialization order is independent of insertion order.
///
/// Mutation never fails: a name that does not survive normalization is
/// silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    attributes: Vec<Attribute>,
}

impl AttributeMap {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        AttributeMap {
            attributes: Vec::new(),
        }
    }

    /// Parse an attribute-syntax string into a new map.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on the first syntax problem; no map is
    /// produced.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Ok(AttributeMap {
            attributes: scan_attributes(text)?,
        })
    }

    /// Replace this map's contents with the parse of `text`.
    ///
    /// All-or-nothing: on error the map keeps its prior contents.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on the first syntax problem.
    pub fn reparse(&mut self, text: &str) -> Result<(), ParseError> {
        self.attributes = scan_attributes(text)?;
        Ok(())
    }

    /// Number of pairs in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the map holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Case-insensitive lookup of a whole pair.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        let name = normalize_name(name)?;
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Case-insensitive lookup of an attribute's value.
    ///
    /// Returns `None` when the name is absent; a present boolean
    /// attribute yields the empty string.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(|a| a.value().unwrap_or(""))
    }

    /// Whether the map holds a pair with this name.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Insert or update a pair. An empty value stores as no value, so the
    /// pair serializes in bare-name form.
    ///
    /// Returns the map to support chaining.
    pub fn set(&mut self, name: &str, value: &str) -> &mut Self {
        let Some(name) = normalize_name(name) else {
            return self;
        };
        let value = (!value.is_empty()).then(|| value.to_string());
        if let Some(existing) = self.attributes.iter_mut().find(|a| a.name == name) {
            existing.set_value(value);
        } else {
            self.attributes.push(Attribute::from_parts(name, value));
        }
        self
    }

    /// Remove a pair if present.
    ///
    /// Returns the map to support chaining.
    pub fn remove_attribute(&mut self, name: &str) -> &mut Self {
        if let Some(name) = normalize_name(name) {
            self.attributes.retain(|a| a.name != name);
        }
        self
    }

    /// Add the name as a boolean attribute if absent (returning true), or
    /// remove it if present (returning false). Two toggles on an
    /// untouched name restore the original state.
    ///
    /// <https://developer.mozilla.org/en-US/docs/Web/API/Element/toggleAttribute>
    pub fn toggle(&mut self, name: &str) -> bool {
        let Some(name) = normalize_name(name) else {
            return false;
        };
        if self.attributes.iter().any(|a| a.name == name) {
            self.attributes.retain(|a| a.name != name);
            false
        } else {
            self.attributes.push(Attribute::from_parts(name, None));
            true
        }
    }

    /// Remove `old_name` and insert `new_name` as a boolean attribute.
    ///
    /// Returns false, without touching the map, when `old_name` is absent
    /// or `new_name` is unrepresentable.
    pub fn replace(&mut self, old_name: &str, new_name: &str) -> bool {
        let Some(old_name) = normalize_name(old_name) else {
            return false;
        };
        let Some(new_name) = normalize_name(new_name) else {
            return false;
        };
        if !self.attributes.iter().any(|a| a.name == old_name) {
            return false;
        }
        self.attributes.retain(|a| a.name != old_name);
        if !self.attributes.iter().any(|a| a.name == new_name) {
            self.attributes.push(Attribute::from_parts(new_name, None));
        }
        true
    }

    /// Merge `other`'s pairs into this map.
    ///
    /// An absent name is inserted with its value copied as-is; a present
    /// name is overwritten only when `overwrite` is true.
    ///
    /// Returns the map to support chaining.
    pub fn set_attributes(&mut self, other: &AttributeMap, overwrite: bool) -> &mut Self {
        for attribute in &other.attributes {
            match self
                .attributes
                .iter_mut()
                .find(|a| a.name == attribute.name)
            {
                Some(existing) => {
                    if overwrite {
                        existing.set_value(attribute.value.clone());
                    }
                }
                None => self.attributes.push(attribute.clone()),
            }
        }
        self
    }

    /// Whether the named attribute reads as true; false when absent.
    ///
    /// See [`Attribute::is_true`].
    #[must_use]
    pub fn is_true(&self, name: &str) -> bool {
        self.get(name).is_some_and(Attribute::is_true)
    }

    /// Whether the `hidden` attribute reads as true.
    ///
    /// <https://developer.mozilla.org/en-US/docs/Web/HTML/Global_attributes/hidden>
    #[must_use]
    pub fn hidden(&self) -> bool {
        self.is_true("hidden")
    }

    /// The `tabindex` attribute as an integer, 0 when absent or not an
    /// integer.
    ///
    /// <https://developer.mozilla.org/en-US/docs/Web/HTML/Global_attributes/tabindex>
    #[must_use]
    pub fn tab_index(&self) -> i32 {
        self.attribute("tabindex")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Set the `tabindex` attribute.
    ///
    /// Returns the map to support chaining.
    pub fn set_tab_index(&mut self, index: i32) -> &mut Self {
        self.set("tabindex", &index.to_string())
    }

    /// A new map holding only the `data-*` pairs, values unchanged.
    ///
    /// <https://developer.mozilla.org/en-US/docs/Web/HTML/Global_attributes/data-*>
    #[must_use]
    pub fn data(&self) -> AttributeMap {
        AttributeMap {
            attributes: self
                .attributes
                .iter()
                .filter(|a| a.name.starts_with("data-"))
                .cloned()
                .collect(),
        }
    }

    /// All names, in the canonical alphabetic serialization order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.attributes.iter().map(|a| a.name.clone()).collect();
        keys.sort();
        keys
    }

    /// Iterate over the pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }
}

/// Canonical serialization: pairs sorted by name, byte-wise ascending,
/// each rendered per [`Attribute`]'s `Display`, joined by single spaces.
///
/// Re-parsing the canonical form reproduces the same logical pair set,
/// though not necessarily the original input text.
impl fmt::Display for AttributeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sorted: Vec<&Attribute> = self.attributes.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        for (i, attribute) in sorted.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{attribute}")?;
        }
        Ok(())
    }
}
