//! Attribute-string parsing and canonicalization engine for Glaze.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizing parser** for HTML-attribute-like text
//!   (`name`, `name=value`, `name='quoted value'`), reporting syntax
//!   errors with exact byte offsets
//! - **[`AttributeMap`]**: unique `name → optional value` pairs with
//!   merge, toggle, boolean and numeric accessors, and canonical
//!   (alphabetically ordered) serialization
//! - **[`TokenSet`]**: an ordered set of unique bare tokens for
//!   class-list-like attributes, serialized in insertion order
//!
//! The core is pure: it never touches any live document object. The
//! `glaze-dom` crate binds these containers to an external attribute
//! sink.

/// Attribute pairs and the map container.
pub mod attributes;
/// Parse errors with byte offsets.
pub mod error;
/// Name normalization rules shared by parser and containers.
pub mod name;
/// The tokenizing parser over attribute-syntax strings.
pub mod scanner;
/// Ordered set of unique bare tokens.
pub mod tokens;

pub use attributes::{Attribute, AttributeMap};
pub use error::{ParseError, ParseErrorKind};
pub use scanner::scan_attributes;
pub use tokens::TokenSet;
