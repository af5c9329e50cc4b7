//! Parse errors for the attribute-string grammar.
//!
//! Parsing is all-or-nothing: every error here is fatal to the whole parse
//! and no partial container is produced.

use strum_macros::Display;
use thiserror::Error;

/// The failure class of a [`ParseError`], without its payload.
///
/// Handy for diagnostics and coarse matching without destructuring the
/// error itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ParseErrorKind {
    /// A name was expected but the input continued with a character that
    /// can never start a name.
    UnexpectedChar,
    /// A `=` was read but no value followed it.
    MissingValue,
    /// An opening `'` or `"` was never matched before end of input.
    UnterminatedQuote,
    /// A closing quote was immediately followed by something other than
    /// whitespace or end of input.
    QuoteNotSeparated,
}

/// A fatal attribute-string parse failure.
///
/// Every variant carries a 0-based byte offset into the input; see the
/// per-variant docs for which position each one reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Invalid start-of-name character, e.g. `=18` or the `#` in `t#o`.
    #[error("unexpected character {found:?} at position {position}")]
    UnexpectedChar {
        /// Byte offset of the offending character.
        position: usize,
        /// The character found where a name was expected.
        found: char,
    },

    /// A trailing `=` with nothing after it, e.g. `attr1=`.
    #[error("missing value after '=' at position {position}")]
    MissingValue {
        /// Byte offset where a value was expected.
        position: usize,
    },

    /// An opening quote was never closed, e.g. `attr1='value`.
    #[error("missing ending quote for value starting at position {position}")]
    UnterminatedQuote {
        /// Byte offset where the quoted value starts, just past the
        /// opening quote.
        position: usize,
    },

    /// Content directly follows a closing quote, e.g. `attr1='va'lue`.
    /// A quoted value must be separated from the next item by whitespace.
    #[error("quoted value must be followed by whitespace at position {position}")]
    QuoteNotSeparated {
        /// Byte offset of the first character after the closing quote.
        position: usize,
    },
}

impl ParseError {
    /// The failure class of this error.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        match self {
            Self::UnexpectedChar { .. } => ParseErrorKind::UnexpectedChar,
            Self::MissingValue { .. } => ParseErrorKind::MissingValue,
            Self::UnterminatedQuote { .. } => ParseErrorKind::UnterminatedQuote,
            Self::QuoteNotSeparated { .. } => ParseErrorKind::QuoteNotSeparated,
        }
    }

    /// The 0-based byte offset where the problem was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedChar { position, .. }
            | Self::MissingValue { position }
            | Self::UnterminatedQuote { position }
            | Self::QuoteNotSeparated { position } => *position,
        }
    }
}
