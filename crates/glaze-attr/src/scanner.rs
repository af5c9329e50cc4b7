//! The tokenizing parser for attribute-syntax strings.
//!
//! Recognizes the `name`, `name=value`, and `name='quoted value'` forms,
//! skipping whitespace between items, and produces an ordered,
//! deduplicated pair sequence. A repeated name overwrites the earlier
//! value in place, keeping the position where the name was first seen.

use crate::attributes::Attribute;
use crate::error::ParseError;
use crate::name::is_name_char;

/// Parse a complete attribute-syntax string into an ordered pair list.
///
/// # Errors
///
/// Returns a [`ParseError`] on the first syntax problem; no partial
/// result is produced.
pub fn scan_attributes(input: &str) -> Result<Vec<Attribute>, ParseError> {
    let mut scanner = Scanner::new(input);
    let mut attributes: Vec<Attribute> = Vec::new();

    loop {
        scanner.skip_whitespace();
        if scanner.is_at_end() {
            break;
        }
        let (name, value) = scanner.consume_pair()?;
        // A later occurrence of a name overwrites the earlier value at the
        // name's original position.
        if let Some(existing) = attributes.iter_mut().find(|a| a.name() == name) {
            existing.set_value(value);
        } else {
            attributes.push(Attribute::from_parts(name, value));
        }
    }

    Ok(attributes)
}

/// Cursor over an attribute-syntax string.
///
/// The cursor is a byte offset into the input; its value at the time a
/// problem is detected is what parse errors report.
struct Scanner<'s> {
    input: &'s str,
    pos: usize,
}

impl<'s> Scanner<'s> {
    const fn new(input: &'s str) -> Self {
        Scanner { input, pos: 0 }
    }

    /// The character under the cursor, without consuming it.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advance the cursor past the character under it.
    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    /// Consume one `name`, `name=value`, or `name='value'` item.
    ///
    /// The cursor must be on a non-whitespace character.
    fn consume_pair(&mut self) -> Result<(String, Option<String>), ParseError> {
        let name = self.consume_name()?;

        // A `=` may be surrounded by whitespace. Without one the pair is a
        // boolean attribute and the next item starts wherever we stopped.
        self.skip_whitespace();
        if self.peek() == Some('=') {
            self.bump();
            self.skip_whitespace();
            let value = self.consume_value()?;
            Ok((name, value))
        } else {
            Ok((name, None))
        }
    }

    /// Consume a maximal run of name characters, lowercased.
    fn consume_name(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        match self.peek() {
            Some(c) if is_name_char(c) => {}
            Some(c) => {
                return Err(ParseError::UnexpectedChar {
                    position: self.pos,
                    found: c,
                });
            }
            None => unreachable!("consume_name called at end of input"),
        }
        while self.peek().is_some_and(is_name_char) {
            self.bump();
        }
        Ok(self.input[start..self.pos].to_lowercase())
    }

    /// Consume the value following a `=`, quoted or unquoted.
    ///
    /// An empty value (`''`, `""`) collapses to no value, so `name=''`
    /// round-trips as the bare-name form.
    fn consume_value(&mut self) -> Result<Option<String>, ParseError> {
        match self.peek() {
            None => Err(ParseError::MissingValue { position: self.pos }),
            Some(quote @ ('\'' | '"')) => {
                self.bump();
                let start = self.pos;
                while self.peek().is_some_and(|c| c != quote) {
                    self.bump();
                }
                if self.is_at_end() {
                    return Err(ParseError::UnterminatedQuote { position: start });
                }
                let value = &self.input[start..self.pos];
                self.bump();
                // `attr='va'lue` is not a quoted value followed by a new item.
                if let Some(c) = self.peek()
                    && !c.is_whitespace()
                {
                    return Err(ParseError::QuoteNotSeparated { position: self.pos });
                }
                Ok((!value.is_empty()).then(|| value.to_string()))
            }
            Some(_) => {
                let start = self.pos;
                while self.peek().is_some_and(|c| !c.is_whitespace()) {
                    self.bump();
                }
                let value = &self.input[start..self.pos];
                Ok((!value.is_empty()).then(|| value.to_string()))
            }
        }
    }
}
