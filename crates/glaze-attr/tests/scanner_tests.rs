//! Integration tests for the attribute-string scanner and serializer.

use glaze_attr::{AttributeMap, ParseError, ParseErrorKind};

/// Helper to parse a string and return its canonical form.
fn canonical(input: &str) -> Result<String, ParseError> {
    AttributeMap::parse(input).map(|map| map.to_string())
}

#[test]
fn test_canonical_forms() {
    let cases = [
        ("", ""),
        ("a", "a"),
        ("attr", "attr"),
        ("single", "single"),
        ("one two", "one two"),
        ("  attr1  attr2  ", "attr1 attr2"),
        ("attr1='val1'", "attr1='val1'"),
        ("attr1 = val1", "attr1='val1'"),
        ("attr1  =  ' val1 ' ", "attr1=' val1 '"),
        ("attr1=''", "attr1"),
        ("attr1='val\"ue'", "attr1='val\"ue'"),
        ("attr1='val\"ue' attr2", "attr1='val\"ue' attr2"),
        (
            "attr1 attr2='val2' attr3 attr4='val4'",
            "attr1 attr2='val2' attr3 attr4='val4'",
        ),
        ("one='one' two='two'", "one='one' two='two'"),
    ];
    for (input, want) in cases {
        assert_eq!(canonical(input).as_deref(), Ok(want), "input: {input:?}");
    }
}

#[test]
fn test_alphabetic_order_and_boolean_lowercasing() {
    // Keys sort alphabetically, the literal `False` lowercases, and
    // integer values stay bare.
    assert_eq!(
        canonical("zero=0 bool=False one=1 two three=3 four five six").as_deref(),
        Ok("bool=false five four one=1 six three=3 two zero=0")
    );
}

#[test]
fn test_quoted_sub_value_and_surrounding_whitespace() {
    assert_eq!(
        canonical("  this    =   'with \"quoted sub value\"' anotherone ").as_deref(),
        Ok("anotherone this='with \"quoted sub value\"'")
    );
}

#[test]
fn test_double_quote_delimiter_when_value_contains_single_quote() {
    let map = AttributeMap::parse("a1=\"o'connor\"").unwrap();
    assert_eq!(map.attribute("a1"), Some("o'connor"));
    assert_eq!(map.to_string(), "a1=\"o'connor\"");
}

#[test]
fn test_names_are_lowercased() {
    assert_eq!(canonical("ATTR1='Val' HIDDEN").as_deref(), Ok("attr1='Val' hidden"));
}

#[test]
fn test_repeated_name_overwrites_at_first_position() {
    let map = AttributeMap::parse("a=1 b=2 a=3").unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.attribute("a"), Some("3"));
    let names: Vec<&str> = map.iter().map(glaze_attr::Attribute::name).collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn test_unexpected_char() {
    assert_eq!(
        canonical("=18"),
        Err(ParseError::UnexpectedChar {
            position: 0,
            found: '=',
        })
    );
    assert_eq!(
        canonical("one t#o three"),
        Err(ParseError::UnexpectedChar {
            position: 5,
            found: '#',
        })
    );
}

#[test]
fn test_missing_value() {
    assert_eq!(canonical("attr1="), Err(ParseError::MissingValue { position: 6 }));
    assert_eq!(canonical("attr1= "), Err(ParseError::MissingValue { position: 7 }));
}

#[test]
fn test_unterminated_quote() {
    // Both report where the quoted value starts, just past the opening quote.
    assert_eq!(
        canonical("attr1='value"),
        Err(ParseError::UnterminatedQuote { position: 7 })
    );
    assert_eq!(
        canonical("attr1='value attr2"),
        Err(ParseError::UnterminatedQuote { position: 7 })
    );
}

#[test]
fn test_quote_not_separated() {
    // The offset is the first character after the closing quote.
    assert_eq!(
        canonical("attr1='va'lue"),
        Err(ParseError::QuoteNotSeparated { position: 10 })
    );
}

#[test]
fn test_error_kind_and_position_accessors() {
    let err = AttributeMap::parse("attr1='value").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UnterminatedQuote);
    assert_eq!(err.position(), 7);
    assert_eq!(err.kind().to_string(), "UnterminatedQuote");
}

#[test]
fn test_canonicalization_is_idempotent() {
    let inputs = [
        "  this    =   'with \"quoted sub value\"' anotherone ",
        "zero=0 bool=False one=1 two three=3 four five six",
        "a1=\"o'connor\"",
        "attr1 attr2='val2' attr3 attr4='val4'",
    ];
    for input in inputs {
        let first = canonical(input).unwrap();
        let second = canonical(&first).unwrap();
        assert_eq!(first, second, "input: {input:?}");
    }
}
