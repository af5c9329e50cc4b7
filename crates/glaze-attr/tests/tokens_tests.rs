//! Integration tests for the `TokenSet` container.

use glaze_attr::TokenSet;

#[test]
fn test_parse_dedupes_and_normalizes() {
    let set = TokenSet::from_text("  Btn  btn active  ");
    assert_eq!(set.count(), 2);
    assert_eq!(set.to_string(), "btn active");
}

#[test]
fn test_parse_reports_change() {
    let mut set = TokenSet::from_text("a b");
    assert!(!set.parse("  a   b "));
    assert!(set.parse("a c"));
    assert_eq!(set.to_string(), "a c");
}

#[test]
fn test_serialization_keeps_insertion_order() {
    // Unlike AttributeMap, a token list is never sorted.
    let mut set = TokenSet::from_text("zebra alpha");
    assert_eq!(set.to_string(), "zebra alpha");
    assert!(set.set(&["beta"]));
    assert_eq!(set.to_string(), "zebra alpha beta");
}

#[test]
fn test_at_and_has() {
    let set = TokenSet::from_text("one two");
    assert_eq!(set.at(0), "one");
    assert_eq!(set.at(1), "two");
    assert_eq!(set.at(2), "");
    assert!(set.has("ONE"));
    assert!(!set.has("three"));
}

#[test]
fn test_set_and_remove_report_change() {
    let mut set = TokenSet::new();
    assert!(set.set(&["a", "b"]));
    assert!(!set.set(&["a", "b"]));
    assert!(set.remove(&["a", "missing"]));
    assert!(!set.remove(&["a"]));
    assert_eq!(set.to_string(), "b");
}

#[test]
fn test_toggle_round_trip() {
    let mut set = TokenSet::from_text("base");
    assert!(set.toggle("active"));
    assert!(set.has("active"));
    assert!(!set.toggle("active"));
    assert!(!set.has("active"));
    assert_eq!(set.to_string(), "base");
}

#[test]
fn test_replace_keeps_position() {
    let mut set = TokenSet::from_text("a b c");
    assert!(set.replace("b", "x"));
    assert_eq!(set.to_string(), "a x c");
    assert!(!set.replace("missing", "y"));
    // Replacing with an already-present token only drops the old one.
    assert!(set.replace("x", "c"));
    assert_eq!(set.to_string(), "a c");
}

#[test]
fn test_invalid_tokens_are_dropped() {
    let mut set = TokenSet::new();
    assert!(!set.set(&["sp ace"]));
    assert!(!set.toggle("a=b"));
    let _ = set.parse("ok a#b also-ok");
    assert_eq!(set.to_string(), "ok also-ok");
}
