//! Integration tests for sink-bound containers.

use glaze_dom::{AttributeSink, BoundAttributes, BoundTokenList, QualifiedName};

/// A sink that records every write it receives.
#[derive(Default)]
struct Recorder {
    writes: Vec<(String, String)>,
}

impl AttributeSink for &mut Recorder {
    fn write_attribute(&mut self, name: &str, value: &str) {
        self.writes.push((name.to_string(), value.to_string()));
    }
}

#[test]
fn test_bound_attributes_push_canonical_form() {
    let mut recorder = Recorder::default();
    let mut bound = BoundAttributes::new("style", &mut recorder);
    let _ = bound.set("color", "red").set("hidden", "");
    drop(bound);

    assert_eq!(
        recorder.writes,
        [
            ("style".to_string(), "color='red'".to_string()),
            ("style".to_string(), "color='red' hidden".to_string()),
        ]
    );
}

#[test]
fn test_bound_attributes_skip_no_op_mutations() {
    let mut recorder = Recorder::default();
    let mut bound = BoundAttributes::new("style", &mut recorder);
    let _ = bound.set("color", "red");
    // Same value again, an invalid name, and a remove of an absent name
    // must not reach the sink.
    let _ = bound.set("color", "red");
    let _ = bound.set("sp ace", "x");
    let _ = bound.remove_attribute("missing");
    drop(bound);

    assert_eq!(recorder.writes.len(), 1);
}

#[test]
fn test_bound_attributes_parse_is_all_or_nothing() {
    let mut recorder = Recorder::default();
    let mut bound = BoundAttributes::new("attrs", &mut recorder);
    assert!(bound.parse("a=1 b").is_ok());
    assert!(bound.parse("=bad").is_err());
    assert_eq!(bound.to_string(), "a=1 b");
    drop(bound);

    // The failed parse pushed nothing.
    assert_eq!(recorder.writes, [("attrs".to_string(), "a=1 b".to_string())]);
}

#[test]
fn test_bound_attributes_toggle_and_merge() {
    let mut recorder = Recorder::default();
    let mut bound = BoundAttributes::new("attrs", &mut recorder);
    assert!(bound.toggle("hidden"));
    assert!(!bound.toggle("hidden"));
    let other = glaze_attr::AttributeMap::parse("a=1").unwrap();
    let _ = bound.set_attributes(&other, false);
    // Merging the same map again changes nothing.
    let _ = bound.set_attributes(&other, true);
    drop(bound);

    let values: Vec<&str> = recorder.writes.iter().map(|(_, v)| v.as_str()).collect();
    assert_eq!(values, ["hidden", "", "a=1"]);
}

#[test]
fn test_bound_token_list_pushes_on_change_only() {
    let mut recorder = Recorder::default();
    let mut list = BoundTokenList::new("class", &mut recorder);
    let _ = list.parse("btn btn");
    let _ = list.set(&["btn"]);
    let _ = list.set(&["active"]);
    let _ = list.remove(&["missing"]);
    assert!(!list.toggle("active"));
    assert!(list.replace("btn", "button"));
    assert!(!list.replace("missing", "x"));
    assert_eq!(list.count(), 1);
    assert_eq!(list.at(0), "button");
    assert!(list.has("button"));
    drop(list);

    let values: Vec<&str> = recorder.writes.iter().map(|(_, v)| v.as_str()).collect();
    assert_eq!(values, ["btn", "btn active", "btn", "button"]);
}

#[test]
fn test_qualified_name_split() {
    let qname = QualifiedName::new(" XML:Lang ");
    assert_eq!(qname.prefix(), Some("xml"));
    assert_eq!(qname.local_name(), "lang");
    assert_eq!(qname.as_str(), "xml:lang");
    assert_eq!(qname.to_string(), "xml:lang");

    let bare = QualifiedName::new("lang");
    assert_eq!(bare.prefix(), None);
    assert_eq!(bare.local_name(), "lang");
}
