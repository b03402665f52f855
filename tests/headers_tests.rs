//! Header Store Tests
//!
//! Tests for the insertion-ordered header mapping.

use kagari::headers::Headers;

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_get_first_match() {
    let mut headers = Headers::new();
    headers.push("Event".to_string(), "OnBoot".to_string());
    headers.push("Event".to_string(), "OnClose".to_string());

    assert_eq!(headers.get_value("Event"), Some("OnBoot"));
}

#[test]
fn test_get_absent_key_is_none() {
    let headers = Headers::new();
    assert!(headers.get("Event").is_none());
    assert!(headers.get_value("Event").is_none());
}

#[test]
fn test_get_is_case_sensitive() {
    let mut headers = Headers::new();
    headers.set("Charset", "US-ASCII");

    assert!(headers.get("charset").is_none());
    assert_eq!(headers.get_value("Charset"), Some("US-ASCII"));
}

// =============================================================================
// Set Semantics Tests
// =============================================================================

#[test]
fn test_set_appends_new_keys_in_order() {
    let mut headers = Headers::new();
    headers.set("Sender", "kagari/embryo");
    headers.set("Charset", "US-ASCII");
    headers.set("Sentence", "\\h\\s0");

    let keys: Vec<&str> = headers.iter().map(|h| h.key.as_str()).collect();
    assert_eq!(keys, vec!["Sender", "Charset", "Sentence"]);
}

#[test]
fn test_set_existing_key_updates_in_place() {
    let mut headers = Headers::new();
    headers.set("Sender", "a");
    headers.set("Charset", "b");
    headers.set("Sender", "c");

    // Value changed, position and uniqueness preserved
    assert_eq!(headers.len(), 2);
    let entries: Vec<(&str, &str)> = headers
        .iter()
        .map(|h| (h.key.as_str(), h.value.as_str()))
        .collect();
    assert_eq!(entries, vec![("Sender", "c"), ("Charset", "b")]);
}

#[test]
fn test_set_never_duplicates_a_key() {
    let mut headers = Headers::new();
    for value in ["1", "2", "3", "4", "5"] {
        headers.set("Value", value);
    }

    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get_value("Value"), Some("5"));
}

#[test]
fn test_set_empty_key_is_a_noop() {
    let mut headers = Headers::new();
    headers.set("", "orphan");

    assert!(headers.is_empty());
}

// =============================================================================
// Append Tests
// =============================================================================

#[test]
fn test_append_value_concatenates_in_call_order() {
    let mut headers = Headers::new();
    headers.set("Sentence", "\\h\\s0");
    headers.append_value("Sentence", "\\_qhello");
    headers.append_value("Sentence", "\\e");

    assert_eq!(headers.get_value("Sentence"), Some("\\h\\s0\\_qhello\\e"));
}

#[test]
fn test_append_value_absent_key_is_a_noop() {
    let mut headers = Headers::new();
    headers.append_value("Sentence", "\\e");

    assert!(headers.is_empty());
}
