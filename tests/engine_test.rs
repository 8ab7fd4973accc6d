//! End-to-end tests driving the engine through its request/response
//! boundary, the way an external gateway would.

use lexstore::engine::Engine;
use lexstore::error::LexstoreError;
use lexstore::query::FilterParams;

#[test]
fn test_submit_analyzes_and_stores() {
    let engine = Engine::new();

    let record = engine.submit("racecar").unwrap();
    assert_eq!(record.value, "racecar");
    assert_eq!(record.properties.length, 7);
    assert!(record.properties.is_palindrome);
    assert_eq!(record.properties.word_count, 1);
    assert_eq!(record.properties.unique_characters, 4);
    assert_eq!(record.id, record.properties.content_hash);
}

#[test]
fn test_submit_rejects_empty_input() {
    let engine = Engine::new();

    for input in ["", "   ", "\t\n"] {
        match engine.submit(input) {
            Err(LexstoreError::InvalidInput(_)) => {}
            other => panic!("expected InvalidInput for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_resubmit_conflicts() {
    let engine = Engine::new();
    engine.submit("racecar").unwrap();

    match engine.submit("racecar") {
        Err(LexstoreError::Conflict(_)) => {}
        other => panic!("expected Conflict, got {other:?}"),
    }
}

#[test]
fn test_fetch_is_case_insensitive() {
    let engine = Engine::new();
    let submitted = engine.submit("racecar").unwrap();

    let fetched = engine.fetch("RACECAR").unwrap();
    assert_eq!(fetched, submitted);

    let fetched = engine.fetch("  Racecar  ").unwrap();
    assert_eq!(fetched, submitted);
}

#[test]
fn test_remove_then_fetch_misses() {
    let engine = Engine::new();
    engine.submit("racecar").unwrap();

    engine.remove("racecar").unwrap();
    match engine.fetch("racecar") {
        Err(LexstoreError::NotFound(_)) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }

    match engine.remove("racecar") {
        Err(LexstoreError::NotFound(_)) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_structured_query_filters_and_echoes() {
    let engine = Engine::new();
    engine.submit("racecar").unwrap();
    engine.submit("hello").unwrap();
    engine.submit("noon").unwrap();
    engine.submit("hello world").unwrap();

    let params = FilterParams {
        is_palindrome: Some("true".to_string()),
        ..Default::default()
    };
    let response = engine.query(params).unwrap();
    let values: Vec<&str> = response.records.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, vec!["racecar", "noon"]);
    assert_eq!(response.filters.is_palindrome, Some(true));

    let params = FilterParams {
        min_length: Some("5".to_string()),
        max_length: Some("5".to_string()),
        ..Default::default()
    };
    let response = engine.query(params).unwrap();
    let values: Vec<&str> = response.records.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, vec!["hello"]);
}

#[test]
fn test_structured_query_rejects_malformed_parameters() {
    let engine = Engine::new();

    let params = FilterParams {
        min_length: Some("five".to_string()),
        ..Default::default()
    };
    match engine.query(params) {
        Err(LexstoreError::InvalidFilter(_)) => {}
        other => panic!("expected InvalidFilter, got {other:?}"),
    }

    let params = FilterParams {
        min_length: Some("9".to_string()),
        max_length: Some("2".to_string()),
        ..Default::default()
    };
    match engine.query(params) {
        Err(LexstoreError::ConflictingFilters(_)) => {}
        other => panic!("expected ConflictingFilters, got {other:?}"),
    }
}

#[test]
fn test_natural_language_query() {
    let engine = Engine::new();
    engine.submit("racecar").unwrap();
    engine.submit("noon").unwrap();
    engine.submit("never odd or even").unwrap();
    engine.submit("hello").unwrap();

    let response = engine
        .query_natural_language("all single word palindromic strings")
        .unwrap();
    let values: Vec<&str> = response.records.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, vec!["racecar", "noon"]);
    assert_eq!(response.filters.is_palindrome, Some(true));
    assert_eq!(response.filters.word_count, Some(1));
    assert_eq!(response.query, "all single word palindromic strings");

    let response = engine
        .query_natural_language("strings longer than 5")
        .unwrap();
    let values: Vec<&str> = response.records.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, vec!["racecar", "never odd or even"]);
}

#[test]
fn test_natural_language_fallback_matches_literally() {
    let engine = Engine::new();
    engine.submit("Hello World").unwrap();
    engine.submit("goodbye").unwrap();

    let response = engine.query_natural_language("hello").unwrap();
    let values: Vec<&str> = response.records.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, vec!["Hello World"]);
    assert_eq!(response.filters.value_contains, Some("hello".to_string()));
}

#[test]
fn test_natural_language_rejects_empty_text() {
    let engine = Engine::new();

    match engine.query_natural_language("   ") {
        Err(LexstoreError::InvalidInput(_)) => {}
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_natural_language_conflicting_bounds() {
    let engine = Engine::new();
    engine.submit("hello").unwrap();

    match engine.query_natural_language("longer than 9 but shorter than 2") {
        Err(LexstoreError::ConflictingFilters(_)) => {}
        other => panic!("expected ConflictingFilters, got {other:?}"),
    }
}

#[test]
fn test_shorter_than_zero_yields_empty_result() {
    let engine = Engine::new();
    engine.submit("a").unwrap();

    let response = engine
        .query_natural_language("strings shorter than 0")
        .unwrap();
    assert!(response.records.is_empty());
    assert_eq!(response.filters.max_length, Some(0));
}

#[test]
fn test_full_lifecycle() {
    let engine = Engine::new();

    let record = engine.submit("racecar").unwrap();
    assert!(record.properties.is_palindrome);
    assert_eq!(record.properties.length, 7);

    assert!(matches!(
        engine.submit("racecar"),
        Err(LexstoreError::Conflict(_))
    ));

    let fetched = engine.fetch("RACECAR").unwrap();
    assert_eq!(fetched.id, record.id);

    engine.remove("racecar").unwrap();
    assert!(matches!(
        engine.fetch("racecar"),
        Err(LexstoreError::NotFound(_))
    ));
}
