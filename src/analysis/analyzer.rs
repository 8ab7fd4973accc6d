//! The analyzer: a pure function from a string to an analyzed [`Record`].
//!
//! Normalization is fixed: trim, then Unicode lowercase. The normalized form
//! drives hashing, palindrome comparison, and unique-character counting, so
//! two submissions differing only in case or surrounding whitespace collide
//! to the same record id. `length`, `word_count`, and `character_frequency`
//! are computed over the literal trimmed value instead, so reported counts
//! match what is actually stored.

use std::collections::HashSet;

use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::record::{CharFrequency, Properties, Record};

/// The canonical normalization: trim, then lowercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Hex-encoded SHA-256 digest of a normalized value.
pub fn content_hash(normalized: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Analyze a string into a [`Record`].
///
/// Total function: any input yields a record. Callers are expected to reject
/// empty input before analysis; an empty string still analyzes cleanly
/// (length 0, word count 0, empty frequency map).
pub fn analyze(raw: &str) -> Record {
    let value = raw.trim().to_string();
    let normalized = normalize(raw);
    let hash = content_hash(&normalized);

    let forward: Vec<char> = normalized.chars().collect();
    let is_palindrome = forward.iter().eq(forward.iter().rev());

    let distinct: HashSet<char> = normalized.chars().collect();

    let properties = Properties {
        length: value.chars().count() as u64,
        is_palindrome,
        unique_characters: distinct.len() as u64,
        word_count: value.split_whitespace().count() as u64,
        content_hash: hash.clone(),
        character_frequency: CharFrequency::from_value(&value),
    };

    Record {
        id: hash,
        value,
        properties,
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_is_deterministic() {
        let a = analyze("hello world");
        let b = analyze("hello world");
        assert_eq!(a.id, b.id);
        assert_eq!(a.properties, b.properties);
    }

    #[test]
    fn test_case_variants_share_an_id() {
        assert_eq!(analyze("racecar").id, analyze("RACECAR").id);
        assert_eq!(analyze("racecar").id, analyze("  Racecar  ").id);
        assert_ne!(analyze("racecar").id, analyze("racecars").id);
    }

    #[test]
    fn test_id_matches_content_hash_property() {
        let record = analyze("hello");
        assert_eq!(record.id, record.properties.content_hash);
        assert_eq!(record.id, content_hash(&normalize("hello")));
    }

    #[test]
    fn test_palindrome_detection() {
        assert!(analyze("racecar").properties.is_palindrome);
        assert!(!analyze("hello").properties.is_palindrome);
        // Case-insensitive via normalization.
        assert!(analyze("Racecar").properties.is_palindrome);
        // Single characters and empty strings read the same both ways.
        assert!(analyze("a").properties.is_palindrome);
        assert!(analyze("").properties.is_palindrome);
    }

    #[test]
    fn test_length_counts_literal_trimmed_value() {
        let record = analyze("  Hello  ");
        assert_eq!(record.value, "Hello");
        assert_eq!(record.properties.length, 5);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(analyze("").properties.word_count, 0);
        assert_eq!(analyze("   ").properties.word_count, 0);
        assert_eq!(analyze("one").properties.word_count, 1);
        // Runs of whitespace collapse.
        assert_eq!(analyze("one two  three").properties.word_count, 3);
    }

    #[test]
    fn test_unique_characters_over_normalized_form() {
        assert_eq!(analyze("aabbcc").properties.unique_characters, 3);
        // "Aa" normalizes to "aa": one distinct character.
        assert_eq!(analyze("Aa").properties.unique_characters, 1);
    }

    #[test]
    fn test_character_frequency_over_literal_value() {
        let record = analyze("Aab");
        let freq = &record.properties.character_frequency;
        assert_eq!(freq.get('A'), 1);
        assert_eq!(freq.get('a'), 1);
        assert_eq!(freq.get('b'), 1);
    }
}
