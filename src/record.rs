//! Record types: a stored string plus its derived properties and identity.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A stored string together with its derived properties.
///
/// The `id` is the hex-encoded content hash of the normalized value and serves
/// as the store key. Records are immutable once created; an update is modeled
/// as delete followed by insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Content hash of the normalized value, hex-encoded.
    pub id: String,
    /// The original trimmed string as submitted.
    pub value: String,
    /// Derived attributes, computed once at analysis time.
    pub properties: Properties,
    /// Timestamp captured at insertion.
    pub created_at: DateTime<Utc>,
}

/// Derived attributes of a stored string.
///
/// `length`, `word_count`, and `character_frequency` reflect the literal
/// trimmed value; `is_palindrome` and `unique_characters` are computed over
/// the normalized (trimmed, lowercased) form. `content_hash` duplicates the
/// record id for API symmetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    pub length: u64,
    pub is_palindrome: bool,
    pub unique_characters: u64,
    pub word_count: u64,
    pub content_hash: String,
    pub character_frequency: CharFrequency,
}

/// Per-character occurrence counts, preserving first-occurrence order.
///
/// Serialized as a JSON object whose keys are single-character strings. A
/// plain `HashMap` would lose the insertion order, so this keeps an ordered
/// list of `(char, count)` pairs and implements the map serialization by
/// hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharFrequency {
    entries: Vec<(char, u64)>,
}

impl CharFrequency {
    /// Count every character of `value`, in order of first appearance.
    pub fn from_value(value: &str) -> Self {
        let mut entries: Vec<(char, u64)> = Vec::new();
        for ch in value.chars() {
            match entries.iter_mut().find(|(c, _)| *c == ch) {
                Some((_, count)) => *count += 1,
                None => entries.push((ch, 1)),
            }
        }
        CharFrequency { entries }
    }

    /// Occurrence count for `ch` (0 if absent).
    pub fn get(&self, ch: char) -> u64 {
        self.entries
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Number of distinct characters recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no characters have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.entries.iter().copied()
    }
}

impl Serialize for CharFrequency {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        let mut buf = [0u8; 4];
        for (ch, count) in &self.entries {
            map.serialize_entry(ch.encode_utf8(&mut buf), count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CharFrequency {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FrequencyVisitor;

        impl<'de> Visitor<'de> for FrequencyVisitor {
            type Value = CharFrequency;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of single-character keys to counts")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((key, count)) = map.next_entry::<String, u64>()? {
                    let mut chars = key.chars();
                    let ch = chars
                        .next()
                        .ok_or_else(|| de::Error::custom("frequency key must not be empty"))?;
                    if chars.next().is_some() {
                        return Err(de::Error::custom(
                            "frequency key must be a single character",
                        ));
                    }
                    entries.push((ch, count));
                }
                Ok(CharFrequency { entries })
            }
        }

        deserializer.deserialize_map(FrequencyVisitor)
    }
}
