//! Structured filter specifications and their evaluation.

use serde::{Deserialize, Serialize};

use crate::error::{LexstoreError, Result};
use crate::record::Record;

/// A set of independently optional predicates over records.
///
/// Absent fields impose no constraint; present fields are ANDed together.
/// Length bounds are inclusive, `word_count` is an exact match, and both
/// containment tests are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_contains: Option<String>,
}

impl FilterSpec {
    /// True when no predicate is set (matches every record).
    pub fn is_unconstrained(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
            && self.value_contains.is_none()
    }

    /// Reject semantically contradictory specs.
    ///
    /// A lower length bound above the upper bound can never match any record,
    /// so it is reported as `ConflictingFilters` rather than silently applied.
    pub fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(LexstoreError::conflicting_filters(format!(
                    "min_length {min} exceeds max_length {max}"
                )));
            }
        }
        Ok(())
    }

    /// Evaluate this spec against a single record.
    pub fn matches(&self, record: &Record) -> bool {
        let props = &record.properties;
        if let Some(palindrome) = self.is_palindrome {
            if props.is_palindrome != palindrome {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if props.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if props.length > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if props.word_count != count {
                return false;
            }
        }
        if let Some(ch) = self.contains_character {
            let needle = ch.to_lowercase().collect::<String>();
            if !record.value.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(ref needle) = self.value_contains {
            if !record.value.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }
        true
    }

    /// Select the matching records, preserving the input order.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

/// A filter spec as it arrives from a gateway: every field is an unparsed
/// string (query parameters carry no types). Converting to a [`FilterSpec`]
/// validates each field and reports the first malformed one as
/// `InvalidFilter`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
    pub value_contains: Option<String>,
}

impl FilterParams {
    /// Parse and validate into a typed [`FilterSpec`].
    pub fn into_spec(self) -> Result<FilterSpec> {
        Ok(FilterSpec {
            is_palindrome: self
                .is_palindrome
                .as_deref()
                .map(|raw| parse_bool("is_palindrome", raw))
                .transpose()?,
            min_length: self
                .min_length
                .as_deref()
                .map(|raw| parse_uint("min_length", raw))
                .transpose()?,
            max_length: self
                .max_length
                .as_deref()
                .map(|raw| parse_uint("max_length", raw))
                .transpose()?,
            word_count: self
                .word_count
                .as_deref()
                .map(|raw| parse_uint("word_count", raw))
                .transpose()?,
            contains_character: self
                .contains_character
                .as_deref()
                .map(parse_single_char)
                .transpose()?,
            value_contains: self.value_contains,
        })
    }
}

fn parse_bool(field: &str, raw: &str) -> Result<bool> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(LexstoreError::invalid_filter(format!(
            "{field} must be 'true' or 'false', got '{other}'"
        ))),
    }
}

fn parse_uint(field: &str, raw: &str) -> Result<u64> {
    raw.parse::<u64>().map_err(|_| {
        LexstoreError::invalid_filter(format!(
            "{field} must be a non-negative integer, got '{raw}'"
        ))
    })
}

fn parse_single_char(raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(LexstoreError::invalid_filter(format!(
            "contains_character must be exactly one character, got '{raw}'"
        ))),
    }
}
