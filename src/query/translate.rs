//! Rule-based translation of free-text queries into filter specs.
//!
//! This is a rule engine over string patterns, not natural-language
//! understanding: an ordered list of independent regex rules, each of which
//! may set one [`FilterSpec`] field. Rules combine, so "single word
//! palindromes longer than 3" sets three fields at once. A query no rule
//! recognizes degrades to a case-insensitive substring search over stored
//! values; translation itself never fails.

use lazy_static::lazy_static;
use regex::Regex;

use crate::query::FilterSpec;

lazy_static! {
    static ref NON_PALINDROME: Regex =
        Regex::new(r"(?i)\bnon[- ]?palindrom|\bnot\s+(?:a\s+)?palindrom").unwrap();
    static ref PALINDROME: Regex = Regex::new(r"(?i)palindrom").unwrap();
    static ref SINGLE_WORD: Regex = Regex::new(r"(?i)\bsingle[- ]word\b").unwrap();
    static ref LONGER_THAN: Regex = Regex::new(r"(?i)\blonger\s+than\s+(\d+)").unwrap();
    static ref SHORTER_THAN: Regex = Regex::new(r"(?i)\bshorter\s+than\s+(\d+)").unwrap();
    static ref CONTAINS_LETTER: Regex =
        Regex::new(r"(?i)\bcontain(?:s|ing)?\s+the\s+letter\s+(\p{L})").unwrap();
}

/// Translate a free-text query into a [`FilterSpec`].
///
/// An empty or whitespace-only query yields the unconstrained spec. "longer
/// than N" and "shorter than N" are strict comparisons, mapped onto the
/// spec's inclusive bounds as N+1 and N-1. Both mappings saturate at the
/// ends of the u64 range: "shorter than 0" yields a bound of 0 and "longer
/// than u64::MAX" a bound of u64::MAX, neither of which any stored record
/// satisfies.
pub fn translate(query: &str) -> FilterSpec {
    let mut spec = FilterSpec::default();
    let text = query.trim();
    if text.is_empty() {
        return spec;
    }

    let mut recognized = false;

    // The negated phrase takes priority over the plain "palindrome" mention.
    if NON_PALINDROME.is_match(text) {
        spec.is_palindrome = Some(false);
        recognized = true;
    } else if PALINDROME.is_match(text) {
        spec.is_palindrome = Some(true);
        recognized = true;
    }

    if SINGLE_WORD.is_match(text) {
        spec.word_count = Some(1);
        recognized = true;
    }

    if let Some(captures) = LONGER_THAN.captures(text) {
        if let Ok(n) = captures[1].parse::<u64>() {
            spec.min_length = Some(n.saturating_add(1));
            recognized = true;
        }
    }

    if let Some(captures) = SHORTER_THAN.captures(text) {
        if let Ok(n) = captures[1].parse::<u64>() {
            spec.max_length = Some(n.saturating_sub(1));
            recognized = true;
        }
    }

    if let Some(captures) = CONTAINS_LETTER.captures(text) {
        if let Some(ch) = captures[1].chars().next() {
            spec.contains_character = ch.to_lowercase().next();
            recognized = true;
        }
    }

    if !recognized {
        spec.value_contains = Some(text.to_lowercase());
    }

    spec
}
