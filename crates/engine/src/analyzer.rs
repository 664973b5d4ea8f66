//! Derived property computation
//!
//! [`analyze`] is the single entry point: given a raw string it produces
//! the full [`StringProperties`] snapshot. It is pure and deterministic;
//! the store calls it exactly once per value, at insert.
//!
//! ## Cleaning
//!
//! The palindrome check runs over a cleaned copy of the value: lowercased
//! first, then stripped of every character outside ASCII `[a-z0-9]`, in
//! that order. Lowercasing can expand one character into several (e.g.
//! `'İ'`), and the expansion happens before the ASCII filter sees it.
//!
//! All other properties use the raw value. `unique_characters` and the
//! frequency map are case-sensitive and include whitespace and punctuation;
//! this asymmetry with the palindrome check is intentional.

use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashSet};
use std::fmt::Write;
use stringvault_core::StringProperties;

/// Compute the full property snapshot for a raw string value.
pub fn analyze(value: &str) -> StringProperties {
    StringProperties {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: value.chars().collect::<HashSet<_>>().len(),
        word_count: value.split_whitespace().count(),
        sha256_hash: fingerprint(value),
        character_frequency_map: character_frequency(value),
    }
}

/// Content fingerprint: SHA-256 digest of the value's UTF-8 bytes,
/// lowercase hex.
pub fn fingerprint(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex_encode_lower(&hasher.finalize())
}

/// Palindrome check over the cleaned value.
///
/// An empty cleaned string equals its own reverse, so inputs with no
/// alphanumeric content count as palindromes.
fn is_palindrome(value: &str) -> bool {
    let cleaned = clean(value);
    let reversed: String = cleaned.chars().rev().collect();
    cleaned == reversed
}

/// Lowercase, then drop everything outside ASCII `[a-z0-9]`.
///
/// Uppercase ASCII cannot survive the lowercasing step, so keeping ASCII
/// lowercase letters and digits is exactly the `[a-z0-9]` character class.
fn clean(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
        .collect()
}

fn character_frequency(value: &str) -> BTreeMap<char, u64> {
    let mut map = BTreeMap::new();
    for ch in value.chars() {
        *map.entry(ch).or_insert(0) += 1;
    }
    map
}

fn hex_encode_lower(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}
