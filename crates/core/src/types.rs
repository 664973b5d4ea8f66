//! Record types for analyzed strings
//!
//! An [`AnalyzedString`] is one entry in the store: the raw value, its
//! derived [`StringProperties`], and the insertion timestamp. Records are
//! write-once: neither the value nor the properties change after creation,
//! and there is no update operation anywhere in the system.
//!
//! ## Identity
//!
//! `id` is the lowercase hex SHA-256 digest of the value's UTF-8 bytes. It
//! doubles as a display identifier and mirrors `properties.sha256_hash`.
//! Uniqueness in the store is enforced by exact `value` equality, never by
//! digest comparison.
//!
//! ## Character granularity
//!
//! Every character-level property counts Unicode scalar values (`char`s):
//! `length`, `unique_characters`, and the keys of
//! `character_frequency_map`. The palindrome flag is the one exception: it
//! is computed over a cleaned copy of the value (see
//! `stringvault-engine::analyzer`), while the frequency map and unique
//! count deliberately use the raw value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Derived textual properties of a stored string.
///
/// Computed exactly once, when the value is inserted. The snapshot is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Number of Unicode scalar values in the raw value
    pub length: usize,

    /// Whether the cleaned value (lowercased, stripped to ASCII `[a-z0-9]`)
    /// reads the same forwards and backwards. An empty cleaned value counts
    /// as a palindrome.
    pub is_palindrome: bool,

    /// Number of distinct characters in the raw value (case-sensitive)
    pub unique_characters: usize,

    /// Number of whitespace-delimited non-empty tokens
    pub word_count: usize,

    /// Lowercase hex SHA-256 digest of the raw value's UTF-8 bytes
    pub sha256_hash: String,

    /// Occurrence count per distinct character of the raw value
    pub character_frequency_map: BTreeMap<char, u64>,
}

/// One stored record: a raw string value plus its property snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedString {
    /// Content fingerprint; equals `properties.sha256_hash`
    pub id: String,

    /// The original raw string, immutable, primary key for lookup/delete
    pub value: String,

    /// Derived properties, computed at creation
    pub properties: StringProperties,

    /// Insertion time, set once; serialized as an ISO-8601 string
    pub created_at: DateTime<Utc>,
}
