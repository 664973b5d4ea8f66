//! In-memory string store
//!
//! ## Design
//!
//! `StringStore` owns the one shared collection in the system. The service
//! creates a single instance at startup and hands it to request handlers
//! behind an `Arc`; nothing reaches the collection through process-global
//! state.
//!
//! ## Thread Safety
//!
//! A single `parking_lot::Mutex` guards the collection, and every public
//! operation holds it for its whole duration. Insert checks for duplicates
//! and appends under the same guard, so two concurrent inserts of the same
//! value cannot both pass the check.
//!
//! ## Ordering
//!
//! Records live in a `Vec` in insertion order; `list_all` and
//! `list_filtered` preserve that order.

use chrono::Utc;
use parking_lot::Mutex;
use stringvault_core::error::{Error, Result};
use stringvault_core::{AnalyzedString, StringFilter};
use tracing::info;

use crate::analyzer;

/// In-memory collection of analyzed string records, keyed by exact value.
///
/// # Example
///
/// ```
/// use stringvault_engine::StringStore;
///
/// let store = StringStore::new();
/// store.insert("hello world").unwrap();
/// let record = store.get("hello world").unwrap();
/// assert_eq!(record.properties.word_count, 2);
/// store.delete("hello world").unwrap();
/// ```
#[derive(Default)]
pub struct StringStore {
    records: Mutex<Vec<AnalyzedString>>,
}

impl StringStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Analyze and insert a new value.
    ///
    /// Properties and `created_at` are computed here, once; the record is
    /// immutable afterwards. Fails with [`Error::DuplicateValue`] if an
    /// identical value is already stored: the store never merges or
    /// overwrites.
    pub fn insert(&self, value: &str) -> Result<AnalyzedString> {
        let mut records = self.records.lock();

        if records.iter().any(|record| record.value == value) {
            return Err(Error::DuplicateValue {
                value: value.to_string(),
            });
        }

        let properties = analyzer::analyze(value);
        let record = AnalyzedString {
            id: properties.sha256_hash.clone(),
            value: value.to_string(),
            properties,
            created_at: Utc::now(),
        };
        records.push(record.clone());

        info!(value, total = records.len(), "stored new string");
        Ok(record)
    }

    /// Exact-match lookup by value.
    pub fn get(&self, value: &str) -> Result<AnalyzedString> {
        self.records
            .lock()
            .iter()
            .find(|record| record.value == value)
            .cloned()
            .ok_or_else(|| Error::NotFound {
                value: value.to_string(),
            })
    }

    /// Remove the record matching `value`.
    ///
    /// Fails with [`Error::NotFound`] when no such record exists: a repeat
    /// delete of the same value reports not-found rather than succeeding
    /// silently.
    pub fn delete(&self, value: &str) -> Result<()> {
        let mut records = self.records.lock();
        let position = records
            .iter()
            .position(|record| record.value == value)
            .ok_or_else(|| Error::NotFound {
                value: value.to_string(),
            })?;
        records.remove(position);
        Ok(())
    }

    /// Full contents in insertion order.
    pub fn list_all(&self) -> Vec<AnalyzedString> {
        self.records.lock().clone()
    }

    /// Contents matching the predicate set, in insertion order.
    pub fn list_filtered(&self, filter: &StringFilter) -> Vec<AnalyzedString> {
        self.records
            .lock()
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}
