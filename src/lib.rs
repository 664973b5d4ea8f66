//! StringVault - in-memory string analysis and retrieval service
//!
//! StringVault stores raw strings in memory and computes a snapshot of
//! derived properties for each at insert time: length, palindrome status,
//! unique character count, word count, per-character frequency, and a
//! SHA-256 content fingerprint. Stored records can be listed, fetched and
//! deleted by exact value, and filtered by a small predicate set: either
//! supplied directly or resolved from a fixed table of natural-language
//! phrases.
//!
//! # Quick Start
//!
//! ```
//! use stringvault::{StringFilter, StringStore};
//!
//! let store = StringStore::new();
//! store.insert("Racecar").unwrap();
//! store.insert("hello world").unwrap();
//!
//! let palindromes = store.list_filtered(&StringFilter {
//!     is_palindrome: Some(true),
//!     ..Default::default()
//! });
//! assert_eq!(palindromes.len(), 1);
//! assert_eq!(palindromes[0].value, "Racecar");
//! ```
//!
//! # Architecture
//!
//! The embeddable API re-exported here comes from two crates:
//! `stringvault-core` (record types, errors, filters, the phrase table) and
//! `stringvault-engine` (the analyzer and the mutex-guarded store). The
//! HTTP surface lives in `stringvault-server` and is not re-exported: run
//! the `stringvault_http` binary for the service.

pub use stringvault_core::*;
pub use stringvault_engine::*;
