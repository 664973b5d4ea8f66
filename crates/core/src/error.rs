//! Error types for string storage and retrieval.
//!
//! All failures in the system are represented by the [`Error`] enum. These
//! errors are:
//! - **Expected**: every variant is a recoverable, request-scoped condition
//! - **Structured**: variants carry typed fields for caller-side handling
//! - **Serializable**: can be converted to/from JSON
//!
//! The `Display` string of each variant is the fixed machine-readable
//! message the HTTP boundary puts on the wire; the boundary adds the status
//! code. Nothing here knows about HTTP.

use serde::{Deserialize, Serialize};

/// Result type alias for StringVault operations
pub type Result<T> = std::result::Result<T, Error>;

/// Request-scoped failures.
///
/// None of these are fatal to the process, and none warrant a retry: every
/// operation is deterministic, so a failed request fails the same way again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Request Body ====================
    /// Create request had no usable `value` field (absent, null, or empty)
    #[error("Invalid request body or missing \"value\" field")]
    MissingField,

    /// Create request carried a `value` that is not a string
    #[error("Invalid data type for \"value\" (must be string)")]
    WrongType,

    // ==================== Store ====================
    /// Insert of a value that is already stored
    #[error("String already exists in the system")]
    DuplicateValue {
        /// The value that was already present
        value: String,
    },

    /// Lookup or delete of a value that is not stored
    #[error("String does not exists in the system")]
    NotFound {
        /// The value that was requested
        value: String,
    },

    // ==================== Query Validation ====================
    /// A filter query parameter failed validation
    #[error("{param} must be {expected}")]
    InvalidFilterParam {
        /// Name of the offending parameter
        param: String,
        /// Human-readable description of the accepted form
        expected: String,
    },

    /// A natural-language query outside the fixed phrase table
    #[error("Unable to parse natural language query")]
    UnrecognizedPhrase {
        /// The query text that failed to resolve
        query: String,
    },
}
