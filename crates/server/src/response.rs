//! Response envelope types
//!
//! List-style routes wrap their record sets in small envelopes that echo
//! the applied constraints back to the client. The skip-none serialization
//! of [`StringFilter`] means `filters_applied`/`parsed_filters` contain
//! exactly the constraints that were in effect.

use serde::Serialize;
use stringvault_core::{AnalyzedString, StringFilter};

/// Body of `GET /strings`.
#[derive(Debug, Serialize)]
pub struct FilteredListResponse {
    /// Matching records, in insertion order
    pub data: Vec<AnalyzedString>,
    /// Number of records in `data`
    pub count: usize,
    /// Echo of the constraints the request supplied
    pub filters_applied: StringFilter,
}

/// Echo of a resolved natural-language query.
#[derive(Debug, Serialize)]
pub struct InterpretedQuery {
    /// The phrase as the client sent it
    pub original: String,
    /// The predicate set the phrase resolved to
    pub parsed_filters: StringFilter,
}

/// Body of `GET /strings/filter-by-natural-language`.
#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    /// Matching records, in insertion order
    pub data: Vec<AnalyzedString>,
    /// Number of records in `data`
    pub count: usize,
    /// How the phrase was interpreted
    pub interpreted_query: InterpretedQuery,
}
