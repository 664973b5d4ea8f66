//! Filter predicates over stored records.
//!
//! A [`StringFilter`] is a partial predicate set: each field is optional,
//! and the supplied fields combine by logical AND. The empty filter matches
//! every record.
//!
//! Predicates assume well-typed input and never fail: validation of raw
//! query strings (type coercion, range checks) is a boundary concern that
//! happens before a filter is ever constructed.
//!
//! Serialization skips unset fields, so a filter echoed back to a client
//! shows exactly the constraints that were applied.

use crate::types::AnalyzedString;
use serde::{Deserialize, Serialize};

/// Conjunction of optional predicates over record properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringFilter {
    /// Record's palindrome flag must equal this value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    /// Record's length must be at least this value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Record's length must be at most this value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Record's word count must equal this value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,

    /// Character must occur with non-zero count in the record's frequency map
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl StringFilter {
    /// The filter with no constraints; matches every record.
    pub const EMPTY: StringFilter = StringFilter {
        is_palindrome: None,
        min_length: None,
        max_length: None,
        word_count: None,
        contains_character: None,
    };

    /// Whether no constraint is set on any dimension.
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Evaluate the full predicate set against one record.
    pub fn matches(&self, record: &AnalyzedString) -> bool {
        let properties = &record.properties;

        if let Some(want) = self.is_palindrome {
            if properties.is_palindrome != want {
                return false;
            }
        }

        if let Some(min) = self.min_length {
            if properties.length < min {
                return false;
            }
        }

        if let Some(max) = self.max_length {
            if properties.length > max {
                return false;
            }
        }

        if let Some(count) = self.word_count {
            if properties.word_count != count {
                return false;
            }
        }

        if let Some(ch) = self.contains_character {
            let occurrences = properties
                .character_frequency_map
                .get(&ch)
                .copied()
                .unwrap_or(0);
            if occurrences == 0 {
                return false;
            }
        }

        true
    }
}
