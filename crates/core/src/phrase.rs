//! Canned natural-language query phrases.
//!
//! The resolver is a closed lookup table of exactly four literal phrases,
//! each mapped to a fixed predicate set. Matching is exact string equality:
//! no tokenization, no case folding, no fuzzy matching. Case variants,
//! whitespace differences, and anything else outside the table fail with
//! [`Error::UnrecognizedPhrase`].
//!
//! Extending the vocabulary means adding a table entry, never parsing logic.

use crate::error::{Error, Result};
use crate::filter::StringFilter;

/// The fixed phrase vocabulary and the filter each phrase resolves to.
const PHRASE_TABLE: &[(&str, StringFilter)] = &[
    (
        "all single word palindromic strings",
        StringFilter {
            is_palindrome: Some(true),
            min_length: None,
            max_length: None,
            word_count: Some(1),
            contains_character: None,
        },
    ),
    (
        "strings longer than 10 characters",
        StringFilter {
            is_palindrome: None,
            min_length: Some(11),
            max_length: None,
            word_count: None,
            contains_character: None,
        },
    ),
    (
        "palindromic strings that contain the first vowel",
        StringFilter {
            is_palindrome: Some(true),
            min_length: None,
            max_length: None,
            word_count: None,
            contains_character: Some('a'),
        },
    ),
    (
        "strings containing the letter z",
        StringFilter {
            is_palindrome: None,
            min_length: None,
            max_length: None,
            word_count: None,
            contains_character: Some('z'),
        },
    ),
];

/// Resolve a natural-language phrase to its predicate set.
///
/// Returns [`Error::UnrecognizedPhrase`] for any input not literally in the
/// table.
pub fn resolve(phrase: &str) -> Result<StringFilter> {
    PHRASE_TABLE
        .iter()
        .find(|(known, _)| *known == phrase)
        .map(|(_, filter)| filter.clone())
        .ok_or_else(|| Error::UnrecognizedPhrase {
            query: phrase.to_string(),
        })
}
