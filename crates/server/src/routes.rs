//! Route handlers and router assembly
//!
//! Handlers translate raw HTTP inputs into core calls and core results
//! into JSON responses. All validation of raw query and body input happens
//! here, before any store access: the engine never sees malformed input,
//! and a request with any malformed filter parameter is rejected before
//! filtering runs.
//!
//! The natural-language route is registered alongside the path-capture
//! route; static segments take precedence, so the literal path
//! `filter-by-natural-language` is never treated as a stored value.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value as JsonValue;
use stringvault_core::{phrase, AnalyzedString, Error, StringFilter};
use stringvault_engine::StringStore;

use crate::error::ApiError;
use crate::response::{FilteredListResponse, InterpretedQuery, NaturalLanguageResponse};

/// Shared handler state: the one store instance for the process.
pub type SharedStore = Arc<StringStore>;

/// Assemble the service router over a store instance.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(list_root))
        .route("/strings", post(create_string).get(list_strings))
        .route("/strings/filter-by-natural-language", get(filter_by_phrase))
        .route(
            "/strings/:string_value",
            get(get_string).delete(delete_string),
        )
        .with_state(store)
}

/// `GET /`: legacy ping route; returns the full record list.
async fn list_root(State(store): State<SharedStore>) -> Json<Vec<AnalyzedString>> {
    Json(store.list_all())
}

/// `POST /strings`: analyze and store a new value.
async fn create_string(
    State(store): State<SharedStore>,
    body: Option<Json<JsonValue>>,
) -> Result<(StatusCode, Json<AnalyzedString>), ApiError> {
    let value = extract_value(body)?;
    let record = store.insert(&value)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /strings/:string_value`: exact-match lookup.
async fn get_string(
    State(store): State<SharedStore>,
    Path(string_value): Path<String>,
) -> Result<Json<AnalyzedString>, ApiError> {
    Ok(Json(store.get(&string_value)?))
}

/// `DELETE /strings/:string_value`: remove a stored value.
async fn delete_string(
    State(store): State<SharedStore>,
    Path(string_value): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.delete(&string_value)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /strings`: filtered listing.
async fn list_strings(
    State(store): State<SharedStore>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<FilteredListResponse>, ApiError> {
    let filters = parse_filter_params(&params)?;
    let data = store.list_filtered(&filters);
    Ok(Json(FilteredListResponse {
        count: data.len(),
        data,
        filters_applied: filters,
    }))
}

/// `GET /strings/filter-by-natural-language`: canned phrase filtering.
async fn filter_by_phrase(
    State(store): State<SharedStore>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<NaturalLanguageResponse>, ApiError> {
    // A missing or empty query reports the same failure as an unknown one
    let query = params
        .get("query")
        .filter(|query| !query.is_empty())
        .ok_or(Error::UnrecognizedPhrase {
            query: String::new(),
        })?;

    let filters = phrase::resolve(query)?;
    let data = store.list_filtered(&filters);
    Ok(Json(NaturalLanguageResponse {
        count: data.len(),
        data,
        interpreted_query: InterpretedQuery {
            original: query.clone(),
            parsed_filters: filters,
        },
    }))
}

/// Pull the `value` field out of a raw JSON body.
///
/// Missing body, unparseable JSON, a missing field, `null`, and the empty
/// string all map to `MissingField`; a present non-string value maps to
/// `WrongType`.
fn extract_value(body: Option<Json<JsonValue>>) -> Result<String, ApiError> {
    let Some(Json(body)) = body else {
        return Err(Error::MissingField.into());
    };
    match body.get("value") {
        None | Some(JsonValue::Null) => Err(Error::MissingField.into()),
        Some(JsonValue::String(value)) if value.is_empty() => Err(Error::MissingField.into()),
        Some(JsonValue::String(value)) => Ok(value.clone()),
        Some(_) => Err(Error::WrongType.into()),
    }
}

/// Validate raw query parameters and build the filter predicate set.
///
/// The first malformed parameter rejects the whole request; unknown
/// parameters are ignored.
fn parse_filter_params(params: &HashMap<String, String>) -> Result<StringFilter, ApiError> {
    let mut filters = StringFilter::default();

    if let Some(raw) = params.get("is_palindrome") {
        filters.is_palindrome = Some(match raw.as_str() {
            "true" => true,
            "false" => false,
            _ => return Err(invalid_param("is_palindrome", "'true' or 'false'")),
        });
    }

    if let Some(raw) = params.get("min_length") {
        filters.min_length = Some(parse_non_negative("min_length", raw)?);
    }

    if let Some(raw) = params.get("max_length") {
        filters.max_length = Some(parse_non_negative("max_length", raw)?);
    }

    if let Some(raw) = params.get("word_count") {
        filters.word_count = Some(parse_non_negative("word_count", raw)?);
    }

    if let Some(raw) = params.get("contains_character") {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => filters.contains_character = Some(ch),
            _ => return Err(invalid_param("contains_character", "a single character")),
        }
    }

    Ok(filters)
}

fn parse_non_negative(param: &str, raw: &str) -> Result<usize, ApiError> {
    raw.parse::<usize>()
        .map_err(|_| invalid_param(param, "a positive integer"))
}

fn invalid_param(param: &str, expected: &str) -> ApiError {
    ApiError(Error::InvalidFilterParam {
        param: param.to_string(),
        expected: expected.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn setup() -> SharedStore {
        Arc::new(StringStore::new())
    }

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    // ========== Body Extraction ==========

    #[test]
    fn test_extract_value_happy_path() {
        let value = extract_value(Some(Json(json!({"value": "hello"})))).unwrap();
        assert_eq!(value, "hello");
    }

    #[test]
    fn test_extract_value_missing_body() {
        let err = extract_value(None).unwrap_err();
        assert_eq!(err, ApiError(Error::MissingField));
    }

    #[test]
    fn test_extract_value_missing_field() {
        let err = extract_value(Some(Json(json!({"other": "x"})))).unwrap_err();
        assert_eq!(err, ApiError(Error::MissingField));
    }

    #[test]
    fn test_extract_value_null_and_empty() {
        let err = extract_value(Some(Json(json!({"value": null})))).unwrap_err();
        assert_eq!(err, ApiError(Error::MissingField));

        let err = extract_value(Some(Json(json!({"value": ""})))).unwrap_err();
        assert_eq!(err, ApiError(Error::MissingField));
    }

    #[test]
    fn test_extract_value_non_string() {
        for body in [json!({"value": 123}), json!({"value": true}), json!({"value": ["a"]})] {
            let err = extract_value(Some(Json(body))).unwrap_err();
            assert_eq!(err, ApiError(Error::WrongType));
        }
    }

    // ========== Filter Parameter Validation ==========

    #[test]
    fn test_parse_filter_params_empty() {
        let filters = parse_filter_params(&params(&[])).unwrap();
        assert!(filters.is_unconstrained());
    }

    #[test]
    fn test_parse_filter_params_full_set() {
        let filters = parse_filter_params(&params(&[
            ("is_palindrome", "true"),
            ("min_length", "3"),
            ("max_length", "10"),
            ("word_count", "1"),
            ("contains_character", "z"),
        ]))
        .unwrap();

        assert_eq!(filters.is_palindrome, Some(true));
        assert_eq!(filters.min_length, Some(3));
        assert_eq!(filters.max_length, Some(10));
        assert_eq!(filters.word_count, Some(1));
        assert_eq!(filters.contains_character, Some('z'));
    }

    #[test]
    fn test_parse_filter_params_bad_boolean() {
        let err = parse_filter_params(&params(&[("is_palindrome", "yes")])).unwrap_err();
        assert_eq!(
            err.0.to_string(),
            "is_palindrome must be 'true' or 'false'"
        );
    }

    #[test]
    fn test_parse_filter_params_bad_integers() {
        for param in ["min_length", "max_length", "word_count"] {
            for raw in ["-1", "abc", "1.5", ""] {
                let err = parse_filter_params(&params(&[(param, raw)])).unwrap_err();
                assert_eq!(err.0.to_string(), format!("{param} must be a positive integer"));
            }
        }
    }

    #[test]
    fn test_parse_filter_params_bad_character() {
        for raw in ["", "ab", "xyz"] {
            let err = parse_filter_params(&params(&[("contains_character", raw)])).unwrap_err();
            assert_eq!(
                err.0.to_string(),
                "contains_character must be a single character"
            );
        }
    }

    #[test]
    fn test_parse_filter_params_multibyte_character() {
        let filters = parse_filter_params(&params(&[("contains_character", "é")])).unwrap();
        assert_eq!(filters.contains_character, Some('é'));
    }

    #[test]
    fn test_parse_filter_params_ignores_unknown() {
        let filters = parse_filter_params(&params(&[("sort", "asc")])).unwrap();
        assert!(filters.is_unconstrained());
    }

    // ========== Handlers ==========

    #[tokio::test]
    async fn test_create_string_returns_created() {
        let store = setup();
        let (status, Json(record)) = create_string(
            State(store.clone()),
            Some(Json(json!({"value": "hello world"}))),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(record.value, "hello world");
        assert_eq!(record.properties.word_count, 2);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_create_string_duplicate_conflict() {
        let store = setup();
        store.insert("hello").unwrap();

        let err = create_string(State(store), Some(Json(json!({"value": "hello"}))))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_create_string_missing_value() {
        let err = create_string(State(setup()), Some(Json(json!({}))))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_string_non_string_value() {
        let err = create_string(State(setup()), Some(Json(json!({"value": 123}))))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_get_string_found_and_missing() {
        let store = setup();
        store.insert("hello").unwrap();

        let Json(record) = get_string(State(store.clone()), Path("hello".to_string()))
            .await
            .unwrap();
        assert_eq!(record.value, "hello");

        let err = get_string(State(store), Path("absent".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_string_no_content_then_not_found() {
        let store = setup();
        store.insert("hello").unwrap();

        let status = delete_string(State(store.clone()), Path("hello".to_string()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let err = delete_string(State(store), Path("hello".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_root_returns_everything() {
        let store = setup();
        store.insert("one").unwrap();
        store.insert("two").unwrap();

        let Json(records) = list_root(State(store)).await;
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_list_strings_echoes_applied_filters() {
        let store = setup();
        store.insert("short").unwrap();

        let Json(response) = list_strings(
            State(store),
            Query(params(&[("min_length", "20")])),
        )
        .await
        .unwrap();

        assert!(response.data.is_empty());
        assert_eq!(response.count, 0);
        assert_eq!(
            serde_json::to_value(&response.filters_applied).unwrap(),
            json!({"min_length": 20})
        );
    }

    #[tokio::test]
    async fn test_list_strings_applies_conjunction() {
        let store = setup();
        store.insert("racecar").unwrap();
        store.insert("hi").unwrap();
        store.insert("not here").unwrap();

        let Json(response) = list_strings(
            State(store),
            Query(params(&[("is_palindrome", "true"), ("min_length", "5")])),
        )
        .await
        .unwrap();

        assert_eq!(response.count, 1);
        assert_eq!(response.data[0].value, "racecar");
    }

    #[tokio::test]
    async fn test_list_strings_rejects_malformed_param() {
        let err = list_strings(
            State(setup()),
            Query(params(&[("min_length", "many")])),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_filter_by_phrase_letter_z() {
        let store = setup();
        store.insert("puzzle").unwrap();
        store.insert("hello").unwrap();
        store.insert("zigzag").unwrap();

        let Json(response) = filter_by_phrase(
            State(store),
            Query(params(&[("query", "strings containing the letter z")])),
        )
        .await
        .unwrap();

        assert_eq!(response.count, 2);
        let values: Vec<&str> = response
            .data
            .iter()
            .map(|record| record.value.as_str())
            .collect();
        assert_eq!(values, vec!["puzzle", "zigzag"]);
        assert_eq!(
            response.interpreted_query.original,
            "strings containing the letter z"
        );
        assert_eq!(
            serde_json::to_value(&response.interpreted_query.parsed_filters).unwrap(),
            json!({"contains_character": "z"})
        );
    }

    #[tokio::test]
    async fn test_filter_by_phrase_unknown() {
        let err = filter_by_phrase(
            State(setup()),
            Query(params(&[("query", "strings that spark joy")])),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_filter_by_phrase_missing_query() {
        let err = filter_by_phrase(State(setup()), Query(params(&[])))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.0.to_string(), "Unable to parse natural language query");
    }
}
