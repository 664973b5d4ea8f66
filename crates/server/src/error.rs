//! HTTP mapping for core errors
//!
//! The core signals failures as [`stringvault_core::Error`]; this module is
//! the only place where error kinds meet HTTP vocabulary. Each kind maps to
//! exactly one status code and one fixed JSON body.
//!
//! Two body shapes exist on the wire: filter-parameter validation failures
//! use a bare `error` key, everything else uses a `status`/`message` pair.
//! Both shapes (and the message strings themselves) are part of the service
//! contract.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use stringvault_core::Error;

/// A core error carried to the HTTP boundary.
#[derive(Debug, PartialEq, Eq)]
pub struct ApiError(pub Error);

/// `status`/`message` error body.
#[derive(Debug, Serialize)]
struct StatusMessageBody {
    status: &'static str,
    message: String,
}

/// Bare `error` body used for filter parameter validation failures.
#[derive(Debug, Serialize)]
struct ParamErrorBody {
    error: String,
}

impl ApiError {
    /// The status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self.0 {
            Error::MissingField => StatusCode::BAD_REQUEST,
            Error::WrongType => StatusCode::UNPROCESSABLE_ENTITY,
            Error::DuplicateValue { .. } => StatusCode::CONFLICT,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::InvalidFilterParam { .. } => StatusCode::BAD_REQUEST,
            Error::UnrecognizedPhrase { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.0.to_string();
        match self.0 {
            Error::InvalidFilterParam { .. } => {
                (status, Json(ParamErrorBody { error: message })).into_response()
            }
            _ => (
                status,
                Json(StatusMessageBody {
                    status: "error",
                    message,
                }),
            )
                .into_response(),
        }
    }
}
