use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlacesError>;

const UPSTREAM_UNAVAILABLE: &str = "Places provider unavailable.";

/// A single violated request constraint.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("invalid request: {}", describe_violations(.0))]
    Validation(Vec<FieldError>),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("places provider responded with status {status}")]
    UpstreamHttp { status: u16, body: String },

    #[error("places provider returned an unreadable payload: {0}")]
    UpstreamProtocol(String),

    #[error("places provider unavailable: {0}")]
    Unavailable(String),
}

impl PlacesError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PlacesError::Validation(vec![FieldError::new(field, message)])
    }
}

fn describe_violations(violations: &[FieldError]) -> String {
    violations
        .iter()
        .map(|violation| format!("{}: {}", violation.field, violation.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl IntoResponse for PlacesError {
    fn into_response(self) -> Response {
        return match self {
            PlacesError::Validation(violations) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "detail": violations }))).into_response()
            }
            PlacesError::Configuration(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": message }))).into_response()
            }
            PlacesError::UpstreamHttp { .. } | PlacesError::UpstreamProtocol(_) | PlacesError::Unavailable(_) => {
                (StatusCode::BAD_GATEWAY, Json(json!({ "detail": UPSTREAM_UNAVAILABLE }))).into_response()
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_every_violation() {
        let err = PlacesError::Validation(vec![
            FieldError::new("query", "must not be empty"),
            FieldError::new("limit", "must be between 1 and 20"),
        ]);

        assert_eq!(
            err.to_string(),
            "invalid request: query: must not be empty; limit: must be between 1 and 20"
        );
    }

    #[test]
    fn upstream_failures_hide_detail_behind_bad_gateway() {
        let response = PlacesError::UpstreamHttp {
            status: 500,
            body: "internal stack trace".to_string(),
        }.into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        for err in [
            PlacesError::UpstreamProtocol("invalid JSON".into()),
            PlacesError::Unavailable("timeout".into()),
        ] {
            assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
        }
    }

    #[test]
    fn caller_fixable_errors_keep_their_status() {
        assert_eq!(
            PlacesError::validation("query", "must not be empty").into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            PlacesError::Configuration("missing key".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
