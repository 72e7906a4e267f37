//! Error-to-HTTP mapping shared by every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
}

/// Maps a domain error to a status code and JSON body.
pub fn error_response(err: DomainError) -> Response {
    let status = match err.code {
        ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::SessionNotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidStateTransition
        | ErrorCode::FlowEnded
        | ErrorCode::LeadAlreadyCaptured
        | ErrorCode::IntakeIncomplete => StatusCode::CONFLICT,
        ErrorCode::LeadDeliveryFailed | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let body = ErrorResponse {
        code: err.code.to_string(),
        message: err.message,
        details: err.details,
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_misuse_maps_to_conflict() {
        let err = DomainError::new(ErrorCode::FlowEnded, "ended");
        let response = error_response(err);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn missing_session_maps_to_not_found() {
        let err = DomainError::new(ErrorCode::SessionNotFound, "gone");
        let response = error_response(err);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let err: DomainError =
            crate::domain::foundation::ValidationError::empty_field("name").into();
        let response = error_response(err);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
