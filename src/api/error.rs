//! API error surface
//!
//! Maps `ClubHubError` onto HTTP status codes with a JSON error body.
//! Domain errors become 4xx; infrastructure errors become 5xx and are
//! logged here so handlers stay free of error plumbing.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::utils::errors::ClubHubError;

/// Generic API error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ClubHubError {
    fn into_response(self) -> Response {
        let status = match &self {
            ClubHubError::UserNotFound { .. }
            | ClubHubError::ClubNotFound { .. }
            | ClubHubError::EventNotFound { .. }
            | ClubHubError::LocationNotFound { .. }
            | ClubHubError::MajorNotFound { .. }
            | ClubHubError::OrderNotFound { .. }
            | ClubHubError::RuleNotFound { .. }
            | ClubHubError::MessageNotFound { .. }
            | ClubHubError::FeedbackNotFound { .. } => StatusCode::NOT_FOUND,

            ClubHubError::InvalidInput(_) => StatusCode::BAD_REQUEST,

            ClubHubError::InsufficientPoints { .. }
            | ClubHubError::ScheduleConflict { .. }
            | ClubHubError::InvalidStateTransition { .. } => StatusCode::CONFLICT,

            ClubHubError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,

            ClubHubError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,

            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self, severity = %self.severity(), "Request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ClubHubError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_not_found_mapping() {
        assert_eq!(status_of(ClubHubError::EventNotFound { event_id: 7 }), StatusCode::NOT_FOUND);
        assert_eq!(status_of(ClubHubError::LocationNotFound { location_id: 3 }), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_mapping() {
        let err = ClubHubError::ScheduleConflict { location_id: 1, date: "2024-05-01".to_string() };
        assert_eq!(status_of(err), StatusCode::CONFLICT);

        let err = ClubHubError::InvalidStateTransition { from: "rejected".into(), to: "approved".into() };
        assert_eq!(status_of(err), StatusCode::CONFLICT);
    }

    #[test]
    fn test_bad_request_mapping() {
        let err = ClubHubError::InvalidInput("rating out of range".to_string());
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_infrastructure_errors_are_5xx() {
        let err = ClubHubError::Config("broken".to_string());
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
