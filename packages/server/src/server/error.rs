//! Mapping of domain failures onto HTTP responses

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::common::{AuthError, DomainError};

/// Error type returned by every handler
#[derive(Debug)]
pub enum ApiError {
    /// No valid bearer token on a route that needs one
    Unauthenticated,
    Domain(DomainError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationRequired => ApiError::Unauthenticated,
            other => ApiError::Domain(other.into()),
        }
    }
}

// Extractor rejections (bad JSON, query string or path id) are validation errors.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Domain(DomainError::validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Domain(DomainError::validation(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Domain(DomainError::validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            ApiError::Unauthenticated => {
                let body = json!({
                    "success": false,
                    "kind": "unauthenticated",
                    "message": AuthError::AuthenticationRequired.to_string(),
                });
                return (StatusCode::UNAUTHORIZED, Json(body)).into_response();
            }
            ApiError::Domain(err) => err,
        };

        let status = match &err {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
            DomainError::InvalidState { .. } | DomainError::AlreadySubmitted => StatusCode::CONFLICT,
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &err {
            DomainError::Internal(e) => {
                error!(error = ?e, "Request failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let mut body = json!({
            "success": false,
            "kind": err.kind(),
            "message": message,
        });
        if let DomainError::InvalidState { status: current, .. } = &err {
            body["status"] = json!(current);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (DomainError::validation("bad"), StatusCode::BAD_REQUEST),
            (DomainError::not_found("Swap"), StatusCode::NOT_FOUND),
            (DomainError::forbidden("no"), StatusCode::FORBIDDEN),
            (
                DomainError::invalid_state("accepted", "not pending"),
                StatusCode::CONFLICT,
            ),
            (DomainError::AlreadySubmitted, StatusCode::CONFLICT),
            (
                DomainError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_missing_auth_is_401() {
        let response = ApiError::from(AuthError::AuthenticationRequired).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = ApiError::from(AuthError::Inactive).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
