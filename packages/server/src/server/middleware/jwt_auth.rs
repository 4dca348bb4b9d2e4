use crate::common::MemberId;
use crate::domains::auth::JwtService;
use axum::{middleware::Next, response::Response};
use std::sync::Arc;
use tracing::debug;

/// Caller identity carried by a verified bearer token.
///
/// Only the token is checked here. Handlers still load the member to apply
/// ban expiry and resolve the role.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser {
    pub member_id: MemberId,
}

/// JWT authentication middleware
///
/// Extracts JWT token from Authorization header, verifies it, and adds AuthUser to request extensions.
/// If no token or invalid token, request continues without AuthUser (public access).
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    if let Some(user) = extract_auth_user(&request, &jwt_service) {
        debug!(member_id = %user.member_id, "Authenticated request");
        request.extensions_mut().insert(user);
    } else {
        debug!("No valid authentication token");
    }

    next.run(request).await
}

/// Extract and verify JWT token from request
fn extract_auth_user(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Option<AuthUser> {
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    // Accept both "Bearer <token>" and a raw token
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    let claims = jwt_service.verify_token(token).ok()?;

    Some(AuthUser {
        member_id: claims.member_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test_secret", "test_issuer".to_string())
    }

    #[test]
    fn test_extract_token_with_bearer() {
        let jwt_service = service();
        let member_id = MemberId::new();
        let token = jwt_service.create_token(member_id).unwrap();

        let request = axum::http::Request::builder()
            .header("authorization", format!("Bearer {}", token))
            .body(axum::body::Body::empty())
            .unwrap();

        let auth_user = extract_auth_user(&request, &jwt_service);
        assert_eq!(auth_user.map(|u| u.member_id), Some(member_id));
    }

    #[test]
    fn test_extract_token_without_bearer() {
        let jwt_service = service();
        let member_id = MemberId::new();
        let token = jwt_service.create_token(member_id).unwrap();

        let request = axum::http::Request::builder()
            .header("authorization", token)
            .body(axum::body::Body::empty())
            .unwrap();

        let auth_user = extract_auth_user(&request, &jwt_service);
        assert_eq!(auth_user.map(|u| u.member_id), Some(member_id));
    }

    #[test]
    fn test_no_auth_header() {
        let request = axum::http::Request::builder()
            .body(axum::body::Body::empty())
            .unwrap();

        assert!(extract_auth_user(&request, &service()).is_none());
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let other = JwtService::new("another_secret", "test_issuer".to_string());
        let token = other.create_token(MemberId::new()).unwrap();

        let request = axum::http::Request::builder()
            .header("authorization", format!("Bearer {}", token))
            .body(axum::body::Body::empty())
            .unwrap();

        assert!(extract_auth_user(&request, &service()).is_none());
    }

    #[test]
    fn test_invalid_token() {
        let request = axum::http::Request::builder()
            .header("authorization", "Bearer invalid_token")
            .body(axum::body::Body::empty())
            .unwrap();

        assert!(extract_auth_user(&request, &service()).is_none());
    }
}
