//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::kernel::ServerDeps;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{admin, health_handler, members, swaps};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: Arc<ServerDeps>,
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    // No configured origins means development: allow any
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps, allowed_origins: &[String]) -> Router {
    let jwt_service = deps.jwt_service.clone();
    let app_state = AxumAppState {
        deps: Arc::new(deps),
    };

    Router::new()
        .route("/health", get(health_handler))
        // Members
        .route("/api/members", post(members::register_handler))
        .route("/api/members/me", get(members::me_handler))
        .route("/api/members/me/profile", put(members::update_profile_handler))
        .route("/api/members/me/stats", get(members::stats_handler))
        .route("/api/members/:id", get(members::profile_handler))
        // Swaps
        .route(
            "/api/swaps",
            post(swaps::create_swap_handler).get(swaps::list_swaps_handler),
        )
        .route(
            "/api/swaps/:id",
            get(swaps::get_swap_handler)
                .patch(swaps::update_swap_handler)
                .delete(swaps::delete_swap_handler),
        )
        .route("/api/swaps/:id/accept", patch(swaps::accept_swap_handler))
        .route("/api/swaps/:id/reject", patch(swaps::reject_swap_handler))
        .route("/api/swaps/:id/complete", patch(swaps::complete_swap_handler))
        .route("/api/swaps/:id/cancel", patch(swaps::cancel_swap_handler))
        .route("/api/swaps/:id/feedback", post(swaps::feedback_handler))
        // Moderation
        .route("/api/admin/dashboard", get(admin::dashboard_handler))
        .route("/api/admin/members", get(admin::list_members_handler))
        .route("/api/admin/members/:id", get(admin::member_detail_handler))
        .route("/api/admin/members/:id/ban", patch(admin::ban_handler))
        .route("/api/admin/members/:id/unban", patch(admin::unban_handler))
        .route(
            "/api/admin/members/:id/skills/:skill_id/review",
            patch(admin::review_skill_handler),
        )
        .route("/api/admin/skills/pending", get(admin::pending_skills_handler))
        .route("/api/admin/swaps", get(admin::list_swaps_handler))
        .route(
            "/api/admin/swaps/:id/force-cancel",
            patch(admin::force_cancel_handler),
        )
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        }))
        .layer(Extension(app_state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_origins_are_skipped() {
        // Must not panic on a header-invalid origin
        let _ = cors_layer(&["http://localhost:3000".to_string(), "bad\norigin".to_string()]);
        let _ = cors_layer(&[]);
    }
}
