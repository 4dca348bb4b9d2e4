//! Member registration and profile routes

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::{optional_actor, require_member};
use crate::common::{DomainError, MemberId};
use crate::domains::member::activities::{
    get_public_profile, member_swap_stats, register_member, update_profile, ProfileUpdate,
};
use crate::domains::member::MemberData;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// POST /api/members
pub async fn register_handler(
    Extension(state): Extension<AxumAppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(body) = body?;
    let deps = &state.deps;
    let member = register_member(body.name, body.email, body.location, deps).await?;
    let token = deps
        .jwt_service
        .create_token(member.id)
        .map_err(DomainError::from)?;

    info!(member_id = %member.id, "Member registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "member": MemberData::full(member),
            "token": token,
        })),
    ))
}

/// GET /api/members/me
pub async fn me_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
) -> Result<Json<Value>, ApiError> {
    let (member, _) = require_member(auth_user, &state.deps).await?;

    Ok(Json(json!({
        "success": true,
        "member": MemberData::full(member),
    })))
}

/// PUT /api/members/me/profile
pub async fn update_profile_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    body: Result<Json<ProfileUpdate>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let (member, _) = require_member(auth_user, &state.deps).await?;
    let Json(body) = body?;
    let updated = update_profile(member.id, body, &state.deps).await?;

    Ok(Json(json!({
        "success": true,
        "member": MemberData::full(updated),
    })))
}

/// GET /api/members/me/stats
pub async fn stats_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
) -> Result<Json<Value>, ApiError> {
    let (member, _) = require_member(auth_user, &state.deps).await?;
    let stats = member_swap_stats(member.id, &state.deps).await?;

    Ok(Json(json!({
        "success": true,
        "stats": stats,
    })))
}

/// GET /api/members/:id
pub async fn profile_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    member_id: Result<Path<MemberId>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let viewer = optional_actor(auth_user, &state.deps).await?;
    let Path(member_id) = member_id?;
    let member = get_public_profile(viewer.as_ref(), member_id, &state.deps).await?;

    Ok(Json(json!({
        "success": true,
        "member": member,
    })))
}
