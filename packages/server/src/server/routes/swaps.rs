//! Swap lifecycle routes

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::require_member;
use crate::common::SwapId;
use crate::domains::member::MemberData;
use crate::domains::swaps::activities::{
    accept_swap, cancel_swap, complete_swap, create_swap, delete_swap, get_swap,
    list_member_swaps, reject_swap, submit_feedback, update_swap_details, CreateSwapRequest,
};
use crate::domains::swaps::models::{ParticipantFilter, SwapStatus};
use crate::domains::swaps::{ScheduleUpdate, Swap};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

#[derive(Debug, Default, Deserialize)]
pub struct ListSwapsQuery {
    #[serde(rename = "type", default)]
    pub side: ParticipantFilter,
    pub status: Option<SwapStatus>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RejectBody {
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackBody {
    pub rating: i64,
    #[serde(default)]
    pub comment: Option<String>,
}

fn swap_response(swap: Swap) -> Json<Value> {
    Json(json!({
        "success": true,
        "swap": swap,
    }))
}

/// POST /api/swaps
pub async fn create_swap_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    body: Result<Json<CreateSwapRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    let Json(body) = body?;
    let swap = create_swap(&actor, body, &state.deps).await?;

    Ok((StatusCode::CREATED, swap_response(swap)))
}

/// GET /api/swaps?type=sent|received|all&status=
pub async fn list_swaps_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    query: Result<Query<ListSwapsQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    let Query(query) = query?;
    let swaps = list_member_swaps(&actor, query.side, query.status, &state.deps).await?;

    Ok(Json(json!({
        "success": true,
        "count": swaps.len(),
        "swaps": swaps,
    })))
}

/// GET /api/swaps/:id
pub async fn get_swap_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    swap_id: Result<Path<SwapId>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    let Path(swap_id) = swap_id?;
    let swap = get_swap(&actor, swap_id, &state.deps).await?;

    Ok(swap_response(swap))
}

/// PATCH /api/swaps/:id
pub async fn update_swap_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    swap_id: Result<Path<SwapId>, PathRejection>,
    body: Result<Json<ScheduleUpdate>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    let Path(swap_id) = swap_id?;
    let Json(body) = body?;
    let swap = update_swap_details(&actor, swap_id, body, &state.deps).await?;

    Ok(swap_response(swap))
}

/// DELETE /api/swaps/:id
pub async fn delete_swap_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    swap_id: Result<Path<SwapId>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    let Path(swap_id) = swap_id?;
    delete_swap(&actor, swap_id, &state.deps).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Swap request deleted",
    })))
}

/// PATCH /api/swaps/:id/accept
pub async fn accept_swap_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    swap_id: Result<Path<SwapId>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    let Path(swap_id) = swap_id?;
    let swap = accept_swap(&actor, swap_id, &state.deps).await?;

    Ok(swap_response(swap))
}

/// PATCH /api/swaps/:id/reject
pub async fn reject_swap_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    swap_id: Result<Path<SwapId>, PathRejection>,
    body: Option<Json<RejectBody>>,
) -> Result<Json<Value>, ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    let Path(swap_id) = swap_id?;
    let reason = body.and_then(|Json(b)| b.reason);
    let swap = reject_swap(&actor, swap_id, reason, &state.deps).await?;

    Ok(swap_response(swap))
}

/// PATCH /api/swaps/:id/complete
pub async fn complete_swap_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    swap_id: Result<Path<SwapId>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    let Path(swap_id) = swap_id?;
    let swap = complete_swap(&actor, swap_id, &state.deps).await?;

    Ok(swap_response(swap))
}

/// PATCH /api/swaps/:id/cancel
pub async fn cancel_swap_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    swap_id: Result<Path<SwapId>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    let Path(swap_id) = swap_id?;
    let swap = cancel_swap(&actor, swap_id, &state.deps).await?;

    Ok(swap_response(swap))
}

/// POST /api/swaps/:id/feedback
pub async fn feedback_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    swap_id: Result<Path<SwapId>, PathRejection>,
    body: Result<Json<FeedbackBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    let Path(swap_id) = swap_id?;
    let Json(body) = body?;
    let result = submit_feedback(&actor, swap_id, body.rating, body.comment, &state.deps).await?;

    Ok(Json(json!({
        "success": true,
        "swap": result.swap,
        "rated_member": MemberData::public(result.rated_member),
    })))
}
