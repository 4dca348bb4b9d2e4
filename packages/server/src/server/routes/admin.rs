//! Moderator routes

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Extension, Path, Query,
    },
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::require_member;
use crate::common::{MemberId, ModeratorCapability, SkillEntryId, SwapId};
use crate::domains::member::models::MemberStatusFilter;
use crate::domains::member::MemberData;
use crate::domains::moderation::activities::{
    ban_member, dashboard_stats, force_cancel_swap, list_members, list_swaps, member_detail,
    pending_skills, review_skill, unban_member, BanRequest,
};
use crate::domains::moderation::ReviewDecision;
use crate::domains::swaps::models::SwapStatus;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

#[derive(Debug, Default, Deserialize)]
pub struct StatusQuery {
    pub status: Option<SwapStatus>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MemberStatusQuery {
    pub status: Option<MemberStatusFilter>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ForceCancelBody {
    pub reason: Option<String>,
}

/// GET /api/admin/dashboard
pub async fn dashboard_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
) -> Result<Json<Value>, ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    let stats = dashboard_stats(&actor, &state.deps).await?;

    Ok(Json(json!({
        "success": true,
        "stats": stats,
    })))
}

/// GET /api/admin/members?status=active|banned|inactive
pub async fn list_members_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    query: Result<Query<MemberStatusQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    let Query(query) = query?;
    let members = list_members(&actor, query.status, &state.deps).await?;

    Ok(Json(json!({
        "success": true,
        "count": members.len(),
        "members": members,
    })))
}

/// GET /api/admin/members/:id
pub async fn member_detail_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    member_id: Result<Path<MemberId>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    let Path(member_id) = member_id?;
    let detail = member_detail(&actor, member_id, &state.deps).await?;

    Ok(Json(json!({
        "success": true,
        "member": detail.member,
        "recent_swaps": detail.recent_swaps,
    })))
}

/// PATCH /api/admin/members/:id/ban
pub async fn ban_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    member_id: Result<Path<MemberId>, PathRejection>,
    request: Result<Json<BanRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    actor.can(ModeratorCapability::BanMembers).check()?;
    let Path(member_id) = member_id?;
    let Json(request) = request?;
    let member = ban_member(&actor, member_id, request, &state.deps).await?;

    Ok(Json(json!({
        "success": true,
        "member": MemberData::full(member),
    })))
}

/// PATCH /api/admin/members/:id/unban
pub async fn unban_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    member_id: Result<Path<MemberId>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    let Path(member_id) = member_id?;
    let member = unban_member(&actor, member_id, &state.deps).await?;

    Ok(Json(json!({
        "success": true,
        "member": MemberData::full(member),
    })))
}

/// PATCH /api/admin/members/:id/skills/:skill_id/review
pub async fn review_skill_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    path: Result<Path<(MemberId, SkillEntryId)>, PathRejection>,
    decision: Result<Json<ReviewDecision>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    actor.can(ModeratorCapability::ReviewSkills).check()?;
    let Path((member_id, skill_id)) = path?;
    let Json(decision) = decision?;
    let member = review_skill(&actor, member_id, skill_id, decision, &state.deps).await?;

    Ok(Json(json!({
        "success": true,
        "member": MemberData::full(member),
    })))
}

/// GET /api/admin/skills/pending
pub async fn pending_skills_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
) -> Result<Json<Value>, ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    let members = pending_skills(&actor, &state.deps).await?;

    Ok(Json(json!({
        "success": true,
        "members": members,
    })))
}

/// GET /api/admin/swaps?status=
pub async fn list_swaps_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    let Query(query) = query?;
    let swaps = list_swaps(&actor, query.status, &state.deps).await?;

    Ok(Json(json!({
        "success": true,
        "count": swaps.len(),
        "swaps": swaps,
    })))
}

/// PATCH /api/admin/swaps/:id/force-cancel
pub async fn force_cancel_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    swap_id: Result<Path<SwapId>, PathRejection>,
    body: Option<Json<ForceCancelBody>>,
) -> Result<Json<Value>, ApiError> {
    let (_, actor) = require_member(auth_user, &state.deps).await?;
    let Path(swap_id) = swap_id?;
    let reason = body.and_then(|Json(b)| b.reason);
    let swap = force_cancel_swap(&actor, swap_id, reason, &state.deps).await?;

    Ok(Json(json!({
        "success": true,
        "swap": swap,
    })))
}
