//! Ban lifecycle: ban and unban

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::common::{Actor, DomainError, MemberId, ModeratorCapability};
use crate::domains::member::models::{BanState, Member};
use crate::kernel::ServerDeps;

/// Longest time-limited ban, in days
pub const MAX_BAN_DAYS: i64 = 36_500;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BanRequest {
    #[serde(default)]
    pub reason: Option<String>,
    /// Absent for a permanent ban
    #[serde(default)]
    pub duration_days: Option<i64>,
}

/// Ban a member, permanently or for `duration_days`.
///
/// Moderators cannot be banned. Banning an already banned member replaces the
/// previous ban.
pub async fn ban_member(
    actor: &Actor,
    member_id: MemberId,
    request: BanRequest,
    deps: &ServerDeps,
) -> Result<Member, DomainError> {
    actor.can(ModeratorCapability::BanMembers).check()?;

    let duration_days = match request.duration_days {
        None => None,
        Some(days) if (1..=MAX_BAN_DAYS).contains(&days) => Some(days as u32),
        Some(_) => {
            return Err(DomainError::validation(format!(
                "Ban duration must be between 1 and {} days",
                MAX_BAN_DAYS
            )))
        }
    };

    let target = deps
        .members
        .find_member(member_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Member"))?;

    if target.is_moderator() {
        warn!(
            member_id = %member_id,
            moderator = %actor.member_id,
            "Attempt to ban a moderator"
        );
        return Err(DomainError::forbidden("Moderators cannot be banned"));
    }

    let reason = request
        .reason
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty());
    let ban = BanState::issued(reason, duration_days, actor.member_id, Utc::now());
    let banned = deps.members.set_ban(member_id, &ban).await?;

    info!(
        member_id = %member_id,
        moderator = %actor.member_id,
        expires_at = ?banned.ban.ban_expiry,
        "Member banned"
    );
    Ok(banned)
}

/// Lift a ban, clearing every ban field
pub async fn unban_member(
    actor: &Actor,
    member_id: MemberId,
    deps: &ServerDeps,
) -> Result<Member, DomainError> {
    actor.can(ModeratorCapability::BanMembers).check()?;

    let unbanned = deps.members.set_ban(member_id, &BanState::cleared()).await?;

    info!(member_id = %member_id, moderator = %actor.member_id, "Member unbanned");
    Ok(unbanned)
}
