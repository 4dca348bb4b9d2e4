//! Authentication-path read of a member

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::common::{Actor, AuthError, DomainError, MemberId};
use crate::domains::member::models::Member;
use crate::kernel::ServerDeps;

/// Load the caller's member record for an authenticated request.
///
/// An expired time-limited ban is cleared here as a side effect, so it heals
/// on the next access instead of waiting for a sweep. Banned or inactive
/// members are refused. On success `last_active` is refreshed.
pub async fn authenticate(member_id: MemberId, deps: &ServerDeps) -> Result<Member, DomainError> {
    let now = Utc::now();
    let mut member = deps
        .members
        .find_member(member_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Member"))?;

    if member.ban.has_expired(now) {
        match deps.members.clear_expired_ban(member_id, now).await? {
            Some(healed) => {
                info!(member_id = %member_id, "Expired ban cleared");
                member = healed;
            }
            None => {
                // The ban changed between our read and the conditional clear
                debug!(member_id = %member_id, "Ban changed concurrently, re-reading");
                member = deps
                    .members
                    .find_member(member_id)
                    .await?
                    .ok_or_else(|| DomainError::not_found("Member"))?;
            }
        }
    }

    if member.ban.is_in_effect(now) {
        warn!(member_id = %member_id, "Banned member refused");
        return Err(AuthError::Banned {
            reason: member.ban.ban_reason.clone(),
            expires_at: member.ban.ban_expiry,
        }
        .into());
    }

    if !member.is_active {
        warn!(member_id = %member_id, "Inactive member refused");
        return Err(AuthError::Inactive.into());
    }

    deps.members.touch_last_active(member_id, now).await?;
    member.last_active = now;

    Ok(member)
}

/// Authorization view of an authenticated member
pub fn actor_for(member: &Member) -> Actor {
    Actor::new(member.id, member.is_moderator())
}
