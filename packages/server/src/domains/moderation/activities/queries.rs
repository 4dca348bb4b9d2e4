//! Moderator read operations

use chrono::{Duration, Utc};

use crate::common::{Actor, DomainError, MemberId, ModeratorCapability};
use crate::domains::member::models::MemberStatusFilter;
use crate::domains::member::MemberData;
use crate::domains::moderation::data::{DashboardStats, MemberDetail, PendingSkills, SwapActivity};
use crate::domains::swaps::models::{ParticipantFilter, Swap, SwapFilter, SwapStatus};
use crate::kernel::ServerDeps;

/// Swaps shown alongside a member on the detail view
const RECENT_SWAPS: i64 = 10;

/// Window for the dashboard's `recent` counts
pub const RECENT_ACTIVITY_DAYS: i64 = 30;

pub async fn dashboard_stats(actor: &Actor, deps: &ServerDeps) -> Result<DashboardStats, DomainError> {
    actor.can(ModeratorCapability::ViewPlatform).check()?;

    let since = Utc::now() - Duration::days(RECENT_ACTIVITY_DAYS);

    Ok(DashboardStats {
        members: deps.members.member_counts(since).await?,
        swaps: SwapActivity {
            by_status: deps.swaps.count_swaps_by_status(None).await?,
            recent: deps.swaps.count_swaps_created_since(since).await?,
        },
    })
}

/// Members filtered by account status, newest first, with moderator-level detail
pub async fn list_members(
    actor: &Actor,
    status: Option<MemberStatusFilter>,
    deps: &ServerDeps,
) -> Result<Vec<MemberData>, DomainError> {
    actor.can(ModeratorCapability::ViewPlatform).check()?;

    let members = deps.members.find_members(status).await?;
    Ok(members.into_iter().map(MemberData::full).collect())
}

pub async fn member_detail(
    actor: &Actor,
    member_id: MemberId,
    deps: &ServerDeps,
) -> Result<MemberDetail, DomainError> {
    actor.can(ModeratorCapability::ViewPlatform).check()?;

    let member = deps
        .members
        .find_member(member_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Member"))?;

    let recent_swaps = deps
        .swaps
        .find_swaps(&SwapFilter {
            participant: Some((member_id, ParticipantFilter::All)),
            status: None,
            limit: Some(RECENT_SWAPS),
        })
        .await?;

    Ok(MemberDetail {
        member: MemberData::full(member),
        recent_swaps,
    })
}

/// Every swap on the platform, newest first
pub async fn list_swaps(
    actor: &Actor,
    status: Option<SwapStatus>,
    deps: &ServerDeps,
) -> Result<Vec<Swap>, DomainError> {
    actor.can(ModeratorCapability::ViewPlatform).check()?;

    Ok(deps
        .swaps
        .find_swaps(&SwapFilter {
            participant: None,
            status,
            limit: None,
        })
        .await?)
}

/// Offered skills awaiting review, grouped per member
pub async fn pending_skills(actor: &Actor, deps: &ServerDeps) -> Result<Vec<PendingSkills>, DomainError> {
    actor.can(ModeratorCapability::ReviewSkills).check()?;

    let members = deps.members.find_members_with_pending_skills().await?;

    Ok(members
        .into_iter()
        .map(|member| {
            let pending_skills = member.pending_skills().into_iter().cloned().collect();
            PendingSkills {
                member_id: member.id,
                name: member.name,
                email: member.email,
                pending_skills,
            }
        })
        .filter(|group: &PendingSkills| !group.pending_skills.is_empty())
        .collect())
}
