//! Member read operations

use crate::common::{Actor, DomainError, MemberId};
use crate::domains::member::data::{MemberData, MemberStats};
use crate::domains::member::models::Member;
use crate::kernel::ServerDeps;

pub async fn get_member(member_id: MemberId, deps: &ServerDeps) -> Result<Member, DomainError> {
    deps.members
        .find_member(member_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Member"))
}

/// Profile as seen by `viewer` (anonymous when `None`).
///
/// Private profiles are visible only to their owner and moderators. Email
/// and ban state are shown to the same two audiences.
pub async fn get_public_profile(
    viewer: Option<&Actor>,
    member_id: MemberId,
    deps: &ServerDeps,
) -> Result<MemberData, DomainError> {
    let member = get_member(member_id, deps).await?;

    let privileged = viewer.map_or(false, |v| v.member_id == member_id || v.is_moderator);
    if privileged {
        return Ok(MemberData::full(member));
    }
    if !member.is_public {
        return Err(DomainError::forbidden("Profile is private"));
    }
    Ok(MemberData::public(member))
}

/// Summary of a member's swaps, rating and skills
pub async fn member_swap_stats(
    member_id: MemberId,
    deps: &ServerDeps,
) -> Result<MemberStats, DomainError> {
    let member = get_member(member_id, deps).await?;
    let swaps_by_status = deps.swaps.count_swaps_by_status(Some(member_id)).await?;

    Ok(MemberStats {
        completed_swaps: member.completed_swaps,
        rating: member.rating,
        skills_offered: member.skills_offered.len(),
        skills_wanted: member.skills_wanted.len(),
        joined_at: member.joined_at,
        swaps_by_status,
    })
}
