//! Create swap activity - opens a new pending request

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::common::{Actor, DomainError, MemberId};
use crate::domains::swaps::models::{CreateSwap, MeetingType, SkillSnapshot, Swap};
use crate::kernel::ServerDeps;

/// Swap request as submitted by the requester
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSwapRequest {
    pub provider_id: MemberId,
    pub skill_offered: SkillSnapshot,
    pub skill_requested: SkillSnapshot,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub meeting_type: Option<MeetingType>,
    #[serde(default)]
    pub meeting_details: Option<String>,
}

fn clean_snapshot(mut snapshot: SkillSnapshot, which: &str) -> Result<SkillSnapshot, DomainError> {
    snapshot.skill = snapshot.skill.trim().to_string();
    if snapshot.skill.is_empty() {
        return Err(DomainError::validation(format!("{} skill name is required", which)));
    }
    Ok(snapshot)
}

/// Open a swap request from `actor` (the requester) to the provider.
///
/// The provider must exist, not be banned, and currently advertise the
/// requested skill in an entry that was not rejected (name match is
/// case-insensitive). Only one pending request may exist per
/// requester/provider/skill pair.
pub async fn create_swap(
    actor: &Actor,
    request: CreateSwapRequest,
    deps: &ServerDeps,
) -> Result<Swap, DomainError> {
    let requester = actor.member_id;
    let provider_id = request.provider_id;

    if requester == provider_id {
        return Err(DomainError::validation("Cannot create swap with yourself"));
    }
    let skill_offered = clean_snapshot(request.skill_offered, "Offered")?;
    let skill_requested = clean_snapshot(request.skill_requested, "Requested")?;
    if let Some(minutes) = request.duration_minutes {
        if minutes <= 0 {
            return Err(DomainError::validation(
                "Duration must be a positive number of minutes",
            ));
        }
    }

    let provider = deps
        .members
        .find_member(provider_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Provider"))?;

    if provider.ban.is_in_effect(Utc::now()) || !provider.is_active {
        warn!(provider_id = %provider_id, "Swap requested from unavailable provider");
        return Err(DomainError::validation("Provider is not available for swaps"));
    }

    if !provider.offers_skill(&skill_requested.skill) {
        debug!(
            provider_id = %provider_id,
            skill = %skill_requested.skill,
            "Provider does not offer requested skill"
        );
        return Err(DomainError::validation("Provider does not offer this skill"));
    }

    if deps
        .swaps
        .find_pending_duplicate(
            requester,
            provider_id,
            &skill_offered.skill,
            &skill_requested.skill,
        )
        .await?
        .is_some()
    {
        return Err(DomainError::validation(
            "A pending swap request already exists for these skills",
        ));
    }

    let input = CreateSwap {
        requester,
        provider: provider_id,
        skill_offered,
        skill_requested,
        message: request.message,
        scheduled_date: request.scheduled_date,
        duration_minutes: request.duration_minutes,
        meeting_type: request.meeting_type,
        meeting_details: request.meeting_details,
    };
    let swap = Swap::new(input, &deps.swap_defaults, Utc::now());

    // The store rejects a racing duplicate with `Duplicate`, surfaced as Validation
    let created = deps.swaps.insert_swap(&swap).await?;

    info!(
        swap_id = %created.id,
        requester = %requester,
        provider = %provider_id,
        "Swap request created"
    );
    Ok(created)
}
