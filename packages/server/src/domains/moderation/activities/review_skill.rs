//! Skill review: approve or reject one pending offered skill

use chrono::Utc;
use tracing::{debug, info};

use crate::common::{Actor, DomainError, MemberId, ModeratorCapability, SkillEntryId};
use crate::domains::member::models::Member;
use crate::domains::moderation::models::ReviewDecision;
use crate::kernel::{ServerDeps, StoreError};

async fn load_with_skill(
    member_id: MemberId,
    skill_id: SkillEntryId,
    deps: &ServerDeps,
) -> Result<Member, DomainError> {
    let member = deps
        .members
        .find_member(member_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Member"))?;
    if member.offered_skill(skill_id).is_none() {
        return Err(DomainError::not_found("Skill"));
    }
    Ok(member)
}

/// Apply a moderator's decision to a pending offered skill.
///
/// Approved and rejected are terminal: reviewing an entry that is no longer
/// pending fails with `InvalidState` carrying its current review status.
pub async fn review_skill(
    actor: &Actor,
    member_id: MemberId,
    skill_id: SkillEntryId,
    decision: ReviewDecision,
    deps: &ServerDeps,
) -> Result<Member, DomainError> {
    actor.can(ModeratorCapability::ReviewSkills).check()?;

    let review = decision.review_state(actor.member_id, Utc::now())?;

    let member = load_with_skill(member_id, skill_id, deps).await?;
    if let Some(entry) = member.offered_skill(skill_id) {
        if !entry.review.is_pending() {
            return Err(DomainError::invalid_state(
                entry.review.status(),
                "Only pending skills can be reviewed",
            ));
        }
    }

    match deps
        .members
        .record_skill_review(member_id, skill_id, &review)
        .await
    {
        Ok(updated) => {
            info!(
                member_id = %member_id,
                skill_id = %skill_id,
                decision = decision.name(),
                moderator = %actor.member_id,
                "Skill reviewed"
            );
            Ok(updated)
        }
        Err(StoreError::VersionConflict) => {
            // Another moderator reviewed it between our read and write
            debug!(skill_id = %skill_id, "Skill review lost a race");
            let fresh = load_with_skill(member_id, skill_id, deps).await?;
            let status = fresh
                .offered_skill(skill_id)
                .map(|entry| entry.review.status().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            Err(DomainError::invalid_state(
                status,
                "Only pending skills can be reviewed",
            ))
        }
        Err(other) => Err(other.into()),
    }
}
