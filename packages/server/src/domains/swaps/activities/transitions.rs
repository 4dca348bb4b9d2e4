//! Swap transition activities
//!
//! Every transition goes through `run_transition`: load, apply the machine,
//! persist with the version read. A version conflict is retried once against
//! the freshly read record; a second conflict surfaces as `InvalidState`
//! carrying the fresh status.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::common::{Actor, DomainError, SwapId};
use crate::domains::member::activities::rating_applied;
use crate::domains::member::models::{FeedbackRating, Member};
use crate::domains::swaps::machines::{self, ScheduleUpdate, SwapCommand};
use crate::domains::swaps::models::Swap;
use crate::kernel::{ServerDeps, StoreError};

const MAX_ATTEMPTS: u32 = 2;

/// What a persisted transition produced
#[derive(Debug, Clone)]
pub enum TransitionOutcome {
    Updated(Swap),
    FeedbackRecorded { swap: Swap, rated_member: Member },
    Deleted,
}

impl TransitionOutcome {
    fn into_swap(self) -> Result<Swap, DomainError> {
        match self {
            TransitionOutcome::Updated(swap) => Ok(swap),
            TransitionOutcome::FeedbackRecorded { swap, .. } => Ok(swap),
            TransitionOutcome::Deleted => Err(anyhow::anyhow!("Swap was deleted").into()),
        }
    }
}

pub(crate) async fn load_swap(swap_id: SwapId, deps: &ServerDeps) -> Result<Swap, DomainError> {
    deps.swaps
        .find_swap(swap_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Swap"))
}

/// Write `next` (computed from `current`) with the store operation the command needs.
async fn persist(
    command: &SwapCommand,
    actor: &Actor,
    current: &Swap,
    next: Swap,
    deps: &ServerDeps,
) -> Result<TransitionOutcome, StoreError> {
    let version = current.version;

    match command {
        SwapCommand::Complete => deps
            .swaps
            .complete_swap(&next, version)
            .await
            .map(TransitionOutcome::Updated),

        SwapCommand::SubmitFeedback { rating, .. } => {
            let rated = next
                .counterpart(actor.member_id)
                .ok_or_else(|| anyhow::anyhow!("Feedback author is not a participant"))?;
            let (swap, rated_member) = deps
                .swaps
                .record_feedback(&next, version, rated, *rating)
                .await?;
            Ok(TransitionOutcome::FeedbackRecorded { swap, rated_member })
        }

        SwapCommand::Delete => {
            deps.swaps.delete_swap(current.id, version).await?;
            Ok(TransitionOutcome::Deleted)
        }

        _ => deps
            .swaps
            .update_swap(&next, version)
            .await
            .map(TransitionOutcome::Updated),
    }
}

/// Apply `command` to a swap with optimistic concurrency.
pub(crate) async fn run_transition(
    swap_id: SwapId,
    actor: &Actor,
    command: SwapCommand,
    deps: &ServerDeps,
) -> Result<TransitionOutcome, DomainError> {
    let mut swap = load_swap(swap_id, deps).await?;
    let mut attempt = 1;

    loop {
        let next = machines::apply(&swap, actor, &command, Utc::now())?;

        match persist(&command, actor, &swap, next, deps).await {
            Ok(outcome) => {
                info!(
                    swap_id = %swap_id,
                    member_id = %actor.member_id,
                    command = command.name(),
                    "Swap transition applied"
                );
                return Ok(outcome);
            }
            Err(StoreError::VersionConflict) => {
                swap = load_swap(swap_id, deps).await?;
                if attempt >= MAX_ATTEMPTS {
                    warn!(
                        swap_id = %swap_id,
                        command = command.name(),
                        status = %swap.status,
                        "Swap kept changing underneath transition"
                    );
                    return Err(DomainError::invalid_state(
                        swap.status,
                        "Swap was modified concurrently",
                    ));
                }
                debug!(
                    swap_id = %swap_id,
                    command = command.name(),
                    attempt,
                    "Version conflict, retrying against fresh record"
                );
                attempt += 1;
            }
            Err(other) => return Err(other.into()),
        }
    }
}

/// Provider accepts a pending request
pub async fn accept_swap(
    actor: &Actor,
    swap_id: SwapId,
    deps: &ServerDeps,
) -> Result<Swap, DomainError> {
    run_transition(swap_id, actor, SwapCommand::Accept, deps)
        .await?
        .into_swap()
}

/// Provider rejects a pending request
pub async fn reject_swap(
    actor: &Actor,
    swap_id: SwapId,
    reason: Option<String>,
    deps: &ServerDeps,
) -> Result<Swap, DomainError> {
    run_transition(swap_id, actor, SwapCommand::Reject { reason }, deps)
        .await?
        .into_swap()
}

/// Either participant completes an accepted swap; both completed counters move
pub async fn complete_swap(
    actor: &Actor,
    swap_id: SwapId,
    deps: &ServerDeps,
) -> Result<Swap, DomainError> {
    run_transition(swap_id, actor, SwapCommand::Complete, deps)
        .await?
        .into_swap()
}

/// Either participant cancels a pending or accepted swap
pub async fn cancel_swap(
    actor: &Actor,
    swap_id: SwapId,
    deps: &ServerDeps,
) -> Result<Swap, DomainError> {
    run_transition(swap_id, actor, SwapCommand::Cancel, deps)
        .await?
        .into_swap()
}

/// Either participant reschedules an accepted swap
pub async fn update_swap_details(
    actor: &Actor,
    swap_id: SwapId,
    update: ScheduleUpdate,
    deps: &ServerDeps,
) -> Result<Swap, DomainError> {
    run_transition(swap_id, actor, SwapCommand::UpdateDetails(update), deps)
        .await?
        .into_swap()
}

/// Requester withdraws a pending request; the record is removed
pub async fn delete_swap(
    actor: &Actor,
    swap_id: SwapId,
    deps: &ServerDeps,
) -> Result<(), DomainError> {
    run_transition(swap_id, actor, SwapCommand::Delete, deps).await?;
    Ok(())
}

/// Result of a feedback submission
#[derive(Debug, Clone)]
pub struct FeedbackResult {
    pub swap: Swap,
    /// The other participant, with the rating folded in
    pub rated_member: Member,
}

/// Fill the caller's feedback slot on a completed swap and rate the other side.
///
/// `rating` must be within 1..=5; out-of-range values fail with `Validation`
/// before anything is read.
pub async fn submit_feedback(
    actor: &Actor,
    swap_id: SwapId,
    rating: i64,
    comment: Option<String>,
    deps: &ServerDeps,
) -> Result<FeedbackResult, DomainError> {
    let rating = FeedbackRating::new(rating)?;
    let comment = comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    match run_transition(swap_id, actor, SwapCommand::SubmitFeedback { rating, comment }, deps)
        .await?
    {
        TransitionOutcome::FeedbackRecorded { swap, rated_member } => {
            rating_applied(&rated_member, rating);
            info!(
                swap_id = %swap_id,
                rated_member = %rated_member.id,
                "Feedback recorded"
            );
            Ok(FeedbackResult { swap, rated_member })
        }
        other => Err(anyhow::anyhow!("Unexpected feedback outcome: {:?}", other).into()),
    }
}
