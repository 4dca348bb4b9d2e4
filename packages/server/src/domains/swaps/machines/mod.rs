//! Swap state machine - pure transition logic, no I/O
//!
//! `apply` checks the actor's role first, then the swap's status, and returns
//! the transitioned record. Persisting it (and retrying on a version
//! conflict) is the caller's job.
//!
//! ```text
//! pending ──accept──▶ accepted ──complete──▶ completed
//!    │                   │
//!    ├──reject──▶ rejected
//!    └──cancel / force-cancel──▶ cancelled ◀──┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::common::{Actor, DomainError, MemberId};
use crate::domains::member::models::FeedbackRating;
use crate::domains::swaps::models::{AdminCancel, Feedback, MeetingType, Swap, SwapStatus};

/// Which side of the swap a member is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participant {
    Requester,
    Provider,
}

impl Participant {
    pub fn of(swap: &Swap, member: MemberId) -> Option<Self> {
        if member == swap.requester {
            Some(Participant::Requester)
        } else if member == swap.provider {
            Some(Participant::Provider)
        } else {
            None
        }
    }
}

/// Scheduling edits allowed on an accepted swap. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleUpdate {
    #[serde(default)]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub meeting_type: Option<MeetingType>,
    #[serde(default)]
    pub meeting_details: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SwapCommand {
    Accept,
    Reject { reason: Option<String> },
    Complete,
    Cancel,
    ForceCancel { reason: Option<String> },
    UpdateDetails(ScheduleUpdate),
    Delete,
    SubmitFeedback {
        rating: FeedbackRating,
        comment: Option<String>,
    },
}

impl SwapCommand {
    pub fn name(&self) -> &'static str {
        match self {
            SwapCommand::Accept => "accept",
            SwapCommand::Reject { .. } => "reject",
            SwapCommand::Complete => "complete",
            SwapCommand::Cancel => "cancel",
            SwapCommand::ForceCancel { .. } => "force_cancel",
            SwapCommand::UpdateDetails(_) => "update_details",
            SwapCommand::Delete => "delete",
            SwapCommand::SubmitFeedback { .. } => "submit_feedback",
        }
    }
}

fn forbidden(swap: &Swap, actor: &Actor, command: &SwapCommand, reason: &str) -> DomainError {
    warn!(
        swap_id = %swap.id,
        member_id = %actor.member_id,
        command = command.name(),
        "{}",
        reason
    );
    DomainError::forbidden(reason)
}

fn require_participant(
    swap: &Swap,
    actor: &Actor,
    command: &SwapCommand,
) -> Result<Participant, DomainError> {
    Participant::of(swap, actor.member_id)
        .ok_or_else(|| forbidden(swap, actor, command, "Only swap participants can do this"))
}

fn require_status(swap: &Swap, allowed: &[SwapStatus], reason: &str) -> Result<(), DomainError> {
    if allowed.contains(&swap.status) {
        Ok(())
    } else {
        Err(DomainError::invalid_state(swap.status, reason))
    }
}

/// Compute the swap that results from `command`, or the guard that failed.
///
/// `Delete` yields the unchanged record once its guards pass.
pub fn apply(
    swap: &Swap,
    actor: &Actor,
    command: &SwapCommand,
    now: DateTime<Utc>,
) -> Result<Swap, DomainError> {
    debug!(
        swap_id = %swap.id,
        status = %swap.status,
        command = command.name(),
        "Evaluating swap transition"
    );

    let mut next = swap.clone();

    match command {
        SwapCommand::Accept => {
            if actor.member_id != swap.provider {
                return Err(forbidden(swap, actor, command, "Only the provider can accept a swap"));
            }
            require_status(swap, &[SwapStatus::Pending], "Only pending swaps can be accepted")?;
            next.status = SwapStatus::Accepted;
        }

        SwapCommand::Reject { reason } => {
            if actor.member_id != swap.provider {
                return Err(forbidden(swap, actor, command, "Only the provider can reject a swap"));
            }
            require_status(swap, &[SwapStatus::Pending], "Only pending swaps can be rejected")?;
            next.status = SwapStatus::Rejected;
            next.rejected_at = Some(now);
            next.rejection_reason = reason.clone();
        }

        SwapCommand::Complete => {
            require_participant(swap, actor, command)?;
            require_status(swap, &[SwapStatus::Accepted], "Only accepted swaps can be completed")?;
            next.status = SwapStatus::Completed;
            next.completed_at = Some(now);
        }

        SwapCommand::Cancel => {
            require_participant(swap, actor, command)?;
            require_status(
                swap,
                &[SwapStatus::Pending, SwapStatus::Accepted],
                "Only pending or accepted swaps can be cancelled",
            )?;
            next.status = SwapStatus::Cancelled;
        }

        SwapCommand::ForceCancel { reason } => {
            if !actor.is_moderator {
                return Err(forbidden(swap, actor, command, "Moderator privileges required"));
            }
            require_status(
                swap,
                &[SwapStatus::Pending, SwapStatus::Accepted],
                "Only pending or accepted swaps can be cancelled",
            )?;
            next.status = SwapStatus::Cancelled;
            next.admin_cancel = Some(AdminCancel {
                reason: reason.clone(),
                cancelled_by: actor.member_id,
                cancelled_at: now,
            });
        }

        SwapCommand::UpdateDetails(update) => {
            require_participant(swap, actor, command)?;
            require_status(
                swap,
                &[SwapStatus::Accepted],
                "Only accepted swaps can be rescheduled",
            )?;
            if let Some(minutes) = update.duration_minutes {
                if minutes <= 0 {
                    return Err(DomainError::validation("Duration must be a positive number of minutes"));
                }
                next.duration_minutes = minutes;
            }
            if let Some(date) = update.scheduled_date {
                next.scheduled_date = Some(date);
            }
            if let Some(meeting_type) = update.meeting_type {
                next.meeting_type = meeting_type;
            }
            if let Some(details) = &update.meeting_details {
                next.meeting_details = Some(details.clone());
            }
        }

        SwapCommand::Delete => {
            if actor.member_id != swap.requester {
                return Err(forbidden(swap, actor, command, "Only the requester can delete a swap"));
            }
            require_status(swap, &[SwapStatus::Pending], "Only pending swaps can be deleted")?;
            return Ok(next);
        }

        SwapCommand::SubmitFeedback { rating, comment } => {
            let participant = require_participant(swap, actor, command)?;
            require_status(
                swap,
                &[SwapStatus::Completed],
                "Feedback can only be left on completed swaps",
            )?;

            let slot = match participant {
                Participant::Requester => &mut next.feedback.requester_feedback,
                Participant::Provider => &mut next.feedback.provider_feedback,
            };
            if slot.is_some() {
                return Err(DomainError::AlreadySubmitted);
            }
            *slot = Some(Feedback {
                rating: *rating,
                comment: comment.clone(),
                submitted_at: now,
            });
        }
    }

    next.updated_at = now;
    Ok(next)
}
