use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{DomainError, MemberId};
use crate::domains::member::models::ReviewState;

/// A moderator's verdict on one offered skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum ReviewDecision {
    Approve,
    Reject {
        #[serde(default)]
        reason: String,
    },
}

impl ReviewDecision {
    pub fn name(&self) -> &'static str {
        match self {
            ReviewDecision::Approve => "approve",
            ReviewDecision::Reject { .. } => "reject",
        }
    }

    /// The terminal review sub-state this decision produces.
    pub fn review_state(
        &self,
        moderator: MemberId,
        now: DateTime<Utc>,
    ) -> Result<ReviewState, DomainError> {
        match self {
            ReviewDecision::Approve => Ok(ReviewState {
                is_approved: true,
                is_rejected: false,
                rejection_reason: None,
                reviewed_at: Some(now),
                reviewed_by: Some(moderator),
            }),
            ReviewDecision::Reject { reason } => {
                let reason = reason.trim();
                if reason.is_empty() {
                    return Err(DomainError::validation("A rejection reason is required"));
                }
                Ok(ReviewState {
                    is_approved: false,
                    is_rejected: true,
                    rejection_reason: Some(reason.to_string()),
                    reviewed_at: Some(now),
                    reviewed_by: Some(moderator),
                })
            }
        }
    }
}
