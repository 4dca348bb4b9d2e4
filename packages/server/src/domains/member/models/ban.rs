use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::common::MemberId;

/// Ban sub-state of a member.
///
/// When `is_banned` is false every other field is `None`. A `ban_expiry` of
/// `None` on a banned member means the ban is permanent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BanState {
    pub is_banned: bool,
    pub ban_reason: Option<String>,
    pub ban_expiry: Option<DateTime<Utc>>,
    pub banned_at: Option<DateTime<Utc>>,
    pub banned_by: Option<MemberId>,
}

impl BanState {
    /// Not banned, all fields cleared
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Ban issued by `moderator` at `now`, lasting `duration_days` or forever.
    pub fn issued(
        reason: Option<String>,
        duration_days: Option<u32>,
        moderator: MemberId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            is_banned: true,
            ban_reason: reason,
            ban_expiry: duration_days.map(|days| now + Duration::days(i64::from(days))),
            banned_at: Some(now),
            banned_by: Some(moderator),
        }
    }

    pub fn is_permanent(&self) -> bool {
        self.is_banned && self.ban_expiry.is_none()
    }

    /// True when a time-limited ban has run out and should self-heal.
    pub fn has_expired(&self, now: DateTime<Utc>) -> bool {
        match self.ban_expiry {
            Some(expiry) => self.is_banned && now > expiry,
            None => false,
        }
    }

    /// Banned right now, taking expiry into account.
    pub fn is_in_effect(&self, now: DateTime<Utc>) -> bool {
        self.is_banned && !self.has_expired(now)
    }
}
