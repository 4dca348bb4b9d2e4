use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};
use typed_builder::TypedBuilder;

use crate::common::{MemberId, SwapId};
use crate::config::SwapDefaults;
use crate::domains::member::models::{FeedbackRating, Member, SkillLevel};
use crate::kernel::StoreError;

/// Swap negotiation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

impl SwapStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SwapStatus::Rejected | SwapStatus::Completed | SwapStatus::Cancelled
        )
    }
}

impl std::fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwapStatus::Pending => write!(f, "pending"),
            SwapStatus::Accepted => write!(f, "accepted"),
            SwapStatus::Rejected => write!(f, "rejected"),
            SwapStatus::Completed => write!(f, "completed"),
            SwapStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for SwapStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(SwapStatus::Pending),
            "accepted" => Ok(SwapStatus::Accepted),
            "rejected" => Ok(SwapStatus::Rejected),
            "completed" => Ok(SwapStatus::Completed),
            "cancelled" => Ok(SwapStatus::Cancelled),
            _ => Err(anyhow::anyhow!("Invalid swap status: {}", s)),
        }
    }
}

/// How the session takes place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingType {
    #[serde(rename = "online")]
    Online,
    #[serde(rename = "in-person")]
    InPerson,
    #[serde(rename = "hybrid")]
    Hybrid,
}

impl std::fmt::Display for MeetingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeetingType::Online => write!(f, "online"),
            MeetingType::InPerson => write!(f, "in-person"),
            MeetingType::Hybrid => write!(f, "hybrid"),
        }
    }
}

impl std::str::FromStr for MeetingType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "online" => Ok(MeetingType::Online),
            "in-person" => Ok(MeetingType::InPerson),
            "hybrid" => Ok(MeetingType::Hybrid),
            _ => Err(anyhow::anyhow!("Invalid meeting type: {}", s)),
        }
    }
}

/// Copy of a skill taken when the swap was created. Later profile edits do
/// not touch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSnapshot {
    pub skill: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub level: Option<SkillLevel>,
}

/// One participant's rating of the other
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub rating: FeedbackRating,
    pub comment: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwapFeedback {
    pub requester_feedback: Option<Feedback>,
    pub provider_feedback: Option<Feedback>,
}

/// Recorded when a moderator force-cancels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminCancel {
    pub reason: Option<String>,
    pub cancelled_by: MemberId,
    pub cancelled_at: DateTime<Utc>,
}

/// Swap record. Plain data; transitions are computed by the swap machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swap {
    pub id: SwapId,
    pub requester: MemberId,
    pub provider: MemberId,

    pub skill_offered: SkillSnapshot,
    pub skill_requested: SkillSnapshot,

    pub status: SwapStatus,
    pub message: Option<String>,

    // Schedule
    pub scheduled_date: Option<DateTime<Utc>>,
    pub duration_minutes: i32,
    pub meeting_type: MeetingType,
    pub meeting_details: Option<String>,

    pub feedback: SwapFeedback,

    // Outcome
    pub rejected_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub admin_cancel: Option<AdminCancel>,

    /// Bumped on every persisted write; used for optimistic concurrency.
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for a new swap request
#[derive(Debug, Clone, TypedBuilder)]
pub struct CreateSwap {
    pub requester: MemberId,
    pub provider: MemberId,
    pub skill_offered: SkillSnapshot,
    pub skill_requested: SkillSnapshot,

    #[builder(default, setter(strip_option, into))]
    pub message: Option<String>,
    #[builder(default, setter(strip_option))]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[builder(default, setter(strip_option))]
    pub duration_minutes: Option<i32>,
    #[builder(default, setter(strip_option))]
    pub meeting_type: Option<MeetingType>,
    #[builder(default, setter(strip_option, into))]
    pub meeting_details: Option<String>,
}

/// Which side of a swap a member-scoped listing covers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantFilter {
    /// Requester
    Sent,
    /// Provider
    Received,
    #[default]
    All,
}

impl std::fmt::Display for ParticipantFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParticipantFilter::Sent => write!(f, "sent"),
            ParticipantFilter::Received => write!(f, "received"),
            ParticipantFilter::All => write!(f, "all"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SwapFilter {
    pub participant: Option<(MemberId, ParticipantFilter)>,
    pub status: Option<SwapStatus>,
    pub limit: Option<i64>,
}

impl SwapFilter {
    pub fn matches(&self, swap: &Swap) -> bool {
        let participant_ok = match self.participant {
            None => true,
            Some((member, ParticipantFilter::Sent)) => swap.requester == member,
            Some((member, ParticipantFilter::Received)) => swap.provider == member,
            Some((member, ParticipantFilter::All)) => swap.involves(member),
        };
        participant_ok && self.status.map_or(true, |status| swap.status == status)
    }
}

/// Swap counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapStatusCounts {
    pub total: i64,
    pub pending: i64,
    pub accepted: i64,
    pub rejected: i64,
    pub completed: i64,
    pub cancelled: i64,
}

impl SwapStatusCounts {
    pub fn add(&mut self, status: SwapStatus, n: i64) {
        self.total += n;
        match status {
            SwapStatus::Pending => self.pending += n,
            SwapStatus::Accepted => self.accepted += n,
            SwapStatus::Rejected => self.rejected += n,
            SwapStatus::Completed => self.completed += n,
            SwapStatus::Cancelled => self.cancelled += n,
        }
    }
}

impl Swap {
    /// New pending swap with configured defaults filled in.
    pub fn new(input: CreateSwap, defaults: &SwapDefaults, now: DateTime<Utc>) -> Self {
        Self {
            id: SwapId::new(),
            requester: input.requester,
            provider: input.provider,
            skill_offered: input.skill_offered,
            skill_requested: input.skill_requested,
            status: SwapStatus::Pending,
            message: input.message,
            scheduled_date: input.scheduled_date,
            duration_minutes: input.duration_minutes.unwrap_or(defaults.duration_minutes),
            meeting_type: input.meeting_type.unwrap_or(defaults.meeting_type),
            meeting_details: input.meeting_details,
            feedback: SwapFeedback::default(),
            rejected_at: None,
            rejection_reason: None,
            completed_at: None,
            admin_cancel: None,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn involves(&self, member: MemberId) -> bool {
        self.requester == member || self.provider == member
    }

    /// The participant on the other side, if `member` is one.
    pub fn counterpart(&self, member: MemberId) -> Option<MemberId> {
        if member == self.requester {
            Some(self.provider)
        } else if member == self.provider {
            Some(self.requester)
        } else {
            None
        }
    }
}

// =============================================================================
// SQL row
// =============================================================================

#[derive(sqlx::FromRow)]
struct SwapRow {
    id: SwapId,
    requester_id: MemberId,
    provider_id: MemberId,
    offered_skill: String,
    offered_description: Option<String>,
    offered_level: Option<String>,
    requested_skill: String,
    requested_description: Option<String>,
    requested_level: Option<String>,
    status: String,
    message: Option<String>,
    scheduled_date: Option<DateTime<Utc>>,
    duration_minutes: i32,
    meeting_type: String,
    meeting_details: Option<String>,
    requester_rating: Option<i16>,
    requester_comment: Option<String>,
    requester_submitted_at: Option<DateTime<Utc>>,
    provider_rating: Option<i16>,
    provider_comment: Option<String>,
    provider_submitted_at: Option<DateTime<Utc>>,
    rejected_at: Option<DateTime<Utc>>,
    rejection_reason: Option<String>,
    completed_at: Option<DateTime<Utc>>,
    admin_cancelled: bool,
    admin_cancel_reason: Option<String>,
    admin_cancelled_by: Option<MemberId>,
    admin_cancelled_at: Option<DateTime<Utc>>,
    version: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn parse_level(level: Option<String>) -> Result<Option<SkillLevel>> {
    level.map(|l| l.parse()).transpose()
}

fn feedback_slot(
    rating: Option<i16>,
    comment: Option<String>,
    submitted_at: Option<DateTime<Utc>>,
) -> Result<Option<Feedback>> {
    match (rating, submitted_at) {
        (Some(rating), Some(submitted_at)) => Ok(Some(Feedback {
            rating: FeedbackRating::new(i64::from(rating))
                .map_err(|e| anyhow::anyhow!("Stored rating out of range: {}", e))?,
            comment,
            submitted_at,
        })),
        _ => Ok(None),
    }
}

impl TryFrom<SwapRow> for Swap {
    type Error = anyhow::Error;

    fn try_from(row: SwapRow) -> Result<Self> {
        let admin_cancel = match (row.admin_cancelled, row.admin_cancelled_by, row.admin_cancelled_at) {
            (true, Some(cancelled_by), Some(cancelled_at)) => Some(AdminCancel {
                reason: row.admin_cancel_reason,
                cancelled_by,
                cancelled_at,
            }),
            _ => None,
        };

        Ok(Swap {
            id: row.id,
            requester: row.requester_id,
            provider: row.provider_id,
            skill_offered: SkillSnapshot {
                skill: row.offered_skill,
                description: row.offered_description,
                level: parse_level(row.offered_level)?,
            },
            skill_requested: SkillSnapshot {
                skill: row.requested_skill,
                description: row.requested_description,
                level: parse_level(row.requested_level)?,
            },
            status: row.status.parse()?,
            message: row.message,
            scheduled_date: row.scheduled_date,
            duration_minutes: row.duration_minutes,
            meeting_type: row.meeting_type.parse()?,
            meeting_details: row.meeting_details,
            feedback: SwapFeedback {
                requester_feedback: feedback_slot(
                    row.requester_rating,
                    row.requester_comment,
                    row.requester_submitted_at,
                )?,
                provider_feedback: feedback_slot(
                    row.provider_rating,
                    row.provider_comment,
                    row.provider_submitted_at,
                )?,
            },
            rejected_at: row.rejected_at,
            rejection_reason: row.rejection_reason,
            completed_at: row.completed_at,
            admin_cancel,
            version: row.version,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_swaps(rows: Vec<SwapRow>) -> Result<Vec<Swap>, StoreError> {
    rows.into_iter()
        .map(|row| Swap::try_from(row).map_err(StoreError::from))
        .collect()
}

// =============================================================================
// SQL Queries - ALL swap queries live here
// =============================================================================

impl Swap {
    /// Find swap by ID
    pub async fn find_by_id(id: SwapId, pool: &PgPool) -> Result<Option<Self>, StoreError> {
        let row = sqlx::query_as::<_, SwapRow>("SELECT * FROM swaps WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Swap::try_from).transpose()?)
    }

    /// Find the open request for the exact same requester/provider/skill tuple
    pub async fn find_pending_duplicate(
        requester: MemberId,
        provider: MemberId,
        offered_skill: &str,
        requested_skill: &str,
        pool: &PgPool,
    ) -> Result<Option<Self>, StoreError> {
        let row = sqlx::query_as::<_, SwapRow>(
            r#"
            SELECT * FROM swaps
            WHERE requester_id = $1
              AND provider_id = $2
              AND offered_skill = $3
              AND requested_skill = $4
              AND status = 'pending'
            "#,
        )
        .bind(requester)
        .bind(provider)
        .bind(offered_skill)
        .bind(requested_skill)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(Swap::try_from).transpose()?)
    }

    /// List swaps matching `filter`, newest first
    pub async fn find_all(filter: &SwapFilter, pool: &PgPool) -> Result<Vec<Self>, StoreError> {
        let (member, side) = match filter.participant {
            Some((member, side)) => (Some(member), side.to_string()),
            None => (None, ParticipantFilter::All.to_string()),
        };

        let rows = sqlx::query_as::<_, SwapRow>(
            r#"
            SELECT * FROM swaps
            WHERE ($1::uuid IS NULL OR CASE $2
                    WHEN 'sent' THEN requester_id = $1
                    WHEN 'received' THEN provider_id = $1
                    ELSE requester_id = $1 OR provider_id = $1
                  END)
              AND ($3::text IS NULL OR status = $3)
            ORDER BY created_at DESC, id DESC
            LIMIT $4
            "#,
        )
        .bind(member)
        .bind(side)
        .bind(filter.status.map(|s| s.to_string()))
        .bind(filter.limit)
        .fetch_all(pool)
        .await?;

        into_swaps(rows)
    }

    /// Count swaps by status, optionally only those involving `member`
    pub async fn count_by_status(
        member: Option<MemberId>,
        pool: &PgPool,
    ) -> Result<SwapStatusCounts, StoreError> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT status, COUNT(*) FROM swaps
            WHERE $1::uuid IS NULL OR requester_id = $1 OR provider_id = $1
            GROUP BY status
            "#,
        )
        .bind(member)
        .fetch_all(pool)
        .await?;

        let mut counts = SwapStatusCounts::default();
        for (status, n) in rows {
            counts.add(status.parse()?, n);
        }
        Ok(counts)
    }

    /// Swaps created at or after `since`
    pub async fn count_created_since(
        since: DateTime<Utc>,
        pool: &PgPool,
    ) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM swaps WHERE created_at >= $1")
            .bind(since)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Insert a new swap; the partial unique index rejects a second pending
    /// request for the same tuple.
    pub async fn insert(&self, pool: &PgPool) -> Result<Self, StoreError> {
        let row = sqlx::query_as::<_, SwapRow>(
            r#"
            INSERT INTO swaps (
                id, requester_id, provider_id,
                offered_skill, offered_description, offered_level,
                requested_skill, requested_description, requested_level,
                status, message, scheduled_date, duration_minutes, meeting_type, meeting_details,
                version, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(self.requester)
        .bind(self.provider)
        .bind(&self.skill_offered.skill)
        .bind(&self.skill_offered.description)
        .bind(self.skill_offered.level.map(|l| l.to_string()))
        .bind(&self.skill_requested.skill)
        .bind(&self.skill_requested.description)
        .bind(self.skill_requested.level.map(|l| l.to_string()))
        .bind(self.status.to_string())
        .bind(&self.message)
        .bind(self.scheduled_date)
        .bind(self.duration_minutes)
        .bind(self.meeting_type.to_string())
        .bind(&self.meeting_details)
        .bind(self.version)
        .bind(self.created_at)
        .bind(self.updated_at)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            StoreError::on_unique_violation(e, "A pending swap request already exists for these skills")
        })?;

        Ok(Swap::try_from(row)?)
    }

    /// Write every mutable column if the stored version is still `expected_version`.
    pub async fn update_versioned(
        &self,
        expected_version: i64,
        conn: &mut PgConnection,
    ) -> Result<Self, StoreError> {
        let requester_fb = self.feedback.requester_feedback.as_ref();
        let provider_fb = self.feedback.provider_feedback.as_ref();
        let admin = self.admin_cancel.as_ref();

        let row = sqlx::query_as::<_, SwapRow>(
            r#"
            UPDATE swaps SET
                status = $3,
                scheduled_date = $4,
                duration_minutes = $5,
                meeting_type = $6,
                meeting_details = $7,
                requester_rating = $8,
                requester_comment = $9,
                requester_submitted_at = $10,
                provider_rating = $11,
                provider_comment = $12,
                provider_submitted_at = $13,
                rejected_at = $14,
                rejection_reason = $15,
                completed_at = $16,
                admin_cancelled = $17,
                admin_cancel_reason = $18,
                admin_cancelled_by = $19,
                admin_cancelled_at = $20,
                version = version + 1,
                updated_at = $21
            WHERE id = $1 AND version = $2
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(expected_version)
        .bind(self.status.to_string())
        .bind(self.scheduled_date)
        .bind(self.duration_minutes)
        .bind(self.meeting_type.to_string())
        .bind(&self.meeting_details)
        .bind(requester_fb.map(|f| i16::from(f.rating.value())))
        .bind(requester_fb.and_then(|f| f.comment.clone()))
        .bind(requester_fb.map(|f| f.submitted_at))
        .bind(provider_fb.map(|f| i16::from(f.rating.value())))
        .bind(provider_fb.and_then(|f| f.comment.clone()))
        .bind(provider_fb.map(|f| f.submitted_at))
        .bind(self.rejected_at)
        .bind(&self.rejection_reason)
        .bind(self.completed_at)
        .bind(admin.is_some())
        .bind(admin.and_then(|a| a.reason.clone()))
        .bind(admin.map(|a| a.cancelled_by))
        .bind(admin.map(|a| a.cancelled_at))
        .bind(self.updated_at)
        .fetch_optional(&mut *conn)
        .await?;

        match row {
            Some(row) => Ok(Swap::try_from(row)?),
            None => Err(Self::miss(self.id, conn).await?),
        }
    }

    /// Persist a transition with an optimistic version check
    pub async fn update(&self, expected_version: i64, pool: &PgPool) -> Result<Self, StoreError> {
        let mut conn = pool.acquire().await?;
        self.update_versioned(expected_version, &mut conn).await
    }

    /// Persist completion and bump both participants' counters in one transaction
    pub async fn complete(&self, expected_version: i64, pool: &PgPool) -> Result<Self, StoreError> {
        let mut tx = pool.begin().await?;
        let saved = self.update_versioned(expected_version, &mut tx).await?;
        Member::increment_completed_swaps(saved.requester, &mut tx).await?;
        Member::increment_completed_swaps(saved.provider, &mut tx).await?;
        tx.commit().await?;
        Ok(saved)
    }

    /// Persist a filled feedback slot and fold the rating into the rated member
    pub async fn record_feedback(
        &self,
        expected_version: i64,
        rated_member: MemberId,
        rating: FeedbackRating,
        pool: &PgPool,
    ) -> Result<(Self, Member), StoreError> {
        let mut tx = pool.begin().await?;
        let saved = self.update_versioned(expected_version, &mut tx).await?;
        Member::apply_rating(rated_member, rating, &mut tx).await?;
        let member = Member::load(rated_member, &mut tx)
            .await?
            .ok_or_else(|| StoreError::NotFound("Member".to_string()))?;
        tx.commit().await?;
        Ok((saved, member))
    }

    /// Physically remove a swap if its version is unchanged
    pub async fn delete(id: SwapId, expected_version: i64, pool: &PgPool) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM swaps WHERE id = $1 AND version = $2")
            .bind(id)
            .bind(expected_version)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            let mut conn = pool.acquire().await?;
            return Err(Self::miss(id, &mut conn).await?);
        }
        Ok(())
    }

    /// Classify a write that matched no row
    async fn miss(id: SwapId, conn: &mut PgConnection) -> Result<StoreError, StoreError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM swaps WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *conn)
            .await?;

        Ok(if exists {
            StoreError::VersionConflict
        } else {
            StoreError::NotFound("Swap".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(skill: &str) -> SkillSnapshot {
        SkillSnapshot {
            skill: skill.to_string(),
            description: None,
            level: None,
        }
    }

    fn new_swap() -> Swap {
        let input = CreateSwap::builder()
            .requester(MemberId::new())
            .provider(MemberId::new())
            .skill_offered(snapshot("Guitar"))
            .skill_requested(snapshot("Photography"))
            .build();
        Swap::new(input, &SwapDefaults::default(), Utc::now())
    }

    #[test]
    fn test_new_swap_applies_defaults() {
        let swap = new_swap();
        assert_eq!(swap.status, SwapStatus::Pending);
        assert_eq!(swap.duration_minutes, 60);
        assert_eq!(swap.meeting_type, MeetingType::Online);
        assert_eq!(swap.version, 0);
        assert_eq!(swap.feedback, SwapFeedback::default());
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let input = CreateSwap::builder()
            .requester(MemberId::new())
            .provider(MemberId::new())
            .skill_offered(snapshot("Guitar"))
            .skill_requested(snapshot("Photography"))
            .duration_minutes(90)
            .meeting_type(MeetingType::Hybrid)
            .message("Saturdays work for me")
            .build();
        let swap = Swap::new(input, &SwapDefaults::default(), Utc::now());

        assert_eq!(swap.duration_minutes, 90);
        assert_eq!(swap.meeting_type, MeetingType::Hybrid);
        assert_eq!(swap.message.as_deref(), Some("Saturdays work for me"));
    }

    #[test]
    fn test_meeting_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&MeetingType::InPerson).unwrap(),
            "\"in-person\""
        );
        assert_eq!("in-person".parse::<MeetingType>().unwrap(), MeetingType::InPerson);
        assert!("face-to-face".parse::<MeetingType>().is_err());
    }

    #[test]
    fn test_filter_matches_by_side_and_status() {
        let swap = new_swap();

        let sent = SwapFilter {
            participant: Some((swap.requester, ParticipantFilter::Sent)),
            ..Default::default()
        };
        let received_by_requester = SwapFilter {
            participant: Some((swap.requester, ParticipantFilter::Received)),
            ..Default::default()
        };
        let accepted_only = SwapFilter {
            status: Some(SwapStatus::Accepted),
            ..Default::default()
        };

        assert!(sent.matches(&swap));
        assert!(!received_by_requester.matches(&swap));
        assert!(!accepted_only.matches(&swap));
    }

    #[test]
    fn test_counterpart() {
        let swap = new_swap();
        assert_eq!(swap.counterpart(swap.requester), Some(swap.provider));
        assert_eq!(swap.counterpart(swap.provider), Some(swap.requester));
        assert_eq!(swap.counterpart(MemberId::new()), None);
    }
}
