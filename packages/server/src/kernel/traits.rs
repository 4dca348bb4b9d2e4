// Trait definitions for dependency injection
//
// Storage traits only - no business logic. Guards and transitions live in the
// domain activities; these traits promise atomic, field-group-scoped writes.
//
// Naming convention: Base* for trait names (e.g., BaseMemberStore)

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::common::{MemberId, SkillEntryId, SwapId};
use crate::domains::member::models::{
    BanState, FeedbackRating, Member, MemberCounts, MemberStatusFilter, ProfileChanges,
    ReviewState,
};
use crate::domains::swaps::models::{Swap, SwapFilter, SwapStatusCounts};

// =============================================================================
// Store errors
// =============================================================================

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),

    /// Optimistic-lock loss: the record changed since it was read.
    #[error("Record was modified concurrently")]
    VersionConflict,

    #[error("{0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    /// Map a unique-constraint violation to `Duplicate(message)`.
    pub fn on_unique_violation(err: sqlx::Error, message: &str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::Duplicate(message.to_string())
            }
            _ => StoreError::Database(err),
        }
    }
}

// =============================================================================
// Member Record Store
// =============================================================================

#[async_trait]
pub trait BaseMemberStore: Send + Sync {
    /// Insert a new member. Fails with `Duplicate` when the email is taken.
    async fn insert_member(&self, member: &Member) -> Result<Member, StoreError>;

    async fn find_member(&self, id: MemberId) -> Result<Option<Member>, StoreError>;

    async fn find_member_by_email(&self, email: &str) -> Result<Option<Member>, StoreError>;

    /// Apply self-service profile edits. Offered skills are merged so that
    /// unchanged entries keep their review sub-state.
    async fn update_profile(
        &self,
        id: MemberId,
        changes: &ProfileChanges,
    ) -> Result<Member, StoreError>;

    async fn touch_last_active(&self, id: MemberId, at: DateTime<Utc>) -> Result<(), StoreError>;

    /// Overwrite only the ban field group.
    async fn set_ban(&self, id: MemberId, ban: &BanState) -> Result<Member, StoreError>;

    /// Clear the ban field group if, and only if, a time-limited ban has
    /// expired at `now`. Returns the healed member when it did.
    async fn clear_expired_ban(
        &self,
        id: MemberId,
        now: DateTime<Utc>,
    ) -> Result<Option<Member>, StoreError>;

    /// Write the review sub-state of one offered skill, only while that entry
    /// is still pending. A non-pending entry yields `VersionConflict`.
    async fn record_skill_review(
        &self,
        member_id: MemberId,
        skill_id: SkillEntryId,
        review: &ReviewState,
    ) -> Result<Member, StoreError>;

    /// Fold one rating into the member's running average as a single atomic update.
    async fn apply_rating(
        &self,
        id: MemberId,
        rating: FeedbackRating,
    ) -> Result<Member, StoreError>;

    /// Members owning at least one pending offered skill
    async fn find_members_with_pending_skills(&self) -> Result<Vec<Member>, StoreError>;

    /// Members by account status, newest first; `None` lists everyone.
    async fn find_members(
        &self,
        status: Option<MemberStatusFilter>,
    ) -> Result<Vec<Member>, StoreError>;

    /// Counts, with `recent` covering members created at or after `since`.
    async fn member_counts(&self, since: DateTime<Utc>) -> Result<MemberCounts, StoreError>;
}

// =============================================================================
// Swap Record Store
// =============================================================================

#[async_trait]
pub trait BaseSwapStore: Send + Sync {
    /// Insert a new swap. Fails with `Duplicate` when an identical pending
    /// request already exists.
    async fn insert_swap(&self, swap: &Swap) -> Result<Swap, StoreError>;

    async fn find_swap(&self, id: SwapId) -> Result<Option<Swap>, StoreError>;

    async fn find_pending_duplicate(
        &self,
        requester: MemberId,
        provider: MemberId,
        offered_skill: &str,
        requested_skill: &str,
    ) -> Result<Option<Swap>, StoreError>;

    /// Persist a transitioned swap if its stored version is still
    /// `expected_version`; bumps the version.
    async fn update_swap(&self, swap: &Swap, expected_version: i64) -> Result<Swap, StoreError>;

    /// Persist a completed swap and increment `completed_swaps` on both
    /// participants in the same atomic unit.
    async fn complete_swap(&self, swap: &Swap, expected_version: i64) -> Result<Swap, StoreError>;

    /// Persist a filled feedback slot and fold `rating` into `rated_member`
    /// in the same atomic unit. The fold is the one `apply_rating` performs.
    async fn record_feedback(
        &self,
        swap: &Swap,
        expected_version: i64,
        rated_member: MemberId,
        rating: FeedbackRating,
    ) -> Result<(Swap, Member), StoreError>;

    async fn delete_swap(&self, id: SwapId, expected_version: i64) -> Result<(), StoreError>;

    /// Newest first
    async fn find_swaps(&self, filter: &SwapFilter) -> Result<Vec<Swap>, StoreError>;

    /// Counts by status, optionally restricted to swaps involving `member`.
    async fn count_swaps_by_status(
        &self,
        member: Option<MemberId>,
    ) -> Result<SwapStatusCounts, StoreError>;

    async fn count_swaps_created_since(&self, since: DateTime<Utc>) -> Result<i64, StoreError>;
}
