//! Postgres-backed record stores
//!
//! Thin adapter from the store traits to the SQL methods on the models.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{MemberId, SkillEntryId, SwapId};
use crate::domains::member::models::{
    BanState, FeedbackRating, Member, MemberCounts, MemberStatusFilter, ProfileChanges,
    ReviewState,
};
use crate::domains::swaps::models::{Swap, SwapFilter, SwapStatusCounts};
use crate::kernel::{BaseMemberStore, BaseSwapStore, StoreError};

/// Wrapper around a PgPool that implements both store traits
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BaseMemberStore for PostgresStore {
    async fn insert_member(&self, member: &Member) -> Result<Member, StoreError> {
        member.insert(&self.pool).await
    }

    async fn find_member(&self, id: MemberId) -> Result<Option<Member>, StoreError> {
        Member::find_by_id(id, &self.pool).await
    }

    async fn find_member_by_email(&self, email: &str) -> Result<Option<Member>, StoreError> {
        Member::find_by_email(email, &self.pool).await
    }

    async fn update_profile(
        &self,
        id: MemberId,
        changes: &ProfileChanges,
    ) -> Result<Member, StoreError> {
        Member::update_profile(id, changes, &self.pool).await
    }

    async fn touch_last_active(&self, id: MemberId, at: DateTime<Utc>) -> Result<(), StoreError> {
        Member::touch_last_active(id, at, &self.pool).await
    }

    async fn set_ban(&self, id: MemberId, ban: &BanState) -> Result<Member, StoreError> {
        Member::set_ban(id, ban, &self.pool).await
    }

    async fn clear_expired_ban(
        &self,
        id: MemberId,
        now: DateTime<Utc>,
    ) -> Result<Option<Member>, StoreError> {
        Member::clear_expired_ban(id, now, &self.pool).await
    }

    async fn record_skill_review(
        &self,
        member_id: MemberId,
        skill_id: SkillEntryId,
        review: &ReviewState,
    ) -> Result<Member, StoreError> {
        Member::record_skill_review(member_id, skill_id, review, &self.pool).await
    }

    async fn apply_rating(
        &self,
        id: MemberId,
        rating: FeedbackRating,
    ) -> Result<Member, StoreError> {
        let mut tx = self.pool.begin().await?;
        Member::apply_rating(id, rating, &mut tx).await?;
        let member = Member::load(id, &mut tx)
            .await?
            .ok_or_else(|| StoreError::NotFound("Member".to_string()))?;
        tx.commit().await?;
        Ok(member)
    }

    async fn find_members_with_pending_skills(&self) -> Result<Vec<Member>, StoreError> {
        Member::find_with_pending_skills(&self.pool).await
    }

    async fn find_members(
        &self,
        status: Option<MemberStatusFilter>,
    ) -> Result<Vec<Member>, StoreError> {
        Member::find_all(status, &self.pool).await
    }

    async fn member_counts(&self, since: DateTime<Utc>) -> Result<MemberCounts, StoreError> {
        Member::counts(since, &self.pool).await
    }
}

#[async_trait]
impl BaseSwapStore for PostgresStore {
    async fn insert_swap(&self, swap: &Swap) -> Result<Swap, StoreError> {
        swap.insert(&self.pool).await
    }

    async fn find_swap(&self, id: SwapId) -> Result<Option<Swap>, StoreError> {
        Swap::find_by_id(id, &self.pool).await
    }

    async fn find_pending_duplicate(
        &self,
        requester: MemberId,
        provider: MemberId,
        offered_skill: &str,
        requested_skill: &str,
    ) -> Result<Option<Swap>, StoreError> {
        Swap::find_pending_duplicate(requester, provider, offered_skill, requested_skill, &self.pool)
            .await
    }

    async fn update_swap(&self, swap: &Swap, expected_version: i64) -> Result<Swap, StoreError> {
        swap.update(expected_version, &self.pool).await
    }

    async fn complete_swap(&self, swap: &Swap, expected_version: i64) -> Result<Swap, StoreError> {
        swap.complete(expected_version, &self.pool).await
    }

    async fn record_feedback(
        &self,
        swap: &Swap,
        expected_version: i64,
        rated_member: MemberId,
        rating: FeedbackRating,
    ) -> Result<(Swap, Member), StoreError> {
        swap.record_feedback(expected_version, rated_member, rating, &self.pool)
            .await
    }

    async fn delete_swap(&self, id: SwapId, expected_version: i64) -> Result<(), StoreError> {
        Swap::delete(id, expected_version, &self.pool).await
    }

    async fn find_swaps(&self, filter: &SwapFilter) -> Result<Vec<Swap>, StoreError> {
        Swap::find_all(filter, &self.pool).await
    }

    async fn count_swaps_by_status(
        &self,
        member: Option<MemberId>,
    ) -> Result<SwapStatusCounts, StoreError> {
        Swap::count_by_status(member, &self.pool).await
    }

    async fn count_swaps_created_since(&self, since: DateTime<Utc>) -> Result<i64, StoreError> {
        Swap::count_created_since(since, &self.pool).await
    }
}
