// TestDependencies - in-memory implementations for testing
//
// Provides an in-memory record store that can be injected into ServerDeps for
// tests. Both record sets sit behind one mutex, so every trait method is a
// single atomic step, the same guarantee the Postgres transactions give.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{BaseMemberStore, BaseSwapStore, ServerDeps, StoreError};
use crate::common::{MemberId, SkillEntryId, SwapId};
use crate::config::{SkillDefaults, SwapDefaults};
use crate::domains::auth::JwtService;
use crate::domains::member::models::{
    BanState, FeedbackRating, Member, MemberCounts, MemberStatusFilter, ProfileChanges,
    ReviewState,
};
use crate::domains::swaps::models::{Swap, SwapFilter, SwapStatus, SwapStatusCounts};

pub const TEST_JWT_SECRET: &str = "test_secret_key";
pub const TEST_JWT_ISSUER: &str = "skillswap";

// =============================================================================
// In-memory store
// =============================================================================

#[derive(Default)]
struct Records {
    members: HashMap<MemberId, Member>,
    swaps: HashMap<SwapId, Swap>,
    /// Swap writes that will fail with VersionConflict before touching state
    injected_conflicts: usize,
    swap_writes: usize,
}

impl Records {
    fn member_mut(&mut self, id: MemberId) -> Result<&mut Member, StoreError> {
        self.members
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound("Member".to_string()))
    }

    /// Version check shared by every swap write
    fn check_swap_version(&mut self, id: SwapId, expected_version: i64) -> Result<(), StoreError> {
        self.swap_writes += 1;
        if self.injected_conflicts > 0 {
            self.injected_conflicts -= 1;
            return Err(StoreError::VersionConflict);
        }

        let stored = self
            .swaps
            .get(&id)
            .ok_or_else(|| StoreError::NotFound("Swap".to_string()))?;
        if stored.version != expected_version {
            return Err(StoreError::VersionConflict);
        }
        Ok(())
    }

    /// The running-mean fold shared by direct ratings and swap feedback
    fn fold_rating(&mut self, id: MemberId, rating: FeedbackRating) -> Result<Member, StoreError> {
        let member = self.member_mut(id)?;
        member.rating = member.rating.fold(rating);
        Ok(member.clone())
    }

    fn store_swap(&mut self, swap: &Swap) -> Swap {
        let mut saved = swap.clone();
        saved.version += 1;
        self.swaps.insert(saved.id, saved.clone());
        saved
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    records: Arc<Mutex<Records>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Records> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Make the next `n` swap writes fail as if another writer got there first
    pub fn inject_version_conflicts(&self, n: usize) {
        self.lock().injected_conflicts = n;
    }

    /// Number of swap writes attempted (including injected conflicts)
    pub fn swap_write_count(&self) -> usize {
        self.lock().swap_writes
    }

    /// Put a member record in place as-is (fixtures: moderators, expired bans)
    pub fn put_member(&self, member: Member) {
        self.lock().members.insert(member.id, member);
    }

    /// Put a swap record in place as-is
    pub fn put_swap(&self, swap: Swap) {
        self.lock().swaps.insert(swap.id, swap);
    }

    pub fn member(&self, id: MemberId) -> Option<Member> {
        self.lock().members.get(&id).cloned()
    }

    pub fn swap(&self, id: SwapId) -> Option<Swap> {
        self.lock().swaps.get(&id).cloned()
    }
}

#[async_trait]
impl BaseMemberStore for InMemoryStore {
    async fn insert_member(&self, member: &Member) -> Result<Member, StoreError> {
        let mut records = self.lock();
        if records.members.values().any(|m| m.email == member.email) {
            return Err(StoreError::Duplicate(
                "A member already exists with this email".to_string(),
            ));
        }
        records.members.insert(member.id, member.clone());
        Ok(member.clone())
    }

    async fn find_member(&self, id: MemberId) -> Result<Option<Member>, StoreError> {
        Ok(self.lock().members.get(&id).cloned())
    }

    async fn find_member_by_email(&self, email: &str) -> Result<Option<Member>, StoreError> {
        Ok(self
            .lock()
            .members
            .values()
            .find(|m| m.email == email)
            .cloned())
    }

    async fn update_profile(
        &self,
        id: MemberId,
        changes: &ProfileChanges,
    ) -> Result<Member, StoreError> {
        let mut records = self.lock();
        let member = records.member_mut(id)?;
        member.apply_profile(changes, Utc::now());
        Ok(member.clone())
    }

    async fn touch_last_active(&self, id: MemberId, at: DateTime<Utc>) -> Result<(), StoreError> {
        let mut records = self.lock();
        records.member_mut(id)?.last_active = at;
        Ok(())
    }

    async fn set_ban(&self, id: MemberId, ban: &BanState) -> Result<Member, StoreError> {
        let mut records = self.lock();
        let member = records.member_mut(id)?;
        member.ban = ban.clone();
        member.updated_at = Utc::now();
        Ok(member.clone())
    }

    async fn clear_expired_ban(
        &self,
        id: MemberId,
        now: DateTime<Utc>,
    ) -> Result<Option<Member>, StoreError> {
        let mut records = self.lock();
        let Some(member) = records.members.get_mut(&id) else {
            return Ok(None);
        };
        if !member.ban.has_expired(now) {
            return Ok(None);
        }
        member.ban = BanState::cleared();
        member.updated_at = now;
        Ok(Some(member.clone()))
    }

    async fn record_skill_review(
        &self,
        member_id: MemberId,
        skill_id: SkillEntryId,
        review: &ReviewState,
    ) -> Result<Member, StoreError> {
        let mut records = self.lock();
        let member = records.member_mut(member_id)?;
        let entry = member
            .skills_offered
            .iter_mut()
            .find(|s| s.entry.id == skill_id)
            .ok_or_else(|| StoreError::NotFound("Skill".to_string()))?;
        if !entry.review.is_pending() {
            return Err(StoreError::VersionConflict);
        }
        entry.review = review.clone();
        member.updated_at = Utc::now();
        Ok(member.clone())
    }

    async fn apply_rating(
        &self,
        id: MemberId,
        rating: FeedbackRating,
    ) -> Result<Member, StoreError> {
        self.lock().fold_rating(id, rating)
    }

    async fn find_members_with_pending_skills(&self) -> Result<Vec<Member>, StoreError> {
        let mut members: Vec<Member> = self
            .lock()
            .members
            .values()
            .filter(|m| !m.pending_skills().is_empty())
            .cloned()
            .collect();
        members.sort_by_key(|m| (m.created_at, m.id));
        Ok(members)
    }

    async fn find_members(
        &self,
        status: Option<MemberStatusFilter>,
    ) -> Result<Vec<Member>, StoreError> {
        let mut members: Vec<Member> = self
            .lock()
            .members
            .values()
            .filter(|m| status.map_or(true, |s| s.matches(m)))
            .cloned()
            .collect();
        members.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(members)
    }

    async fn member_counts(&self, since: DateTime<Utc>) -> Result<MemberCounts, StoreError> {
        let records = self.lock();
        let members = || records.members.values();
        Ok(MemberCounts {
            total: members().count() as i64,
            active: members().filter(|m| m.is_active).count() as i64,
            banned: members().filter(|m| m.ban.is_banned).count() as i64,
            recent: members().filter(|m| m.created_at >= since).count() as i64,
        })
    }
}

#[async_trait]
impl BaseSwapStore for InMemoryStore {
    async fn insert_swap(&self, swap: &Swap) -> Result<Swap, StoreError> {
        let mut records = self.lock();
        let duplicate = records.swaps.values().any(|s| {
            s.status == SwapStatus::Pending
                && s.requester == swap.requester
                && s.provider == swap.provider
                && s.skill_offered.skill == swap.skill_offered.skill
                && s.skill_requested.skill == swap.skill_requested.skill
        });
        if duplicate && swap.status == SwapStatus::Pending {
            return Err(StoreError::Duplicate(
                "A pending swap request already exists for these skills".to_string(),
            ));
        }
        records.swaps.insert(swap.id, swap.clone());
        Ok(swap.clone())
    }

    async fn find_swap(&self, id: SwapId) -> Result<Option<Swap>, StoreError> {
        Ok(self.lock().swaps.get(&id).cloned())
    }

    async fn find_pending_duplicate(
        &self,
        requester: MemberId,
        provider: MemberId,
        offered_skill: &str,
        requested_skill: &str,
    ) -> Result<Option<Swap>, StoreError> {
        Ok(self
            .lock()
            .swaps
            .values()
            .find(|s| {
                s.status == SwapStatus::Pending
                    && s.requester == requester
                    && s.provider == provider
                    && s.skill_offered.skill == offered_skill
                    && s.skill_requested.skill == requested_skill
            })
            .cloned())
    }

    async fn update_swap(&self, swap: &Swap, expected_version: i64) -> Result<Swap, StoreError> {
        let mut records = self.lock();
        records.check_swap_version(swap.id, expected_version)?;
        Ok(records.store_swap(swap))
    }

    async fn complete_swap(&self, swap: &Swap, expected_version: i64) -> Result<Swap, StoreError> {
        let mut records = self.lock();
        records.check_swap_version(swap.id, expected_version)?;
        for id in [swap.requester, swap.provider] {
            records.member_mut(id)?;
        }
        for id in [swap.requester, swap.provider] {
            records.member_mut(id)?.completed_swaps += 1;
        }
        Ok(records.store_swap(swap))
    }

    async fn record_feedback(
        &self,
        swap: &Swap,
        expected_version: i64,
        rated_member: MemberId,
        rating: FeedbackRating,
    ) -> Result<(Swap, Member), StoreError> {
        let mut records = self.lock();
        records.check_swap_version(swap.id, expected_version)?;
        let member = records.fold_rating(rated_member, rating)?;
        Ok((records.store_swap(swap), member))
    }

    async fn delete_swap(&self, id: SwapId, expected_version: i64) -> Result<(), StoreError> {
        let mut records = self.lock();
        records.check_swap_version(id, expected_version)?;
        records.swaps.remove(&id);
        Ok(())
    }

    async fn find_swaps(&self, filter: &SwapFilter) -> Result<Vec<Swap>, StoreError> {
        let mut swaps: Vec<Swap> = self
            .lock()
            .swaps
            .values()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();
        swaps.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        if let Some(limit) = filter.limit {
            swaps.truncate(usize::try_from(limit).unwrap_or(0));
        }
        Ok(swaps)
    }

    async fn count_swaps_by_status(
        &self,
        member: Option<MemberId>,
    ) -> Result<SwapStatusCounts, StoreError> {
        let mut counts = SwapStatusCounts::default();
        for swap in self.lock().swaps.values() {
            if member.map_or(true, |m| swap.involves(m)) {
                counts.add(swap.status, 1);
            }
        }
        Ok(counts)
    }

    async fn count_swaps_created_since(&self, since: DateTime<Utc>) -> Result<i64, StoreError> {
        Ok(self
            .lock()
            .swaps
            .values()
            .filter(|s| s.created_at >= since)
            .count() as i64)
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builder for ServerDeps wired to the in-memory store
pub struct TestDependencies {
    pub store: InMemoryStore,
    swap_defaults: SwapDefaults,
    skill_defaults: SkillDefaults,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            store: InMemoryStore::new(),
            swap_defaults: SwapDefaults::default(),
            skill_defaults: SkillDefaults::default(),
        }
    }

    /// Set swap defaults
    pub fn swap_defaults(mut self, defaults: SwapDefaults) -> Self {
        self.swap_defaults = defaults;
        self
    }

    /// Set skill defaults
    pub fn skill_defaults(mut self, defaults: SkillDefaults) -> Self {
        self.skill_defaults = defaults;
        self
    }

    /// Convert into ServerDeps for testing
    pub fn into_server_deps(self) -> ServerDeps {
        let store = Arc::new(self.store);
        ServerDeps::new(
            store.clone(),
            store,
            Arc::new(JwtService::new(TEST_JWT_SECRET, TEST_JWT_ISSUER.to_string())),
            self.swap_defaults,
            self.skill_defaults,
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
