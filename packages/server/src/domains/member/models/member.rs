use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};
use std::collections::HashMap;

use super::{
    merge_offered_skills, BanState, FeedbackRating, OfferedSkill, Rating, ReviewState,
    SkillEntry, SkillKind,
};
use crate::common::{MemberId, SkillEntryId};
use crate::kernel::StoreError;

/// Platform role of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Member,
    Moderator,
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberRole::Member => write!(f, "member"),
            MemberRole::Moderator => write!(f, "moderator"),
        }
    }
}

impl std::str::FromStr for MemberRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "member" => Ok(MemberRole::Member),
            "moderator" => Ok(MemberRole::Moderator),
            _ => Err(anyhow::anyhow!("Invalid member role: {}", s)),
        }
    }
}

/// When a member is generally available for sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub weekdays: bool,
    pub weekends: bool,
    pub mornings: bool,
    pub afternoons: bool,
    pub evenings: bool,
}

/// Member record.
///
/// Plain data: every mutation goes through the member, swap and moderation
/// activities, which write one field group at a time through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub location: Option<String>,
    pub role: MemberRole,

    pub skills_offered: Vec<OfferedSkill>,
    pub skills_wanted: Vec<SkillEntry>,
    pub availability: Availability,

    pub is_public: bool,
    pub is_active: bool,

    pub ban: BanState,
    pub rating: Rating,
    pub completed_swaps: i32,

    pub joined_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Self-service profile edits. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub location: Option<String>,
    pub availability: Option<Availability>,
    pub is_public: Option<bool>,
    pub skills_offered: Option<Vec<SkillEntry>>,
    pub skills_wanted: Option<Vec<SkillEntry>>,
}

/// Platform-wide member counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberCounts {
    pub total: i64,
    pub active: i64,
    pub banned: i64,
    /// Joined within the dashboard's recent window
    pub recent: i64,
}

/// Moderator listing filter over account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatusFilter {
    Active,
    Banned,
    Inactive,
}

impl std::fmt::Display for MemberStatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberStatusFilter::Active => write!(f, "active"),
            MemberStatusFilter::Banned => write!(f, "banned"),
            MemberStatusFilter::Inactive => write!(f, "inactive"),
        }
    }
}

impl MemberStatusFilter {
    /// Flag-level match: a banned member whose account is still active
    /// appears under both `active` and `banned`.
    pub fn matches(&self, member: &Member) -> bool {
        match self {
            MemberStatusFilter::Active => member.is_active,
            MemberStatusFilter::Banned => member.ban.is_banned,
            MemberStatusFilter::Inactive => !member.is_active,
        }
    }
}

impl Member {
    /// Fresh registration: no skills, no ban, zero rating and swap count.
    pub fn new(name: String, email: String, location: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: MemberId::new(),
            name,
            email,
            location,
            role: MemberRole::Member,
            skills_offered: Vec::new(),
            skills_wanted: Vec::new(),
            availability: Availability::default(),
            is_public: true,
            is_active: true,
            ban: BanState::cleared(),
            rating: Rating::default(),
            completed_swaps: 0,
            joined_at: now,
            last_active: now,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_moderator(&self) -> bool {
        self.role == MemberRole::Moderator
    }

    /// Whether this member advertises `skill` in an entry that was not rejected.
    pub fn offers_skill(&self, skill: &str) -> bool {
        self.skills_offered
            .iter()
            .any(|offered| offered.entry.matches_name(skill) && !offered.review.is_rejected)
    }

    pub fn offered_skill(&self, id: SkillEntryId) -> Option<&OfferedSkill> {
        self.skills_offered.iter().find(|s| s.entry.id == id)
    }

    pub fn pending_skills(&self) -> Vec<&OfferedSkill> {
        self.skills_offered
            .iter()
            .filter(|s| s.review.is_pending())
            .collect()
    }

    /// In-place application of profile edits (used by the in-memory store;
    /// Postgres performs the same merge inside its transaction).
    pub fn apply_profile(&mut self, changes: &ProfileChanges, now: DateTime<Utc>) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(location) = &changes.location {
            self.location = Some(location.clone());
        }
        if let Some(availability) = changes.availability {
            self.availability = availability;
        }
        if let Some(is_public) = changes.is_public {
            self.is_public = is_public;
        }
        if let Some(offered) = &changes.skills_offered {
            self.skills_offered = merge_offered_skills(&self.skills_offered, offered.clone());
        }
        if let Some(wanted) = &changes.skills_wanted {
            self.skills_wanted = wanted.clone();
        }
        self.updated_at = now;
    }
}

// =============================================================================
// SQL rows
// =============================================================================

#[derive(sqlx::FromRow)]
struct MemberRow {
    id: MemberId,
    name: String,
    email: String,
    location: Option<String>,
    role: String,
    avail_weekdays: bool,
    avail_weekends: bool,
    avail_mornings: bool,
    avail_afternoons: bool,
    avail_evenings: bool,
    is_public: bool,
    is_active: bool,
    is_banned: bool,
    ban_reason: Option<String>,
    ban_expiry: Option<DateTime<Utc>>,
    banned_at: Option<DateTime<Utc>>,
    banned_by: Option<MemberId>,
    rating_average: f64,
    rating_count: i32,
    completed_swaps: i32,
    joined_at: DateTime<Utc>,
    last_active: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct SkillRow {
    id: SkillEntryId,
    member_id: MemberId,
    kind: String,
    skill: String,
    description: Option<String>,
    level: String,
    is_approved: bool,
    is_rejected: bool,
    rejection_reason: Option<String>,
    reviewed_at: Option<DateTime<Utc>>,
    reviewed_by: Option<MemberId>,
}

impl SkillRow {
    fn entry(&self) -> Result<SkillEntry, StoreError> {
        Ok(SkillEntry {
            id: self.id,
            skill: self.skill.clone(),
            description: self.description.clone(),
            level: self.level.parse()?,
        })
    }
}

impl MemberRow {
    fn into_member(self, skills: Vec<SkillRow>) -> Result<Member, StoreError> {
        let mut skills_offered = Vec::new();
        let mut skills_wanted = Vec::new();

        for row in skills {
            match row.kind.parse::<SkillKind>()? {
                SkillKind::Offered => skills_offered.push(OfferedSkill {
                    entry: row.entry()?,
                    review: ReviewState {
                        is_approved: row.is_approved,
                        is_rejected: row.is_rejected,
                        rejection_reason: row.rejection_reason,
                        reviewed_at: row.reviewed_at,
                        reviewed_by: row.reviewed_by,
                    },
                }),
                SkillKind::Wanted => skills_wanted.push(row.entry()?),
            }
        }

        Ok(Member {
            id: self.id,
            name: self.name,
            email: self.email,
            location: self.location,
            role: self.role.parse()?,
            skills_offered,
            skills_wanted,
            availability: Availability {
                weekdays: self.avail_weekdays,
                weekends: self.avail_weekends,
                mornings: self.avail_mornings,
                afternoons: self.avail_afternoons,
                evenings: self.avail_evenings,
            },
            is_public: self.is_public,
            is_active: self.is_active,
            ban: BanState {
                is_banned: self.is_banned,
                ban_reason: self.ban_reason,
                ban_expiry: self.ban_expiry,
                banned_at: self.banned_at,
                banned_by: self.banned_by,
            },
            rating: Rating {
                average: self.rating_average,
                count: self.rating_count,
            },
            completed_swaps: self.completed_swaps,
            joined_at: self.joined_at,
            last_active: self.last_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

// =============================================================================
// SQL Queries - ALL member queries live here
// =============================================================================

impl Member {
    /// Find member by ID (with both skill lists)
    pub async fn find_by_id(id: MemberId, pool: &PgPool) -> Result<Option<Self>, StoreError> {
        let mut conn = pool.acquire().await?;
        Self::load(id, &mut conn).await
    }

    /// Find member by (already normalized) email
    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>, StoreError> {
        let id = sqlx::query_scalar::<_, MemberId>("SELECT id FROM members WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;

        match id {
            Some(id) => Self::find_by_id(id, pool).await,
            None => Ok(None),
        }
    }

    /// Find members owning at least one pending offered skill
    pub async fn find_with_pending_skills(pool: &PgPool) -> Result<Vec<Self>, StoreError> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT m.* FROM members m
            WHERE EXISTS (
                SELECT 1 FROM member_skills s
                WHERE s.member_id = m.id
                  AND s.kind = 'offered'
                  AND NOT s.is_approved
                  AND NOT s.is_rejected
            )
            ORDER BY m.created_at
            "#,
        )
        .fetch_all(pool)
        .await?;

        Self::with_skills(rows, pool).await
    }

    /// Find members by account status, newest first
    pub async fn find_all(
        status: Option<MemberStatusFilter>,
        pool: &PgPool,
    ) -> Result<Vec<Self>, StoreError> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT * FROM members
            WHERE $1::text IS NULL
               OR ($1 = 'active' AND is_active)
               OR ($1 = 'banned' AND is_banned)
               OR ($1 = 'inactive' AND NOT is_active)
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(status.map(|s| s.to_string()))
        .fetch_all(pool)
        .await?;

        Self::with_skills(rows, pool).await
    }

    /// Attach skill lists to a batch of member rows, keeping row order
    async fn with_skills(rows: Vec<MemberRow>, pool: &PgPool) -> Result<Vec<Self>, StoreError> {
        let ids: Vec<MemberId> = rows.iter().map(|r| r.id).collect();
        let skill_rows = sqlx::query_as::<_, SkillRow>(
            "SELECT * FROM member_skills WHERE member_id = ANY($1) ORDER BY kind, position",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut by_member: HashMap<MemberId, Vec<SkillRow>> = HashMap::new();
        for skill in skill_rows {
            by_member.entry(skill.member_id).or_default().push(skill);
        }

        rows.into_iter()
            .map(|row| {
                let skills = by_member.remove(&row.id).unwrap_or_default();
                row.into_member(skills)
            })
            .collect()
    }

    /// Count members (total, active, banned, joined since `since`)
    pub async fn counts(since: DateTime<Utc>, pool: &PgPool) -> Result<MemberCounts, StoreError> {
        let (total, active, banned, recent) = sqlx::query_as::<_, (i64, i64, i64, i64)>(
            r#"
            SELECT
                COUNT(*),
                COUNT(*) FILTER (WHERE is_active),
                COUNT(*) FILTER (WHERE is_banned),
                COUNT(*) FILTER (WHERE created_at >= $1)
            FROM members
            "#,
        )
        .bind(since)
        .fetch_one(pool)
        .await?;

        Ok(MemberCounts {
            total,
            active,
            banned,
            recent,
        })
    }

    /// Insert new member (and any initial skills)
    pub async fn insert(&self, pool: &PgPool) -> Result<Self, StoreError> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO members (
                id, name, email, location, role,
                avail_weekdays, avail_weekends, avail_mornings, avail_afternoons, avail_evenings,
                is_public, is_active, rating_average, rating_count, completed_swaps,
                joined_at, last_active, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
            "#,
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.email)
        .bind(&self.location)
        .bind(self.role.to_string())
        .bind(self.availability.weekdays)
        .bind(self.availability.weekends)
        .bind(self.availability.mornings)
        .bind(self.availability.afternoons)
        .bind(self.availability.evenings)
        .bind(self.is_public)
        .bind(self.is_active)
        .bind(self.rating.average)
        .bind(self.rating.count)
        .bind(self.completed_swaps)
        .bind(self.joined_at)
        .bind(self.last_active)
        .bind(self.created_at)
        .bind(self.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| StoreError::on_unique_violation(e, "A member already exists with this email"))?;

        Self::replace_offered(self.id, &self.skills_offered, &mut tx).await?;
        Self::replace_wanted(self.id, &self.skills_wanted, &mut tx).await?;

        let created = Self::load(self.id, &mut tx)
            .await?
            .ok_or_else(|| StoreError::NotFound("Member".to_string()))?;
        tx.commit().await?;
        Ok(created)
    }

    /// Apply profile edits; the member row is locked so a concurrent skill
    /// review cannot interleave with the offered-skill merge.
    pub async fn update_profile(
        id: MemberId,
        changes: &ProfileChanges,
        pool: &PgPool,
    ) -> Result<Self, StoreError> {
        let mut tx = pool.begin().await?;
        Self::lock(id, &mut tx).await?;

        sqlx::query(
            r#"
            UPDATE members SET
                name = COALESCE($2, name),
                location = COALESCE($3, location),
                avail_weekdays = COALESCE($4, avail_weekdays),
                avail_weekends = COALESCE($5, avail_weekends),
                avail_mornings = COALESCE($6, avail_mornings),
                avail_afternoons = COALESCE($7, avail_afternoons),
                avail_evenings = COALESCE($8, avail_evenings),
                is_public = COALESCE($9, is_public),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.location)
        .bind(changes.availability.map(|a| a.weekdays))
        .bind(changes.availability.map(|a| a.weekends))
        .bind(changes.availability.map(|a| a.mornings))
        .bind(changes.availability.map(|a| a.afternoons))
        .bind(changes.availability.map(|a| a.evenings))
        .bind(changes.is_public)
        .execute(&mut *tx)
        .await?;

        if let Some(offered) = &changes.skills_offered {
            let current = Self::load(id, &mut tx)
                .await?
                .ok_or_else(|| StoreError::NotFound("Member".to_string()))?;
            let merged = merge_offered_skills(&current.skills_offered, offered.clone());
            Self::replace_offered(id, &merged, &mut tx).await?;
        }

        if let Some(wanted) = &changes.skills_wanted {
            Self::replace_wanted(id, wanted, &mut tx).await?;
        }

        let updated = Self::load(id, &mut tx)
            .await?
            .ok_or_else(|| StoreError::NotFound("Member".to_string()))?;
        tx.commit().await?;
        Ok(updated)
    }

    /// Update last_active timestamp
    pub async fn touch_last_active(
        id: MemberId,
        at: DateTime<Utc>,
        pool: &PgPool,
    ) -> Result<(), StoreError> {
        sqlx::query("UPDATE members SET last_active = $2 WHERE id = $1")
            .bind(id)
            .bind(at)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Overwrite the ban field group only
    pub async fn set_ban(id: MemberId, ban: &BanState, pool: &PgPool) -> Result<Self, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE members SET
                is_banned = $2,
                ban_reason = $3,
                ban_expiry = $4,
                banned_at = $5,
                banned_by = $6,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(ban.is_banned)
        .bind(&ban.ban_reason)
        .bind(ban.ban_expiry)
        .bind(ban.banned_at)
        .bind(ban.banned_by)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("Member".to_string()));
        }

        Self::find_by_id(id, pool)
            .await?
            .ok_or_else(|| StoreError::NotFound("Member".to_string()))
    }

    /// Clear an expired time-limited ban. The expiry test is part of the
    /// UPDATE predicate, so a ban re-issued concurrently is never cleared.
    pub async fn clear_expired_ban(
        id: MemberId,
        now: DateTime<Utc>,
        pool: &PgPool,
    ) -> Result<Option<Self>, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE members SET
                is_banned = FALSE,
                ban_reason = NULL,
                ban_expiry = NULL,
                banned_at = NULL,
                banned_by = NULL,
                updated_at = NOW()
            WHERE id = $1
              AND is_banned
              AND ban_expiry IS NOT NULL
              AND ban_expiry < $2
            "#,
        )
        .bind(id)
        .bind(now)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Self::find_by_id(id, pool).await
    }

    /// Write a review decision onto a still-pending offered skill
    pub async fn record_skill_review(
        member_id: MemberId,
        skill_id: SkillEntryId,
        review: &ReviewState,
        pool: &PgPool,
    ) -> Result<Self, StoreError> {
        let mut tx = pool.begin().await?;
        Self::lock(member_id, &mut tx).await?;

        let result = sqlx::query(
            r#"
            UPDATE member_skills SET
                is_approved = $3,
                is_rejected = $4,
                rejection_reason = $5,
                reviewed_at = $6,
                reviewed_by = $7
            WHERE member_id = $1
              AND id = $2
              AND kind = 'offered'
              AND NOT is_approved
              AND NOT is_rejected
            "#,
        )
        .bind(member_id)
        .bind(skill_id)
        .bind(review.is_approved)
        .bind(review.is_rejected)
        .bind(&review.rejection_reason)
        .bind(review.reviewed_at)
        .bind(review.reviewed_by)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            let exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS (SELECT 1 FROM member_skills WHERE member_id = $1 AND id = $2 AND kind = 'offered')",
            )
            .bind(member_id)
            .bind(skill_id)
            .fetch_one(&mut *tx)
            .await?;

            return Err(if exists {
                StoreError::VersionConflict
            } else {
                StoreError::NotFound("Skill".to_string())
            });
        }

        let updated = Self::load(member_id, &mut tx)
            .await?
            .ok_or_else(|| StoreError::NotFound("Member".to_string()))?;
        tx.commit().await?;
        Ok(updated)
    }

    /// Fold a rating into the running average in one statement. The row lock
    /// taken by UPDATE serializes concurrent folds on the same member.
    pub async fn apply_rating(
        id: MemberId,
        rating: FeedbackRating,
        conn: &mut PgConnection,
    ) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE members SET
                rating_average = (rating_average * rating_count + $2) / (rating_count + 1),
                rating_count = rating_count + 1,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(f64::from(rating.value()))
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("Member".to_string()));
        }
        Ok(())
    }

    /// Increment completed swap counter
    pub async fn increment_completed_swaps(
        id: MemberId,
        conn: &mut PgConnection,
    ) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE members SET completed_swaps = completed_swaps + 1, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("Member".to_string()));
        }
        Ok(())
    }

    /// Load a member and its skills on an existing connection
    pub async fn load(id: MemberId, conn: &mut PgConnection) -> Result<Option<Self>, StoreError> {
        let row = sqlx::query_as::<_, MemberRow>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let skills = sqlx::query_as::<_, SkillRow>(
            "SELECT * FROM member_skills WHERE member_id = $1 ORDER BY kind, position",
        )
        .bind(id)
        .fetch_all(&mut *conn)
        .await?;

        row.into_member(skills).map(Some)
    }

    async fn lock(id: MemberId, conn: &mut PgConnection) -> Result<(), StoreError> {
        sqlx::query_scalar::<_, MemberId>("SELECT id FROM members WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound("Member".to_string()))
    }

    async fn replace_offered(
        id: MemberId,
        skills: &[OfferedSkill],
        conn: &mut PgConnection,
    ) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM member_skills WHERE member_id = $1 AND kind = 'offered'")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        for (position, offered) in skills.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO member_skills (
                    id, member_id, kind, position, skill, description, level,
                    is_approved, is_rejected, rejection_reason, reviewed_at, reviewed_by
                )
                VALUES ($1, $2, 'offered', $3, $4, $5, $6, $7, $8, $9, $10, $11)
                "#,
            )
            .bind(offered.entry.id)
            .bind(id)
            .bind(position as i32)
            .bind(&offered.entry.skill)
            .bind(&offered.entry.description)
            .bind(offered.entry.level.to_string())
            .bind(offered.review.is_approved)
            .bind(offered.review.is_rejected)
            .bind(&offered.review.rejection_reason)
            .bind(offered.review.reviewed_at)
            .bind(offered.review.reviewed_by)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    async fn replace_wanted(
        id: MemberId,
        skills: &[SkillEntry],
        conn: &mut PgConnection,
    ) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM member_skills WHERE member_id = $1 AND kind = 'wanted'")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        for (position, entry) in skills.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO member_skills (id, member_id, kind, position, skill, description, level)
                VALUES ($1, $2, 'wanted', $3, $4, $5, $6)
                "#,
            )
            .bind(entry.id)
            .bind(id)
            .bind(position as i32)
            .bind(&entry.skill)
            .bind(&entry.description)
            .bind(entry.level.to_string())
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }
}
