use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::MemberId;
use crate::domains::member::models::{
    Availability, BanState, Member, MemberRole, OfferedSkill, Rating, SkillEntry,
};
use crate::domains::swaps::models::SwapStatusCounts;

/// Member API representation.
///
/// `email` and `ban` are only filled for the member themself and moderators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberData {
    pub id: MemberId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub location: Option<String>,
    pub role: MemberRole,
    pub skills_offered: Vec<OfferedSkill>,
    pub skills_wanted: Vec<SkillEntry>,
    pub availability: Availability,
    pub is_public: bool,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ban: Option<BanState>,
    pub rating: Rating,
    pub completed_swaps: i32,
    pub joined_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl MemberData {
    /// Everything, for the owner and moderators
    pub fn full(member: Member) -> Self {
        let mut data = Self::public(member.clone());
        data.email = Some(member.email);
        data.ban = Some(member.ban);
        data
    }

    /// Without contact details or moderation state
    pub fn public(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            email: None,
            location: member.location,
            role: member.role,
            skills_offered: member.skills_offered,
            skills_wanted: member.skills_wanted,
            availability: member.availability,
            is_public: member.is_public,
            is_active: member.is_active,
            ban: None,
            rating: member.rating,
            completed_swaps: member.completed_swaps,
            joined_at: member.joined_at,
            last_active: member.last_active,
        }
    }
}

/// A member's own activity summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberStats {
    pub completed_swaps: i32,
    pub rating: Rating,
    pub skills_offered: usize,
    pub skills_wanted: usize,
    pub joined_at: DateTime<Utc>,
    pub swaps_by_status: SwapStatusCounts,
}
