use serde::{Deserialize, Serialize};

use crate::common::MemberId;
use crate::domains::member::models::{MemberCounts, OfferedSkill};
use crate::domains::member::MemberData;
use crate::domains::swaps::models::{Swap, SwapStatusCounts};

/// Platform-wide counts for the moderator dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub members: MemberCounts,
    pub swaps: SwapActivity,
}

/// Swap counts by status plus those created within the recent window
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SwapActivity {
    #[serde(flatten)]
    pub by_status: SwapStatusCounts,
    pub recent: i64,
}

/// A member record together with its most recent swaps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDetail {
    pub member: MemberData,
    pub recent_swaps: Vec<Swap>,
}

/// One member's offered skills awaiting review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingSkills {
    pub member_id: MemberId,
    pub name: String,
    pub email: String,
    pub pending_skills: Vec<OfferedSkill>,
}
