//! Moderation activities - moderator-only operations

mod ban;
mod force_cancel;
mod queries;
mod review_skill;

pub use ban::{ban_member, unban_member, BanRequest, MAX_BAN_DAYS};
pub use force_cancel::force_cancel_swap;
pub use queries::{
    dashboard_stats, list_members, list_swaps, member_detail, pending_skills, RECENT_ACTIVITY_DAYS,
};
pub use review_skill::review_skill;
