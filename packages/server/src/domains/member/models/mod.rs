pub mod ban;
pub mod member;
pub mod rating;
pub mod skill;

pub use ban::BanState;
pub use member::{
    Availability, Member, MemberCounts, MemberRole, MemberStatusFilter, ProfileChanges,
};
pub use rating::{FeedbackRating, Rating};
pub use skill::{
    merge_offered_skills, OfferedSkill, ReviewState, ReviewStatus, SkillEntry, SkillInput,
    SkillKind, SkillLevel,
};
