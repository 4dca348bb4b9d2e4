//! Member domain activities - business logic functions
//!
//! HTTP handlers call these directly with `ServerDeps`; every mutation goes
//! through the member store's field-group operations.

mod apply_rating;
mod authenticate;
mod queries;
mod register_member;
mod update_profile;

pub use apply_rating::apply_rating;
pub(crate) use apply_rating::rating_applied;
pub use authenticate::{actor_for, authenticate};
pub use queries::{get_member, get_public_profile, member_swap_stats};
pub use register_member::{normalize_email, register_member};
pub use update_profile::{update_profile, ProfileUpdate};
