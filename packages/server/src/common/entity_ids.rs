//! Typed ID definitions for all domain entities.
//!
//! ```rust
//! use skillswap_core::common::{MemberId, SwapId};
//!
//! let member_id: MemberId = MemberId::new();
//! let swap_id: SwapId = SwapId::new();
//! // let wrong: SwapId = member_id; // compile error
//! # let _ = (member_id, swap_id);
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Member entities.
pub struct Member;

/// Marker type for Swap entities.
pub struct Swap;

/// Marker type for a single advertised skill on a member profile.
pub struct SkillEntry;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

pub type MemberId = Id<Member>;

pub type SwapId = Id<Swap>;

pub type SkillEntryId = Id<SkillEntry>;
