/// Authorization helpers for moderator-only operations.
///
/// The moderator flag is resolved once on the authentication path (from the
/// member's role) and carried on the `Actor`:
///
/// ```rust
/// use skillswap_core::common::{Actor, MemberId, ModeratorCapability};
///
/// let actor = Actor::new(MemberId::new(), true);
/// actor.can(ModeratorCapability::BanMembers).check().unwrap();
/// ```

mod builder;
mod capability;
mod errors;

pub use builder::{Actor, CapabilityBuilder};
pub use capability::ModeratorCapability;
pub use errors::AuthError;
