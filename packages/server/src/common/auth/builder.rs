use super::{AuthError, ModeratorCapability};
use crate::common::entity_ids::MemberId;
use tracing::warn;

/// Entry point for authorization checks
///
/// Usage:
/// ```ignore
/// Actor::new(caller_id, is_moderator)
///     .can(ModeratorCapability::ReviewSkills)
///     .check()?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub member_id: MemberId,
    pub is_moderator: bool,
}

impl Actor {
    /// * `member_id` - The authenticated caller
    /// * `is_moderator` - Resolved from the member record during authentication
    pub fn new(member_id: MemberId, is_moderator: bool) -> Self {
        Self {
            member_id,
            is_moderator,
        }
    }

    /// Specify what capability the actor needs
    pub fn can(self, capability: ModeratorCapability) -> CapabilityBuilder {
        CapabilityBuilder {
            actor: self,
            capability,
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityBuilder {
    actor: Actor,
    capability: ModeratorCapability,
}

impl CapabilityBuilder {
    /// Perform the authorization check
    pub fn check(self) -> Result<(), AuthError> {
        if !self.actor.is_moderator {
            warn!(
                member_id = %self.actor.member_id,
                capability = ?self.capability,
                "Moderator capability denied"
            );
            return Err(AuthError::ModeratorRequired(self.capability.describe()));
        }

        Ok(())
    }
}
