//! Swap read operations

use tracing::warn;

use crate::common::{Actor, DomainError, SwapId};
use crate::domains::swaps::models::{ParticipantFilter, Swap, SwapFilter, SwapStatus};
use crate::kernel::ServerDeps;

use super::transitions::load_swap;

/// A single swap, visible to its participants and to moderators
pub async fn get_swap(actor: &Actor, swap_id: SwapId, deps: &ServerDeps) -> Result<Swap, DomainError> {
    let swap = load_swap(swap_id, deps).await?;

    if !swap.involves(actor.member_id) && !actor.is_moderator {
        warn!(swap_id = %swap_id, member_id = %actor.member_id, "Swap read denied");
        return Err(DomainError::forbidden("Access denied"));
    }
    Ok(swap)
}

/// The caller's swaps, newest first
pub async fn list_member_swaps(
    actor: &Actor,
    side: ParticipantFilter,
    status: Option<SwapStatus>,
    deps: &ServerDeps,
) -> Result<Vec<Swap>, DomainError> {
    let filter = SwapFilter {
        participant: Some((actor.member_id, side)),
        status,
        limit: None,
    };
    Ok(deps.swaps.find_swaps(&filter).await?)
}
