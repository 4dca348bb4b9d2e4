//! Moderator force-cancel of an open swap

use tracing::info;

use crate::common::{Actor, DomainError, ModeratorCapability, SwapId};
use crate::domains::swaps::activities::{run_transition, TransitionOutcome};
use crate::domains::swaps::machines::SwapCommand;
use crate::domains::swaps::models::Swap;
use crate::kernel::ServerDeps;

/// Cancel a pending or accepted swap on a moderator's authority, recording
/// who did it, when and why.
pub async fn force_cancel_swap(
    actor: &Actor,
    swap_id: SwapId,
    reason: Option<String>,
    deps: &ServerDeps,
) -> Result<Swap, DomainError> {
    actor.can(ModeratorCapability::CancelSwaps).check()?;

    let reason = reason.map(|r| r.trim().to_string()).filter(|r| !r.is_empty());
    match run_transition(swap_id, actor, SwapCommand::ForceCancel { reason }, deps).await? {
        TransitionOutcome::Updated(swap) => {
            info!(swap_id = %swap_id, moderator = %actor.member_id, "Swap force-cancelled");
            Ok(swap)
        }
        other => Err(anyhow::anyhow!("Unexpected force-cancel outcome: {:?}", other).into()),
    }
}
