//! Swap domain activities - lifecycle operations and reads

mod create_swap;
mod queries;
mod transitions;

pub use create_swap::{create_swap, CreateSwapRequest};
pub use queries::{get_swap, list_member_swaps};
pub use transitions::{
    accept_swap, cancel_swap, complete_swap, delete_swap, reject_swap, submit_feedback,
    update_swap_details, FeedbackResult, TransitionOutcome,
};

pub(crate) use transitions::run_transition;
