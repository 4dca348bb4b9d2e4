//! Swaps domain - the swap record and its negotiation lifecycle
//!
//! `machines` holds the pure transition rules; `activities` load, apply and
//! persist them against the swap store.

pub mod activities;
pub mod machines;
pub mod models;

pub use machines::{ScheduleUpdate, SwapCommand};
pub use models::{Swap, SwapStatus};
