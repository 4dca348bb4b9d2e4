//! Moderation domain - ban lifecycle, skill review, force-cancel, platform views
//!
//! Every activity checks the caller's moderator capability before reading.

pub mod activities;
pub mod data;
pub mod models;

pub use models::ReviewDecision;
