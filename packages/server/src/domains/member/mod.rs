//! Member domain - member records, rating aggregation, authentication read
//!
//! Handlers call activities with `ServerDeps`; activities talk to the member
//! store and never touch SQL directly.

pub mod activities;
pub mod data;
pub mod models;

// Re-export commonly used types
pub use data::{MemberData, MemberStats};
pub use models::member::Member;
