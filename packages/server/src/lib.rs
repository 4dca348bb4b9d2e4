// Skill Swap - API Core
//
// This crate provides the backend API for members exchanging skills one-to-one.
// Architecture follows domain-driven design: models own their SQL, activities
// own the business rules, and the HTTP layer only translates requests.
//
// Swap lifecycle rules live in domains/swaps/machines.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
