// Business domains
pub mod auth;
pub mod member;
pub mod moderation;
pub mod swaps;
