//! Auth domain - bearer token issuance and verification

pub mod jwt;

pub use jwt::{Claims, JwtService};
