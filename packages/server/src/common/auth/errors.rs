use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::common::DomainError;

/// Authentication and authorization failures.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Moderator access required to {0}")]
    ModeratorRequired(&'static str),

    #[error("Account has been banned{}", ban_suffix(.expires_at))]
    Banned {
        reason: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    },

    #[error("Account is inactive")]
    Inactive,
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        DomainError::Forbidden(err.to_string())
    }
}

fn ban_suffix(expires_at: &Option<DateTime<Utc>>) -> String {
    match expires_at {
        Some(at) => format!(" until {}", at.to_rfc3339()),
        None => String::new(),
    }
}
