//! Register member activity - creates a fresh member record

use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info};

use crate::common::DomainError;
use crate::domains::member::models::Member;
use crate::kernel::ServerDeps;

lazy_static! {
    // Simplified address check: something@something.tld, no whitespace
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Trim and lowercase an email, rejecting anything that is not address-shaped.
pub fn normalize_email(email: &str) -> Result<String, DomainError> {
    let email = email.trim().to_lowercase();
    if !EMAIL_REGEX.is_match(&email) {
        return Err(DomainError::validation("Invalid email"));
    }
    Ok(email)
}

/// Register a new member.
///
/// The member starts with no skills, no ban, a zero rating and zero completed
/// swaps. Emails are unique after normalization.
pub async fn register_member(
    name: String,
    email: String,
    location: Option<String>,
    deps: &ServerDeps,
) -> Result<Member, DomainError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(DomainError::validation("Name is required"));
    }
    let email = normalize_email(&email)?;
    let location = location
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty());

    if deps.members.find_member_by_email(&email).await?.is_some() {
        debug!(email = %email, "Registration rejected: email already in use");
        return Err(DomainError::validation(
            "A member already exists with this email",
        ));
    }

    let member = Member::new(name, email, location, Utc::now());
    let created = deps.members.insert_member(&member).await?;

    info!(member_id = %created.id, "Member registered");
    Ok(created)
}
