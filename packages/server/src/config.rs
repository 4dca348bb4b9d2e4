use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::domains::member::models::SkillLevel;
use crate::domains::swaps::models::MeetingType;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub allowed_origins: Vec<String>,
    pub swap_defaults: SwapDefaults,
    pub skill_defaults: SkillDefaults,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let duration_minutes = match env::var("DEFAULT_SWAP_DURATION_MINUTES") {
            Ok(raw) => raw
                .parse::<i32>()
                .ok()
                .filter(|minutes| *minutes > 0)
                .context("DEFAULT_SWAP_DURATION_MINUTES must be a positive number")?,
            Err(_) => SwapDefaults::default().duration_minutes,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "skillswap".to_string()),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            swap_defaults: SwapDefaults {
                duration_minutes,
                ..SwapDefaults::default()
            },
            skill_defaults: SkillDefaults::default(),
        })
    }
}

/// Values applied to a new swap when the requester leaves them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapDefaults {
    pub duration_minutes: i32,
    pub meeting_type: MeetingType,
}

impl Default for SwapDefaults {
    fn default() -> Self {
        Self {
            duration_minutes: 60,
            meeting_type: MeetingType::Online,
        }
    }
}

/// Levels applied to skill entries submitted without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillDefaults {
    pub offered_level: SkillLevel,
    pub wanted_level: SkillLevel,
}

impl Default for SkillDefaults {
    fn default() -> Self {
        Self {
            offered_level: SkillLevel::Intermediate,
            wanted_level: SkillLevel::Beginner,
        }
    }
}
