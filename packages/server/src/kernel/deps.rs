//! Server dependencies for activities (using traits for testability)
//!
//! This module provides the central dependency container used by all domain
//! activities. Both record stores sit behind trait objects so tests can swap
//! Postgres for the in-memory store.

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::{SkillDefaults, SwapDefaults};
use crate::domains::auth::JwtService;
use crate::kernel::{BaseMemberStore, BaseSwapStore, PostgresStore};

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to activities
#[derive(Clone)]
pub struct ServerDeps {
    pub members: Arc<dyn BaseMemberStore>,
    pub swaps: Arc<dyn BaseSwapStore>,
    /// JWT service for token creation
    pub jwt_service: Arc<JwtService>,
    pub swap_defaults: SwapDefaults,
    pub skill_defaults: SkillDefaults,
    /// Present when running against Postgres; used by the health check
    pub db_pool: Option<PgPool>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        members: Arc<dyn BaseMemberStore>,
        swaps: Arc<dyn BaseSwapStore>,
        jwt_service: Arc<JwtService>,
        swap_defaults: SwapDefaults,
        skill_defaults: SkillDefaults,
    ) -> Self {
        Self {
            members,
            swaps,
            jwt_service,
            swap_defaults,
            skill_defaults,
            db_pool: None,
        }
    }

    /// Dependencies backed by a single Postgres pool
    pub fn postgres(
        pool: PgPool,
        jwt_service: Arc<JwtService>,
        swap_defaults: SwapDefaults,
        skill_defaults: SkillDefaults,
    ) -> Self {
        let store = Arc::new(PostgresStore::new(pool.clone()));
        Self {
            members: store.clone(),
            swaps: store,
            jwt_service,
            swap_defaults,
            skill_defaults,
            db_pool: Some(pool),
        }
    }
}
