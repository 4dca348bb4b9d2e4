// HTTP routes
pub mod admin;
pub mod health;
pub mod members;
pub mod swaps;

pub use health::*;

use axum::extract::Extension;

use crate::common::{Actor, DomainError};
use crate::domains::member::activities::{actor_for, authenticate};
use crate::domains::member::models::Member;
use crate::kernel::ServerDeps;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

/// Resolve the caller of an authenticated route.
///
/// A token naming a member that no longer exists is treated like no token.
pub(crate) async fn require_member(
    auth_user: Option<Extension<AuthUser>>,
    deps: &ServerDeps,
) -> Result<(Member, Actor), ApiError> {
    let Some(Extension(user)) = auth_user else {
        return Err(ApiError::Unauthenticated);
    };

    match authenticate(user.member_id, deps).await {
        Ok(member) => {
            let actor = actor_for(&member);
            Ok((member, actor))
        }
        Err(DomainError::NotFound(_)) => Err(ApiError::Unauthenticated),
        Err(e) => Err(e.into()),
    }
}

/// Like `require_member`, but anonymous callers pass through as `None`
pub(crate) async fn optional_actor(
    auth_user: Option<Extension<AuthUser>>,
    deps: &ServerDeps,
) -> Result<Option<Actor>, ApiError> {
    if auth_user.is_none() {
        return Ok(None);
    }
    let (_, actor) = require_member(auth_user, deps).await?;
    Ok(Some(actor))
}
