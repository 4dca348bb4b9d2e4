//! Test fixtures for creating test data.
//!
//! Members and swaps are created through the public activities so every
//! fixture passes the same validation real requests do. Role and ban state
//! have no self-service path and are written to the in-memory store directly.

use chrono::{DateTime, Utc};
use skillswap_core::common::Actor;
use skillswap_core::domains::member::activities::{
    actor_for, register_member, update_profile, ProfileUpdate,
};
use skillswap_core::domains::member::models::{BanState, MemberRole, SkillInput};
use skillswap_core::domains::member::Member;
use skillswap_core::domains::swaps::activities::{
    accept_swap, complete_swap, create_swap, CreateSwapRequest,
};
use skillswap_core::domains::swaps::models::SkillSnapshot;
use skillswap_core::domains::swaps::Swap;
use skillswap_core::kernel::{InMemoryStore, ServerDeps};
use uuid::Uuid;

pub fn skill(name: &str) -> SkillInput {
    SkillInput {
        skill: name.to_string(),
        description: None,
        level: None,
    }
}

pub fn snapshot(name: &str) -> SkillSnapshot {
    SkillSnapshot {
        skill: name.to_string(),
        description: None,
        level: None,
    }
}

/// Register a member with a unique email
pub async fn register(deps: &ServerDeps, name: &str) -> Member {
    let email = format!("{}-{}@example.com", name.to_lowercase(), Uuid::new_v4().simple());
    register_member(name.to_string(), email, Some("Lisbon".to_string()), deps)
        .await
        .expect("Failed to register member")
}

/// Register a member and advertise skills on their profile
pub async fn register_with_skills(
    deps: &ServerDeps,
    name: &str,
    offered: &[&str],
    wanted: &[&str],
) -> Member {
    let member = register(deps, name).await;
    let update = ProfileUpdate {
        skills_offered: Some(offered.iter().map(|s| skill(s)).collect()),
        skills_wanted: Some(wanted.iter().map(|s| skill(s)).collect()),
        ..ProfileUpdate::default()
    };
    update_profile(member.id, update, deps)
        .await
        .expect("Failed to set skills")
}

/// Register a moderator
pub async fn register_moderator(deps: &ServerDeps, store: &InMemoryStore, name: &str) -> Member {
    let member = register(deps, name).await;
    let mut moderator = store.member(member.id).expect("member just registered");
    moderator.role = MemberRole::Moderator;
    store.put_member(moderator.clone());
    moderator
}

/// Put a ban in place directly, with any expiry (including one in the past)
pub fn put_ban(
    store: &InMemoryStore,
    member: &Member,
    banned_by: &Member,
    expiry: Option<DateTime<Utc>>,
) -> Member {
    let mut banned = store.member(member.id).expect("member exists");
    banned.ban = BanState {
        is_banned: true,
        ban_reason: Some("spam".to_string()),
        ban_expiry: expiry,
        banned_at: Some(Utc::now()),
        banned_by: Some(banned_by.id),
    };
    store.put_member(banned.clone());
    banned
}

pub fn actor(member: &Member) -> Actor {
    actor_for(member)
}

/// Open a pending swap from `requester` to `provider`
pub async fn pending_swap(
    deps: &ServerDeps,
    requester: &Member,
    provider: &Member,
    offered: &str,
    requested: &str,
) -> Swap {
    let request = CreateSwapRequest {
        provider_id: provider.id,
        skill_offered: snapshot(offered),
        skill_requested: snapshot(requested),
        message: Some("Happy to trade".to_string()),
        scheduled_date: None,
        duration_minutes: None,
        meeting_type: None,
        meeting_details: None,
    };
    create_swap(&actor(requester), request, deps)
        .await
        .expect("Failed to create swap")
}

pub async fn accepted_swap(
    deps: &ServerDeps,
    requester: &Member,
    provider: &Member,
    offered: &str,
    requested: &str,
) -> Swap {
    let swap = pending_swap(deps, requester, provider, offered, requested).await;
    accept_swap(&actor(provider), swap.id, deps)
        .await
        .expect("Failed to accept swap")
}

pub async fn completed_swap(
    deps: &ServerDeps,
    requester: &Member,
    provider: &Member,
    offered: &str,
    requested: &str,
) -> Swap {
    let swap = accepted_swap(deps, requester, provider, offered, requested).await;
    complete_swap(&actor(requester), swap.id, deps)
        .await
        .expect("Failed to complete swap")
}
