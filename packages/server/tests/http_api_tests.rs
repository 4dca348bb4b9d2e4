//! HTTP surface tests: routing, auth, status codes and JSON shapes

mod common;

use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use crate::common::*;

async fn register_via_api(harness: &TestHarness, name: &str, email: &str) -> (String, String) {
    let (status, body) = harness
        .send(
            Method::POST,
            "/api/members",
            None,
            Some(json!({ "name": name, "email": email, "location": "Porto" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let id = body["member"]["id"].as_str().unwrap().to_string();
    let token = body["token"].as_str().unwrap().to_string();
    (id, token)
}

async fn set_offered(harness: &TestHarness, token: &str, skills: &[&str]) -> Value {
    let offered: Vec<Value> = skills.iter().map(|s| json!({ "skill": s })).collect();
    let (status, body) = harness
        .send(
            Method::PUT,
            "/api/members/me/profile",
            Some(token),
            Some(json!({ "skills_offered": offered })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    body
}

#[tokio::test]
async fn health_reports_in_memory_store() {
    let harness = TestHarness::new();
    let (status, body) = harness.send(Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "in_memory");
}

#[tokio::test]
async fn register_returns_token_and_rejects_duplicate_email() {
    let harness = TestHarness::new();
    let (_, token) = register_via_api(&harness, "Alice", "Alice@Example.com").await;

    let (status, body) = harness
        .send(Method::GET, "/api/members/me", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["member"]["email"], "alice@example.com");
    assert_eq!(body["member"]["rating"]["count"], 0);

    let (status, body) = harness
        .send(
            Method::POST,
            "/api/members",
            None,
            Some(json!({ "name": "Impostor", "email": "alice@example.com" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "validation_error");
}

#[tokio::test]
async fn register_rejects_bad_email() {
    let harness = TestHarness::new();
    let (status, body) = harness
        .send(
            Method::POST,
            "/api/members",
            None,
            Some(json!({ "name": "Alice", "email": "not-an-email" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation_error");
}

#[tokio::test]
async fn authenticated_routes_need_a_token() {
    let harness = TestHarness::new();

    let (status, body) = harness.send(Method::GET, "/api/members/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["kind"], "unauthenticated");

    let (status, _) = harness
        .send(Method::GET, "/api/swaps", Some("garbage"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Valid signature, but the member does not exist
    let orphan = harness.token_for(skillswap_core::common::MemberId::new());
    let (status, _) = harness
        .send(Method::GET, "/api/members/me", Some(&orphan), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn swap_flow_over_http() {
    let harness = TestHarness::new();
    let (_, alice) = register_via_api(&harness, "Alice", "alice@example.com").await;
    let (bob_id, bob) = register_via_api(&harness, "Bob", "bob@example.com").await;
    set_offered(&harness, &alice, &["Guitar"]).await;
    set_offered(&harness, &bob, &["Photography"]).await;

    let (status, body) = harness
        .send(
            Method::POST,
            "/api/swaps",
            Some(&alice),
            Some(json!({
                "provider_id": bob_id,
                "skill_offered": { "skill": "Guitar" },
                "skill_requested": { "skill": "Photography", "level": "Beginner" },
                "meeting_type": "in-person",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["swap"]["status"], "pending");
    assert_eq!(body["swap"]["meeting_type"], "in-person");
    let swap_id = body["swap"]["id"].as_str().unwrap().to_string();

    // Requester may not accept
    let (status, body) = harness
        .send(Method::PATCH, &format!("/api/swaps/{}/accept", swap_id), Some(&alice), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["kind"], "forbidden");

    let (status, body) = harness
        .send(Method::PATCH, &format!("/api/swaps/{}/accept", swap_id), Some(&bob), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["swap"]["status"], "accepted");

    // Second accept reports the current status
    let (status, body) = harness
        .send(Method::PATCH, &format!("/api/swaps/{}/accept", swap_id), Some(&bob), None)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "invalid_state");
    assert_eq!(body["status"], "accepted");

    let (status, body) = harness
        .send(
            Method::PATCH,
            &format!("/api/swaps/{}", swap_id),
            Some(&bob),
            Some(json!({ "duration_minutes": 45, "meeting_details": "Library" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["swap"]["duration_minutes"], 45);

    let (status, _) = harness
        .send(Method::PATCH, &format!("/api/swaps/{}/complete", swap_id), Some(&alice), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = harness
        .send(
            Method::POST,
            &format!("/api/swaps/{}/feedback", swap_id),
            Some(&alice),
            Some(json!({ "rating": 5, "comment": "Patient and clear" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["rated_member"]["id"], bob_id);
    assert_eq!(body["rated_member"]["rating"]["average"], 5.0);
    assert_eq!(body["rated_member"]["rating"]["count"], 1);

    let (status, body) = harness
        .send(
            Method::POST,
            &format!("/api/swaps/{}/feedback", swap_id),
            Some(&alice),
            Some(json!({ "rating": 4 })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "already_submitted");

    let (status, body) = harness
        .send(
            Method::POST,
            &format!("/api/swaps/{}/feedback", swap_id),
            Some(&bob),
            Some(json!({ "rating": 9 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation_error");

    let (status, body) = harness
        .send(Method::GET, "/api/members/me/stats", Some(&alice), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stats"]["completed_swaps"], 1);
    assert_eq!(body["stats"]["swaps_by_status"]["completed"], 1);

    let (status, body) = harness
        .send(Method::GET, "/api/swaps?type=sent&status=completed", Some(&alice), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);

    let (status, body) = harness
        .send(Method::GET, "/api/swaps?type=sent", Some(&bob), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn delete_and_missing_swap() {
    let harness = TestHarness::new();
    let (_, alice) = register_via_api(&harness, "Alice", "alice@example.com").await;
    let (bob_id, bob) = register_via_api(&harness, "Bob", "bob@example.com").await;
    set_offered(&harness, &bob, &["Photography"]).await;

    let (_, body) = harness
        .send(
            Method::POST,
            "/api/swaps",
            Some(&alice),
            Some(json!({
                "provider_id": bob_id,
                "skill_offered": { "skill": "Guitar" },
                "skill_requested": { "skill": "Photography" },
            })),
        )
        .await;
    let swap_id = body["swap"]["id"].as_str().unwrap().to_string();

    let (status, _) = harness
        .send(Method::DELETE, &format!("/api/swaps/{}", swap_id), Some(&bob), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = harness
        .send(Method::DELETE, &format!("/api/swaps/{}", swap_id), Some(&alice), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, body) = harness
        .send(Method::GET, &format!("/api/swaps/{}", swap_id), Some(&alice), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");
}

#[tokio::test]
async fn private_profiles_hidden_from_others() {
    let harness = TestHarness::new();
    let (alice_id, alice) = register_via_api(&harness, "Alice", "alice@example.com").await;
    let (_, bob) = register_via_api(&harness, "Bob", "bob@example.com").await;

    // Public profile: visible anonymously, without email
    let (status, body) = harness
        .send(Method::GET, &format!("/api/members/{}", alice_id), None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["member"].get("email").is_none());

    let (status, _) = harness
        .send(
            Method::PUT,
            "/api/members/me/profile",
            Some(&alice),
            Some(json!({ "is_public": false })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = harness
        .send(Method::GET, &format!("/api/members/{}", alice_id), Some(&bob), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = harness
        .send(Method::GET, &format!("/api/members/{}", alice_id), Some(&alice), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["member"]["email"], "alice@example.com");
}

#[tokio::test]
async fn admin_routes_require_moderator() {
    let harness = TestHarness::new();
    let (_, alice) = register_via_api(&harness, "Alice", "alice@example.com").await;
    let moderator = register_moderator(&harness.deps, &harness.store, "Mod").await;
    let mod_token = harness.token_for(moderator.id);

    let (status, body) = harness
        .send(Method::GET, "/api/admin/dashboard", Some(&alice), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["kind"], "forbidden");

    let (status, body) = harness
        .send(Method::GET, "/api/admin/dashboard", Some(&mod_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stats"]["members"]["total"], 2);
    assert_eq!(body["stats"]["members"]["recent"], 2);
    assert_eq!(body["stats"]["swaps"]["total"], 0);
    assert_eq!(body["stats"]["swaps"]["recent"], 0);

    let (status, body) = harness
        .send(Method::GET, "/api/admin/members", Some(&alice), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["kind"], "forbidden");

    let (status, body) = harness
        .send(Method::GET, "/api/admin/members?status=active", Some(&mod_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert!(body["members"][0]["email"].is_string());

    let (status, body) = harness
        .send(Method::GET, "/api/admin/members?status=banned", Some(&mod_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);

    let (status, body) = harness
        .send(Method::GET, "/api/admin/members?status=sleeping", Some(&mod_token), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation_error");
}

#[tokio::test]
async fn ban_then_review_over_http() {
    let harness = TestHarness::new();
    let (alice_id, alice) = register_via_api(&harness, "Alice", "alice@example.com").await;
    let profile = set_offered(&harness, &alice, &["Guitar"]).await;
    let skill_id = profile["member"]["skills_offered"][0]["id"]
        .as_str()
        .unwrap()
        .to_string();
    let moderator = register_moderator(&harness.deps, &harness.store, "Mod").await;
    let mod_token = harness.token_for(moderator.id);

    let (status, body) = harness
        .send(Method::GET, "/api/admin/skills/pending", Some(&mod_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["members"].as_array().unwrap().len(), 1);

    let (status, body) = harness
        .send(
            Method::PATCH,
            &format!("/api/admin/members/{}/skills/{}/review", alice_id, skill_id),
            Some(&mod_token),
            Some(json!({ "decision": "reject" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation_error");
    assert_eq!(body["message"], "Validation error: A rejection reason is required");

    let (status, _) = harness
        .send(
            Method::PATCH,
            &format!("/api/admin/members/{}/skills/{}/review", alice_id, skill_id),
            Some(&mod_token),
            Some(json!({ "decision": "approve" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = harness
        .send(
            Method::PATCH,
            &format!("/api/admin/members/{}/skills/{}/review", alice_id, skill_id),
            Some(&mod_token),
            Some(json!({ "decision": "reject", "reason": "late change" })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "approved");

    let (status, body) = harness
        .send(
            Method::PATCH,
            &format!("/api/admin/members/{}/ban", alice_id),
            Some(&mod_token),
            Some(json!({ "reason": "spam", "duration_days": 3 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["member"]["ban"]["is_banned"], true);

    let (status, body) = harness
        .send(Method::GET, "/api/members/me", Some(&alice), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["kind"], "forbidden");

    let (status, _) = harness
        .send(
            Method::PATCH,
            &format!("/api/admin/members/{}/ban", moderator.id),
            Some(&mod_token),
            Some(json!({})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = harness
        .send(
            Method::PATCH,
            &format!("/api/admin/members/{}/unban", alice_id),
            Some(&mod_token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = harness
        .send(Method::GET, "/api/members/me", Some(&alice), None)
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn expired_ban_lets_member_back_in() {
    let harness = TestHarness::new();
    let moderator = register_moderator(&harness.deps, &harness.store, "Mod").await;
    let alice = register(&harness.deps, "Alice").await;
    put_ban(&harness.store, &alice, &moderator, Some(Utc::now() - Duration::minutes(5)));
    let token = harness.token_for(alice.id);

    let (status, body) = harness
        .send(Method::GET, "/api/members/me", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["member"]["ban"].is_null() || body["member"]["ban"]["is_banned"] == false);
}

#[tokio::test]
async fn force_cancel_over_http() {
    let harness = TestHarness::new();
    let deps = &harness.deps;
    let moderator = register_moderator(deps, &harness.store, "Mod").await;
    let alice = register_with_skills(deps, "Alice", &["Guitar"], &[]).await;
    let bob = register_with_skills(deps, "Bob", &["Photography"], &[]).await;
    let swap = accepted_swap(deps, &alice, &bob, "Guitar", "Photography").await;
    let mod_token = harness.token_for(moderator.id);

    let (status, body) = harness
        .send(
            Method::PATCH,
            &format!("/api/admin/swaps/{}/force-cancel", swap.id),
            Some(&mod_token),
            Some(json!({ "reason": "Reported" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["swap"]["status"], "cancelled");
    assert_eq!(body["swap"]["admin_cancel"]["reason"], "Reported");

    let (status, body) = harness
        .send(Method::GET, "/api/admin/swaps?status=cancelled", Some(&mod_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn malformed_input_gets_json_validation_errors() {
    let harness = TestHarness::new();
    let deps = &harness.deps;
    let alice = register_with_skills(deps, "Alice", &["Guitar"], &[]).await;
    let bob = register_with_skills(deps, "Bob", &["Photography"], &[]).await;
    let swap = completed_swap(deps, &alice, &bob, "Guitar", "Photography").await;
    let alice_token = harness.token_for(alice.id);
    let feedback_uri = format!("/api/swaps/{}/feedback", swap.id);

    for body in [json!({ "rating": 4.5 }), json!({ "comment": "no rating" }), json!({ "rating": "five" })] {
        let (status, response) = harness
            .send(Method::POST, &feedback_uri, Some(&alice_token), Some(body.clone()))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(response["success"], false);
        assert_eq!(response["kind"], "validation_error");
        assert!(response["message"].as_str().is_some_and(|m| !m.is_empty()));
    }

    // Nothing was written
    let stored = harness.store.swap(swap.id).unwrap();
    assert!(stored.feedback.requester_feedback.is_none());
    assert_eq!(harness.store.member(bob.id).unwrap().rating.count, 0);

    let (status, response) = harness
        .send(Method::GET, "/api/swaps/not-a-uuid", Some(&alice_token), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["kind"], "validation_error");

    let (status, response) = harness
        .send(Method::GET, "/api/swaps?status=finished", Some(&alice_token), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["kind"], "validation_error");

    let (status, response) = harness
        .send(
            Method::POST,
            "/api/members",
            None,
            Some(json!({ "name": "NoEmail" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["kind"], "validation_error");
}

#[tokio::test]
async fn non_moderator_review_is_forbidden_before_body_checks() {
    let harness = TestHarness::new();
    let alice = register_with_skills(&harness.deps, "Alice", &["Guitar"], &[]).await;
    let bob = register(&harness.deps, "Bob").await;
    let bob_token = harness.token_for(bob.id);
    let skill_id = alice.skills_offered[0].entry.id;
    let review_uri = format!("/api/admin/members/{}/skills/{}/review", alice.id, skill_id);

    for body in [json!({ "decision": "reject" }), json!({ "decision": "maybe" })] {
        let (status, response) = harness
            .send(Method::PATCH, &review_uri, Some(&bob_token), Some(body))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(response["kind"], "forbidden");
    }

    let (status, response) = harness
        .send(
            Method::PATCH,
            &format!("/api/admin/members/{}/ban", alice.id),
            Some(&bob_token),
            Some(json!({ "duration_days": "forever" })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(response["kind"], "forbidden");

    let stored = harness.store.member(alice.id).unwrap();
    assert!(stored.skills_offered[0].review.is_pending());
    assert!(!stored.ban.is_banned);
}
