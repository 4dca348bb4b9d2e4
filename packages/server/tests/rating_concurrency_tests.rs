//! Rating aggregation under concurrent feedback

mod common;

use crate::common::*;
use skillswap_core::domains::member::activities::apply_rating;
use skillswap_core::domains::member::models::FeedbackRating;
use skillswap_core::domains::swaps::activities::submit_feedback;

const RATINGS: [i64; 3] = [4, 5, 3];

fn permutations() -> Vec<[i64; 3]> {
    let [a, b, c] = RATINGS;
    vec![[a, b, c], [a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]]
}

#[tokio::test]
async fn every_order_gives_same_average() {
    for order in permutations() {
        let harness = TestHarness::new();
        let member = register(&harness.deps, "Target").await;

        let mut last = 0.0;
        for rating in order {
            last = apply_rating(member.id, FeedbackRating::new(rating).unwrap(), &harness.deps)
                .await
                .unwrap();
        }

        let stored = harness.store.member(member.id).unwrap();
        assert_eq!(stored.rating.count, 3, "order {:?}", order);
        assert!((stored.rating.average - 4.0).abs() < 1e-9, "order {:?}", order);
        assert!((last - 4.0).abs() < 1e-9);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_ratings_are_not_lost() {
    let harness = TestHarness::new();
    let member = register(&harness.deps, "Target").await;

    let handles: Vec<_> = RATINGS
        .iter()
        .cycle()
        .take(30)
        .map(|&rating| {
            let deps = harness.deps.clone();
            let id = member.id;
            tokio::spawn(async move {
                apply_rating(id, FeedbackRating::new(rating).unwrap(), &deps).await
            })
        })
        .collect();

    for joined in futures::future::join_all(handles).await {
        joined.expect("task panicked").unwrap();
    }

    let stored = harness.store.member(member.id).unwrap();
    assert_eq!(stored.rating.count, 30);
    assert!((stored.rating.average - 4.0).abs() < 1e-9);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_feedback_from_separate_swaps() {
    let harness = TestHarness::new();
    let deps = harness.deps.clone();
    let mentor = register_with_skills(&deps, "Mentor", &["Guitar"], &[]).await;

    let mut submissions = Vec::new();
    for (i, rating) in RATINGS.into_iter().enumerate() {
        let student =
            register_with_skills(&deps, &format!("Student{}", i), &["Cooking"], &[]).await;
        let swap = completed_swap(&deps, &student, &mentor, "Cooking", "Guitar").await;
        submissions.push((actor(&student), swap.id, rating));
    }

    let handles: Vec<_> = submissions
        .into_iter()
        .map(|(student, swap_id, rating)| {
            let deps = deps.clone();
            tokio::spawn(async move { submit_feedback(&student, swap_id, rating, None, &deps).await })
        })
        .collect();

    for joined in futures::future::join_all(handles).await {
        let result = joined.expect("task panicked").unwrap();
        assert_eq!(result.rated_member.id, mentor.id);
    }

    let stored = harness.store.member(mentor.id).unwrap();
    assert_eq!(stored.rating.count, 3);
    assert!((stored.rating.average - 4.0).abs() < 1e-9);
    assert_eq!(stored.completed_swaps, 3);
}

#[tokio::test]
async fn feedback_and_direct_ratings_share_one_average() {
    let harness = TestHarness::new();
    let deps = &harness.deps;
    let mentor = register_with_skills(deps, "Mentor", &["Guitar"], &[]).await;
    let student = register_with_skills(deps, "Student", &["Cooking"], &[]).await;
    let swap = completed_swap(deps, &student, &mentor, "Cooking", "Guitar").await;

    let after_direct = apply_rating(mentor.id, FeedbackRating::new(3).unwrap(), deps)
        .await
        .unwrap();
    assert!((after_direct - 3.0).abs() < 1e-9);

    let result = submit_feedback(&actor(&student), swap.id, 5, None, deps)
        .await
        .unwrap();
    assert_eq!(result.rated_member.rating.count, 2);
    assert!((result.rated_member.rating.average - 4.0).abs() < 1e-9);

    let stored = harness.store.member(mentor.id).unwrap();
    assert_eq!(stored.rating, result.rated_member.rating);
}

#[test]
fn out_of_range_ratings_never_reach_the_aggregator() {
    for value in [0, 6, 100, -3] {
        assert!(FeedbackRating::new(value).is_err());
    }
}
