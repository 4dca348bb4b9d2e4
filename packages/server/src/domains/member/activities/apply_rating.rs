//! Rating aggregator

use tracing::info;

use crate::common::{DomainError, MemberId};
use crate::domains::member::models::{FeedbackRating, Member};
use crate::kernel::ServerDeps;

/// Fold one rating into a member's running average and return the new average.
///
/// The fold is a single atomic store operation, so concurrent ratings of the
/// same member never lose an update. Feedback on a completed swap performs the
/// same fold inside the swap write and reports it through `rating_applied`.
pub async fn apply_rating(
    member_id: MemberId,
    rating: FeedbackRating,
    deps: &ServerDeps,
) -> Result<f64, DomainError> {
    let member = deps.members.apply_rating(member_id, rating).await?;
    Ok(rating_applied(&member, rating))
}

/// Record a completed fold on `member` and return its new average
pub(crate) fn rating_applied(member: &Member, rating: FeedbackRating) -> f64 {
    info!(
        member_id = %member.id,
        rating = rating.value(),
        average = member.rating.average,
        count = member.rating.count,
        "Rating applied"
    );
    member.rating.average
}
