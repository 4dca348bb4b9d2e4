use serde::{Deserialize, Serialize};

use crate::common::DomainError;

/// A single feedback rating, guaranteed to be within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct FeedbackRating(u8);

impl FeedbackRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(DomainError::validation("Rating must be between 1 and 5"));
        }
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for FeedbackRating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FeedbackRating> for i64 {
    fn from(rating: FeedbackRating) -> Self {
        i64::from(rating.0)
    }
}

/// Running average of every rating a member has received.
///
/// `average` is the mean of exactly `count` ratings; `count == 0` implies
/// `average == 0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub average: f64,
    pub count: i32,
}

impl Rating {
    /// Fold one more rating into the running mean.
    pub fn fold(self, rating: FeedbackRating) -> Rating {
        let count = f64::from(self.count);
        Rating {
            average: (self.average * count + f64::from(rating.value())) / (count + 1.0),
            count: self.count + 1,
        }
    }
}
