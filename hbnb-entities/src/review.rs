use thiserror::Error;

use crate::id::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Rating value out of range")]
pub struct RatingOutOfRange;

/// A star rating between 1 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(from: u8) -> Result<Self, Self::Error> {
        if (Self::min().0..=Self::max().0).contains(&from) {
            Ok(Self(from))
        } else {
            Err(RatingOutOfRange)
        }
    }
}

impl From<Rating> for u8 {
    fn from(from: Rating) -> Self {
        from.0
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id       : Id,
    pub place_id : Id,
    pub user_id  : Id,
    pub rating   : Rating,
    pub text     : String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub place_id: Id,
    pub rating: Rating,
    pub text: String,
}

pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating.value())).sum();
    Some(f64::from(sum) / reviews.len() as f64)
}
