//! Who may review a place, and what a review must contain.
//!
//! The same rule applies to every view that offers a review form:
//! the guest needs a finished stay at the place that was not cancelled.

use hbnb_entities::{
    booking::{Booking, BookingStatus},
    id::Id,
    review::{NewReview, Rating},
};
use thiserror::Error;
use time::Date;

pub const MIN_REVIEW_LEN: usize = 10;
pub const MAX_REVIEW_LEN: usize = 500;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub rating: u8,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReviewInvalidation {
    #[error("Please select a rating between 1 and 5 stars.")]
    Rating,
    #[error("Please write at least 10 characters.")]
    TooShort,
    #[error("Reviews are limited to 500 characters.")]
    TooLong,
}

impl ReviewDraft {
    pub fn validate(&self, place_id: &Id) -> Result<NewReview, ReviewInvalidation> {
        let rating = Rating::try_from(self.rating).map_err(|_| ReviewInvalidation::Rating)?;
        let text = self.text.trim();
        let len = text.chars().count();
        if len < MIN_REVIEW_LEN {
            return Err(ReviewInvalidation::TooShort);
        }
        if len > MAX_REVIEW_LEN {
            return Err(ReviewInvalidation::TooLong);
        }
        Ok(NewReview {
            place_id: place_id.clone(),
            rating,
            text: text.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewEligibility {
    /// No confirmed or completed booking for the place.
    NoStay,
    /// The stay has not ended yet.
    StayNotFinished,
    Eligible,
}

impl ReviewEligibility {
    pub const fn is_eligible(self) -> bool {
        matches!(self, Self::Eligible)
    }
}

pub fn review_eligibility(bookings: &[Booking], place_id: &Id, today: Date) -> ReviewEligibility {
    let stays = bookings.iter().filter(|b| {
        &b.place_id == place_id
            && matches!(b.status, BookingStatus::Confirmed | BookingStatus::Completed)
    });
    let mut eligibility = ReviewEligibility::NoStay;
    for booking in stays {
        if booking.stay.check_out() <= today {
            return ReviewEligibility::Eligible;
        }
        eligibility = ReviewEligibility::StayNotFinished;
    }
    eligibility
}
