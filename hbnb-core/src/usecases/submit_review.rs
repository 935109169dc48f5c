use time::Date;

use super::prelude::*;
use crate::{
    bookings::BookingFilter,
    review::{review_eligibility, ReviewDraft},
};

pub fn submit_review<G>(gateway: &G, place_id: &Id, draft: &ReviewDraft, today: Date) -> Result<Review>
where
    G: BookingGateway + ReviewGateway,
{
    let new_review = draft.validate(place_id)?;
    let bookings = gateway.my_bookings(&BookingFilter::default())?;
    if !review_eligibility(&bookings, place_id, today).is_eligible() {
        return Err(Error::NotEligibleForReview);
    }
    let review = gateway.create_review(&new_review)?;
    log::info!("Reviewed place {place_id}");
    Ok(review)
}
