use time::{PrimitiveDateTime, Time};

use super::prelude::*;
use crate::{
    availability::{BookingGate, Reservation},
    cancellation::{cancellation_deadline, DEFAULT_CHECK_IN_TIME},
    pricing::Fees,
};

/// Client-side booking constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingPolicy {
    pub fees: Fees,
    pub check_in_time: Time,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            fees: Fees::default(),
            check_in_time: DEFAULT_CHECK_IN_TIME,
        }
    }
}

/// A reservation that is waiting for the payment.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkout {
    pub place_id: Id,
    pub reservation: Reservation,
    pub payment: PaymentIntent,
    pub free_cancellation_until: PrimitiveDateTime,
}

/// Reserves the checked stay and prepares the payment.
pub fn start_checkout<G>(
    gateway: &G,
    gate: &mut BookingGate,
    place: &Place,
    policy: &BookingPolicy,
) -> Result<Checkout>
where
    G: PaymentGateway,
{
    let reservation = gate.reserve(place.price, &policy.fees)?;
    let payment = gateway.create_payment_intent(&place.id, &reservation.stay)?;
    log::debug!(
        "Created payment intent {} for place {}",
        payment.payment_intent_id,
        place.id
    );
    Ok(Checkout {
        place_id: place.id.clone(),
        free_cancellation_until: cancellation_deadline(
            reservation.stay.check_in(),
            policy.check_in_time,
        ),
        reservation,
        payment,
    })
}

/// Creates the booking record after the payment succeeded.
pub fn complete_booking<G>(
    gateway: &G,
    place_id: &Id,
    stay: StayDates,
    payment_intent_id: &str,
) -> Result<Booking>
where
    G: BookingGateway,
{
    let payment_intent_id = payment_intent_id.trim();
    if payment_intent_id.is_empty() {
        return Err(Error::Backend("Missing payment confirmation".to_string()));
    }
    let booking = gateway.create_booking(&NewBooking {
        place_id: place_id.clone(),
        stay,
        payment_intent_id: payment_intent_id.to_string(),
    })?;
    log::info!("Created booking {} for place {}", booking.id, place_id);
    Ok(booking)
}
