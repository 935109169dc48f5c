use std::collections::HashMap;

use time::Date;

use super::prelude::*;
use crate::{
    bookings::{apply_booking_filter, BookingFilter, StayWithPlace},
    cache::PlaceCache,
    cancellation::CancelAction,
};

pub fn my_bookings<G>(gateway: &G, filter: &BookingFilter, today: Date) -> Result<Vec<Booking>>
where
    G: BookingGateway,
{
    let bookings = gateway.my_bookings(filter)?;
    Ok(apply_booking_filter(bookings, filter, today))
}

/// Adds the booked place to each booking.
///
/// Every place is requested at most once.
pub fn bookings_with_places<G>(
    gateway: &G,
    cache: &mut PlaceCache,
    bookings: Vec<Booking>,
) -> Vec<StayWithPlace>
where
    G: PlaceGateway,
{
    let mut places: HashMap<Id, Option<Place>> = HashMap::new();
    bookings
        .into_iter()
        .map(|booking| {
            let place = places
                .entry(booking.place_id.clone())
                .or_insert_with(|| {
                    super::get_place(gateway, cache, &booking.place_id).unwrap_or_else(|err| {
                        log::warn!("Unable to load place {}: {err}", booking.place_id);
                        None
                    })
                })
                .clone();
            StayWithPlace { booking, place }
        })
        .collect()
}

pub fn cancel_booking<G>(gateway: &G, booking_id: &Id) -> Result<Booking>
where
    G: BookingGateway,
{
    let booking = gateway.booking(booking_id)?;
    if !CancelAction::for_booking(&booking).is_enabled() {
        return Err(Error::NotCancellable);
    }
    let cancelled = gateway.cancel_booking(booking_id)?;
    log::info!("Cancelled booking {booking_id}");
    Ok(cancelled)
}
