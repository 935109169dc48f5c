use super::{load_places::load_places, prelude::*};
use crate::{
    cache::PlaceCache,
    host::{owned_listings, tidy_new_place, tidy_place_update},
    util::validate::Validate,
};

pub fn host_listings<G>(
    gateway: &G,
    cache: &mut PlaceCache,
    user_id: &Id,
    force: bool,
) -> Result<Vec<Place>>
where
    G: PlaceGateway,
{
    let places = load_places(gateway, cache, force)?;
    Ok(owned_listings(places, user_id))
}

pub fn create_listing<G>(gateway: &G, cache: &mut PlaceCache, new_place: NewPlace) -> Result<Place>
where
    G: PlaceGateway,
{
    let new_place = tidy_new_place(new_place);
    new_place.validate()?;
    let place = gateway.create_place(&new_place)?;
    log::info!("Created listing {}", place.id);
    cache.invalidate();
    Ok(place)
}

fn owned_place<G>(gateway: &G, user_id: &Id, place_id: &Id) -> Result<Place>
where
    G: PlaceGateway,
{
    let place = gateway.place(place_id)?;
    if !place.is_owned_by(user_id) {
        return Err(Error::Forbidden);
    }
    Ok(place)
}

pub fn update_listing<G>(
    gateway: &G,
    cache: &mut PlaceCache,
    user_id: &Id,
    place_id: &Id,
    update: PlaceUpdate,
) -> Result<Place>
where
    G: PlaceGateway,
{
    let update = tidy_place_update(update);
    update.validate()?;
    owned_place(gateway, user_id, place_id)?;
    let place = gateway.update_place(place_id, &update)?;
    log::info!("Updated listing {place_id}");
    cache.invalidate();
    Ok(place)
}

pub fn delete_listing<G>(
    gateway: &G,
    cache: &mut PlaceCache,
    user_id: &Id,
    place_id: &Id,
) -> Result<()>
where
    G: PlaceGateway,
{
    owned_place(gateway, user_id, place_id)?;
    gateway.delete_place(place_id)?;
    log::info!("Deleted listing {place_id}");
    cache.invalidate();
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncomingBookings {
    pub place: Place,
    pub bookings: Vec<Booking>,
}

/// Bookings of all listings of the host.
pub fn incoming_bookings<G>(
    gateway: &G,
    cache: &mut PlaceCache,
    user_id: &Id,
) -> Result<Vec<IncomingBookings>>
where
    G: PlaceGateway + BookingGateway,
{
    let listings = host_listings(gateway, cache, user_id, true)?;
    let mut incoming = Vec::with_capacity(listings.len());
    for place in listings {
        let bookings = gateway.place_bookings(&place.id)?;
        incoming.push(IncomingBookings { place, bookings });
    }
    Ok(incoming)
}

fn incoming_booking<G>(gateway: &G, user_id: &Id, booking_id: &Id) -> Result<Booking>
where
    G: PlaceGateway + BookingGateway,
{
    let booking = gateway.booking(booking_id)?;
    owned_place(gateway, user_id, &booking.place_id)?;
    Ok(booking)
}

pub fn confirm_incoming_booking<G>(gateway: &G, user_id: &Id, booking_id: &Id) -> Result<Booking>
where
    G: PlaceGateway + BookingGateway,
{
    let booking = incoming_booking(gateway, user_id, booking_id)?;
    if booking.status != BookingStatus::Pending {
        return Err(Error::Backend(format!(
            "Only pending bookings can be confirmed (status: {})",
            booking.status
        )));
    }
    let booking = gateway.confirm_booking(booking_id)?;
    log::info!("Confirmed booking {booking_id}");
    Ok(booking)
}

pub fn decline_incoming_booking<G>(gateway: &G, user_id: &Id, booking_id: &Id) -> Result<Booking>
where
    G: PlaceGateway + BookingGateway,
{
    incoming_booking(gateway, user_id, booking_id)?;
    let booking = gateway.cancel_booking(booking_id)?;
    log::info!("Declined booking {booking_id}");
    Ok(booking)
}
