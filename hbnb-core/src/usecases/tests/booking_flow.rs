use hbnb_entities::builders::*;
use time::macros::{date, datetime};

use super::*;
use crate::{
    availability::{AvailabilityState, BookingGate},
    bookings::{BookingFilter, BookingPeriod},
    cache::PlaceCache,
    usecases::{
        bookings_with_places, cancel_booking, check_availability, complete_booking, my_bookings,
        start_checkout, BookingPolicy,
    },
};

fn api() -> MockApi {
    let api = MockApi::logged_in_as(user("guest"));
    api.places
        .borrow_mut()
        .push(Place::build().id("chalet").price(200.0).owner("host").finish());
    api
}

fn gate() -> BookingGate {
    let mut gate = BookingGate::new();
    gate.select_dates(Some(date!(2025 - 12 - 20)), Some(date!(2025 - 12 - 25)));
    gate
}

#[test]
fn book_a_stay() {
    let api = api();
    let place = api.places.borrow()[0].clone();
    let mut gate = gate();

    let state = check_availability(&api, &mut gate, &place.id).unwrap();
    assert_eq!(state, AvailabilityState::Available);

    let checkout = start_checkout(&api, &mut gate, &place, &BookingPolicy::default()).unwrap();
    assert_eq!(checkout.reservation.price.nights, 5);
    assert_eq!(checkout.reservation.price.total, 1000.0 + 150.0 + 280.0);
    assert_eq!(
        checkout.free_cancellation_until,
        datetime!(2025 - 12 - 18 15:00)
    );
    assert_eq!(api.payment_intents.borrow().len(), 1);

    let booking = complete_booking(
        &api,
        &checkout.place_id,
        checkout.reservation.stay,
        &checkout.payment.payment_intent_id,
    )
    .unwrap();
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.guest_id.as_str(), "guest");

    // the same dates are taken now
    let mut gate = self::gate();
    let state = check_availability(&api, &mut gate, &place.id).unwrap();
    assert_eq!(state, AvailabilityState::Unavailable);
    assert!(matches!(
        start_checkout(&api, &mut gate, &place, &BookingPolicy::default()),
        Err(Error::Unavailable)
    ));
}

#[test]
fn checkout_requires_a_successful_check() {
    let api = api();
    let place = api.places.borrow()[0].clone();
    let mut gate = gate();
    assert!(matches!(
        start_checkout(&api, &mut gate, &place, &BookingPolicy::default()),
        Err(Error::NotChecked)
    ));
    assert!(api.payment_intents.borrow().is_empty());

    check_availability(&api, &mut gate, &place.id).unwrap();
    gate.select_dates(Some(date!(2025 - 12 - 21)), gate.check_out());
    assert!(matches!(
        start_checkout(&api, &mut gate, &place, &BookingPolicy::default()),
        Err(Error::NotChecked)
    ));
}

#[test]
fn failed_check_keeps_reservation_disabled() {
    let api = api();
    *api.offline.borrow_mut() = true;
    let mut gate = gate();
    assert!(check_availability(&api, &mut gate, &"chalet".into()).is_err());
    assert_eq!(gate.state(), AvailabilityState::Unknown);
    assert!(!gate.can_reserve());
}

#[test]
fn check_without_dates() {
    let api = api();
    let mut gate = BookingGate::new();
    assert!(matches!(
        check_availability(&api, &mut gate, &"chalet".into()),
        Err(Error::MissingDates)
    ));
}

#[test]
fn booking_needs_a_payment() {
    let api = api();
    let stay = gate().stay().unwrap();
    assert!(complete_booking(&api, &"chalet".into(), stay, " ").is_err());
    assert!(api.bookings.borrow().is_empty());
}

#[test]
fn cancel_only_if_allowed() {
    let api = api();
    api.bookings.borrow_mut().extend([
        Booking::build()
            .id("b1")
            .guest("guest")
            .place("chalet")
            .status(BookingStatus::Confirmed)
            .can_cancel(true)
            .finish(),
        Booking::build()
            .id("b2")
            .guest("guest")
            .place("chalet")
            .status(BookingStatus::Confirmed)
            .can_cancel(false)
            .finish(),
    ]);
    let cancelled = cancel_booking(&api, &"b1".into()).unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert!(matches!(
        cancel_booking(&api, &"b2".into()),
        Err(Error::NotCancellable)
    ));
    assert!(matches!(
        cancel_booking(&api, &"b3".into()),
        Err(Error::NotFound)
    ));
}

#[test]
fn list_bookings_with_places() {
    let api = api();
    api.bookings.borrow_mut().extend([
        Booking::build()
            .id("b1")
            .guest("guest")
            .place("chalet")
            .stay(date!(2025 - 12 - 20), date!(2025 - 12 - 25))
            .status(BookingStatus::Confirmed)
            .finish(),
        Booking::build()
            .id("b2")
            .guest("guest")
            .place("chalet")
            .stay(date!(2025 - 10 - 01), date!(2025 - 10 - 03))
            .status(BookingStatus::Completed)
            .finish(),
        Booking::build()
            .id("b3")
            .guest("guest")
            .place("gone")
            .stay(date!(2026 - 01 - 10), date!(2026 - 01 - 12))
            .status(BookingStatus::Pending)
            .finish(),
        Booking::build().id("b4").guest("other").finish(),
    ]);
    let filter = BookingFilter {
        period: BookingPeriod::Upcoming,
        status: None,
    };
    let bookings = my_bookings(&api, &filter, date!(2025 - 11 - 01)).unwrap();
    assert_eq!(bookings.len(), 2);

    let mut cache = PlaceCache::new();
    let stays = bookings_with_places(&api, &mut cache, bookings);
    assert_eq!(stays[0].place.as_ref().map(|p| p.id.as_str()), Some("chalet"));
    assert!(stays[1].place.is_none());
    assert_eq!(*api.place_requests.borrow(), 2);
}
