use hbnb_entities::{
    booking::{Booking, BookingStatus},
    place::Place,
};
use time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingPeriod {
    #[default]
    All,
    Upcoming,
    Past,
}

impl BookingPeriod {
    pub const fn as_query(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Upcoming => Some("upcoming"),
            Self::Past => Some("past"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookingFilter {
    pub period: BookingPeriod,
    pub status: Option<BookingStatus>,
}

impl BookingFilter {
    pub fn matches(&self, booking: &Booking, today: Date) -> bool {
        let in_period = match self.period {
            BookingPeriod::All => true,
            BookingPeriod::Upcoming => booking.is_upcoming(today),
            BookingPeriod::Past => booking.is_past(today),
        };
        in_period && self.status.map_or(true, |s| s == booking.status)
    }

    /// Query parameters of `GET bookings/`.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![];
        if let Some(period) = self.period.as_query() {
            params.push(("type", period.to_string()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.to_string()));
        }
        params
    }
}

pub fn apply_booking_filter(
    bookings: Vec<Booking>,
    filter: &BookingFilter,
    today: Date,
) -> Vec<Booking> {
    bookings
        .into_iter()
        .filter(|b| filter.matches(b, today))
        .collect()
}

/// A booking together with the booked place, if it could be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct StayWithPlace {
    pub booking: Booking,
    pub place: Option<Place>,
}

/// Removes a booking from a visible list, e.g. after it has been cancelled.
pub fn remove_booking(stays: &mut Vec<StayWithPlace>, booking_id: &str) -> bool {
    let len = stays.len();
    stays.retain(|s| s.booking.id.as_str() != booking_id);
    stays.len() != len
}
