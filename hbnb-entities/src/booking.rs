use strum::{AsRefStr, Display, EnumString};
use time::{Date, PrimitiveDateTime};

use crate::{id::Id, stay::StayDates};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

pub type BookingStatusParseError = strum::ParseError;

impl BookingStatus {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub const fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id                    : Id,
    pub place_id              : Id,
    pub guest_id              : Id,
    pub stay                  : StayDates,
    pub status                : BookingStatus,
    pub total_price           : f64,
    /// Computed by the backend; absent for inactive bookings.
    pub cancellation_deadline : Option<PrimitiveDateTime>,
    /// Computed by the backend; the only authority for cancellations.
    pub can_cancel            : bool,
}

impl Booking {
    pub fn is_upcoming(&self, today: Date) -> bool {
        self.stay.check_in() >= today && self.status.is_active()
    }

    pub fn is_past(&self, today: Date) -> bool {
        self.stay.check_out() <= today
    }
}

/// Booking request sent after a successful payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub place_id: Id,
    pub stay: StayDates,
    pub payment_intent_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;
    use time::macros::date;

    #[test]
    fn parse_status() {
        assert_eq!("pending".parse(), Ok(BookingStatus::Pending));
        assert_eq!("completed".parse(), Ok(BookingStatus::Completed));
        assert!("unknown".parse::<BookingStatus>().is_err());
        assert_eq!(BookingStatus::Cancelled.as_str(), "cancelled");
    }

    #[test]
    fn upcoming_bookings_are_active_and_in_the_future() {
        let today = date!(2025 - 12 - 01);
        let booking = Booking::build()
            .stay(date!(2025 - 12 - 20), date!(2025 - 12 - 25))
            .status(BookingStatus::Confirmed)
            .finish();
        assert!(booking.is_upcoming(today));
        assert!(!booking.is_past(today));

        let cancelled = Booking::build()
            .stay(date!(2025 - 12 - 20), date!(2025 - 12 - 25))
            .status(BookingStatus::Cancelled)
            .finish();
        assert!(!cancelled.is_upcoming(today));
    }

    #[test]
    fn past_bookings_ended_before_today() {
        let booking = Booking::build()
            .stay(date!(2025 - 11 - 01), date!(2025 - 11 - 04))
            .finish();
        assert!(booking.is_past(date!(2025 - 11 - 04)));
        assert!(!booking.is_past(date!(2025 - 11 - 03)));
    }
}
