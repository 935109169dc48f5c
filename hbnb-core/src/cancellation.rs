//! Cancellation policy.
//!
//! The backend decides whether a booking can still be cancelled.
//! The deadline computed here is only shown to the guest.

use hbnb_entities::booking::Booking;
use time::{macros::time, Date, Duration, PrimitiveDateTime, Time};

pub const CANCELLATION_WINDOW: Duration = Duration::hours(48);

pub const DEFAULT_CHECK_IN_TIME: Time = time!(15:00);

pub fn cancellation_deadline(check_in: Date, check_in_time: Time) -> PrimitiveDateTime {
    PrimitiveDateTime::new(check_in, check_in_time) - CANCELLATION_WINDOW
}

pub fn is_free_cancellation(deadline: PrimitiveDateTime, now: PrimitiveDateTime) -> bool {
    now <= deadline
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelAction {
    Enabled,
    Disabled,
}

impl CancelAction {
    pub const fn for_booking(booking: &Booking) -> Self {
        if booking.can_cancel {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hbnb_entities::builders::*;
    use time::macros::{date, datetime};

    #[test]
    fn deadline_is_two_days_before_check_in() {
        let deadline = cancellation_deadline(date!(2025 - 12 - 20), DEFAULT_CHECK_IN_TIME);
        assert_eq!(deadline, datetime!(2025 - 12 - 18 15:00));
    }

    #[test]
    fn free_cancellation_until_deadline() {
        let deadline = datetime!(2025 - 12 - 18 15:00);
        assert!(is_free_cancellation(deadline, datetime!(2025 - 12 - 18 15:00)));
        assert!(is_free_cancellation(deadline, datetime!(2025 - 12 - 01 09:00)));
        assert!(!is_free_cancellation(deadline, datetime!(2025 - 12 - 18 15:01)));
    }

    #[test]
    fn cancel_action_follows_the_backend() {
        // the deadline has passed but the backend still allows it
        let booking = Booking::build()
            .deadline(Some(datetime!(2020 - 01 - 01 15:00)))
            .can_cancel(true)
            .finish();
        assert!(CancelAction::for_booking(&booking).is_enabled());
        let booking = Booking::build().can_cancel(false).finish();
        assert_eq!(CancelAction::for_booking(&booking), CancelAction::Disabled);
    }
}
