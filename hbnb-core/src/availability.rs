//! Client-side gate in front of the reservation.
//!
//! A stay can only be reserved after the backend confirmed that the
//! currently selected dates are available. Any change of the selection
//! invalidates a previous answer.

use hbnb_entities::stay::{nights_between, StayDates};
use thiserror::Error;
use time::Date;

use crate::pricing::{Fees, PriceBreakdown};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityState {
    #[default]
    Unknown,
    Checking,
    Available,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("Choose your check-in and check-out dates first.")]
    MissingDates,
    #[error("The check-out date must be after the check-in date.")]
    InvalidStay,
    #[error("Check availability before reserving.")]
    NotChecked,
    #[error("The place is not available for these dates.")]
    Unavailable,
}

/// A stay that passed the gate, together with its price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reservation {
    pub stay: StayDates,
    pub price: PriceBreakdown,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingGate {
    check_in: Option<Date>,
    check_out: Option<Date>,
    state: AvailabilityState,
    last_error: Option<GateError>,
}

impl BookingGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_dates(&mut self, check_in: Option<Date>, check_out: Option<Date>) {
        self.check_in = check_in;
        self.check_out = check_out;
        self.state = AvailabilityState::Unknown;
        self.last_error = None;
    }

    pub fn clear(&mut self) {
        self.select_dates(None, None);
    }

    pub const fn check_in(&self) -> Option<Date> {
        self.check_in
    }

    pub const fn check_out(&self) -> Option<Date> {
        self.check_out
    }

    pub const fn state(&self) -> AvailabilityState {
        self.state
    }

    pub const fn last_error(&self) -> Option<GateError> {
        self.last_error
    }

    pub fn nights(&self) -> u32 {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => nights_between(check_in, check_out),
            _ => 0,
        }
    }

    /// The currently selected stay, if complete and valid.
    pub fn stay(&self) -> Result<StayDates, GateError> {
        let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) else {
            return Err(GateError::MissingDates);
        };
        StayDates::try_new(check_in, check_out).map_err(|_| GateError::InvalidStay)
    }

    pub fn begin_check(&mut self) -> Result<StayDates, GateError> {
        match self.stay() {
            Ok(stay) => {
                self.state = AvailabilityState::Checking;
                self.last_error = None;
                Ok(stay)
            }
            Err(err) => {
                self.last_error = Some(err);
                Err(err)
            }
        }
    }

    /// Applies the answer of an availability check.
    ///
    /// Returns `false` if the answer belongs to dates
    /// that are no longer selected.
    pub fn finish_check(&mut self, stay: &StayDates, available: bool) -> bool {
        if self.state != AvailabilityState::Checking || self.stay().ok().as_ref() != Some(stay) {
            log::debug!("Dropping stale availability result for {stay}");
            return false;
        }
        self.state = if available {
            AvailabilityState::Available
        } else {
            AvailabilityState::Unavailable
        };
        true
    }

    pub fn check_failed(&mut self) {
        self.state = AvailabilityState::Unknown;
    }

    pub fn can_reserve(&self) -> bool {
        self.state == AvailabilityState::Available && self.nights() > 0
    }

    pub fn reserve(&mut self, nightly_rate: f64, fees: &Fees) -> Result<Reservation, GateError> {
        let result = self.stay().and_then(|stay| {
            if self.can_reserve() {
                Ok(Reservation {
                    stay,
                    price: PriceBreakdown::calculate(nightly_rate, stay.nights(), fees),
                })
            } else if self.state == AvailabilityState::Unavailable {
                Err(GateError::Unavailable)
            } else {
                Err(GateError::NotChecked)
            }
        });
        self.last_error = result.as_ref().err().copied();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use time::{macros::date, Duration};

    fn checked_gate() -> (BookingGate, StayDates) {
        let mut gate = BookingGate::new();
        gate.select_dates(Some(date!(2025 - 12 - 20)), Some(date!(2025 - 12 - 25)));
        let stay = gate.begin_check().unwrap();
        assert!(gate.finish_check(&stay, true));
        (gate, stay)
    }

    #[test]
    fn reserve_after_successful_check() {
        let (mut gate, stay) = checked_gate();
        assert_eq!(gate.nights(), 5);
        assert!(gate.can_reserve());
        let reservation = gate.reserve(100.0, &Fees::default()).unwrap();
        assert_eq!(reservation.stay, stay);
        assert_eq!(reservation.price.total, 500.0 + 150.0 + 280.0);
    }

    #[test]
    fn missing_dates() {
        let mut gate = BookingGate::new();
        assert_eq!(gate.begin_check(), Err(GateError::MissingDates));
        assert_eq!(gate.last_error(), Some(GateError::MissingDates));
        gate.select_dates(Some(date!(2025 - 12 - 20)), None);
        assert_eq!(gate.last_error(), None);
        assert_eq!(gate.begin_check(), Err(GateError::MissingDates));
        assert_eq!(gate.state(), AvailabilityState::Unknown);
    }

    #[test]
    fn reserve_without_check_is_blocked() {
        let mut gate = BookingGate::new();
        gate.select_dates(Some(date!(2025 - 12 - 20)), Some(date!(2025 - 12 - 25)));
        assert_eq!(
            gate.reserve(100.0, &Fees::default()),
            Err(GateError::NotChecked)
        );
        assert_eq!(
            GateError::NotChecked.to_string(),
            "Check availability before reserving."
        );
    }

    #[test]
    fn reserve_unavailable_dates_is_blocked() {
        let mut gate = BookingGate::new();
        gate.select_dates(Some(date!(2025 - 12 - 20)), Some(date!(2025 - 12 - 25)));
        let stay = gate.begin_check().unwrap();
        gate.finish_check(&stay, false);
        assert_eq!(gate.state(), AvailabilityState::Unavailable);
        assert_eq!(
            gate.reserve(100.0, &Fees::default()),
            Err(GateError::Unavailable)
        );
    }

    #[test]
    fn reversed_dates_are_never_reservable() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let check_in = date!(2025 - 01 - 01) + Duration::days(rng.gen_range(0..365));
            let check_out = check_in - Duration::days(rng.gen_range(0..30));
            let mut gate = BookingGate::new();
            gate.select_dates(Some(check_in), Some(check_out));
            assert_eq!(gate.nights(), 0);
            assert_eq!(gate.begin_check(), Err(GateError::InvalidStay));
            assert!(!gate.can_reserve());
            assert!(gate.reserve(100.0, &Fees::default()).is_err());
        }
    }

    #[test]
    fn changing_dates_resets_availability() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let (mut gate, _) = checked_gate();
            let check_in = date!(2026 - 01 - 01) + Duration::days(rng.gen_range(0..100));
            let check_out = check_in + Duration::days(rng.gen_range(1..10));
            if rng.gen() {
                gate.select_dates(Some(check_in), gate.check_out());
            } else {
                gate.select_dates(gate.check_in(), Some(check_out));
            }
            assert_eq!(gate.state(), AvailabilityState::Unknown);
            assert!(!gate.can_reserve());
        }
    }

    #[test]
    fn stale_results_are_dropped() {
        let mut gate = BookingGate::new();
        gate.select_dates(Some(date!(2025 - 12 - 20)), Some(date!(2025 - 12 - 25)));
        let old = gate.begin_check().unwrap();
        gate.select_dates(Some(date!(2025 - 12 - 21)), Some(date!(2025 - 12 - 25)));
        let new = gate.begin_check().unwrap();
        assert!(!gate.finish_check(&old, true));
        assert_eq!(gate.state(), AvailabilityState::Checking);
        assert!(gate.finish_check(&new, true));
        assert!(gate.can_reserve());
    }

    #[test]
    fn late_result_after_reselecting_is_dropped() {
        let mut gate = BookingGate::new();
        gate.select_dates(Some(date!(2025 - 12 - 20)), Some(date!(2025 - 12 - 25)));
        let stay = gate.begin_check().unwrap();
        gate.select_dates(Some(date!(2025 - 12 - 20)), Some(date!(2025 - 12 - 25)));
        assert!(!gate.finish_check(&stay, true));
        assert_eq!(gate.state(), AvailabilityState::Unknown);
    }

    #[test]
    fn failed_check_resets_state() {
        let mut gate = BookingGate::new();
        gate.select_dates(Some(date!(2025 - 12 - 20)), Some(date!(2025 - 12 - 25)));
        gate.begin_check().unwrap();
        gate.check_failed();
        assert_eq!(gate.state(), AvailabilityState::Unknown);
        gate.clear();
        assert_eq!(gate.nights(), 0);
    }
}
