use std::fmt;

use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description, Date};

/// Dates travel as `YYYY-MM-DD`.
pub const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("The check-out date must be after the check-in date")]
pub struct InvalidStay;

/// Number of whole nights between two dates.
///
/// Returns `0` if `check_out` is not after `check_in`.
pub fn nights_between(check_in: Date, check_out: Date) -> u32 {
    let days = (check_out - check_in).whole_days();
    u32::try_from(days).unwrap_or(0)
}

/// A non-empty date range `[check_in, check_out)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StayDates {
    check_in: Date,
    check_out: Date,
}

impl StayDates {
    pub fn try_new(check_in: Date, check_out: Date) -> Result<Self, InvalidStay> {
        if nights_between(check_in, check_out) == 0 {
            return Err(InvalidStay);
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub const fn check_in(&self) -> Date {
        self.check_in
    }

    pub const fn check_out(&self) -> Date {
        self.check_out
    }

    pub fn nights(&self) -> u32 {
        nights_between(self.check_in, self.check_out)
    }

    pub fn overlaps(&self, other: &StayDates) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

impl fmt::Display for StayDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {}",
            format_date(self.check_in),
            format_date(self.check_out)
        )
    }
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

pub fn parse_date(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s.trim(), DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use time::{macros::date, Duration};

    #[test]
    fn nights_of_a_five_day_stay() {
        let stay = StayDates::try_new(date!(2025 - 12 - 20), date!(2025 - 12 - 25)).unwrap();
        assert_eq!(stay.nights(), 5);
    }

    #[test]
    fn reject_empty_or_reversed_ranges() {
        let d = date!(2025 - 12 - 20);
        assert_eq!(StayDates::try_new(d, d), Err(InvalidStay));
        assert_eq!(
            StayDates::try_new(d, d - Duration::days(1)),
            Err(InvalidStay)
        );
    }

    #[test]
    fn no_nights_if_check_out_is_not_after_check_in() {
        let mut rng = rand::thread_rng();
        let base = date!(2025 - 01 - 01);
        for _ in 0..500 {
            let check_in = base + Duration::days(rng.gen_range(0..730));
            let check_out = check_in - Duration::days(rng.gen_range(0..365));
            assert_eq!(nights_between(check_in, check_out), 0);
            assert!(StayDates::try_new(check_in, check_out).is_err());
        }
    }

    #[test]
    fn nights_match_the_day_difference() {
        let mut rng = rand::thread_rng();
        let base = date!(2024 - 02 - 27);
        for _ in 0..500 {
            let check_in = base + Duration::days(rng.gen_range(0..730));
            let nights = rng.gen_range(1..60);
            let check_out = check_in + Duration::days(nights);
            assert_eq!(nights_between(check_in, check_out), nights as u32);
        }
    }

    #[test]
    fn overlapping_stays() {
        let a = StayDates::try_new(date!(2025 - 06 - 01), date!(2025 - 06 - 05)).unwrap();
        let b = StayDates::try_new(date!(2025 - 06 - 04), date!(2025 - 06 - 08)).unwrap();
        let c = StayDates::try_new(date!(2025 - 06 - 05), date!(2025 - 06 - 08)).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn parse_and_format_api_dates() {
        let d = parse_date("2025-12-20").unwrap();
        assert_eq!(d, date!(2025 - 12 - 20));
        assert_eq!(format_date(d), "2025-12-20");
        assert!(parse_date("20.12.2025").is_err());
    }
}
