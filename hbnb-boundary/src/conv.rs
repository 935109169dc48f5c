use super::*;
use hbnb_entities as e;
use thiserror::Error;
use time::{macros::format_description, PrimitiveDateTime};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Invalid date: {0}")]
    Date(String),
    #[error("Invalid date-time: {0}")]
    DateTime(String),
    #[error("Invalid stay: {0} → {1}")]
    Stay(String, String),
    #[error("Invalid booking status: {0}")]
    Status(String),
    #[error("Invalid rating: {0}")]
    Rating(u8),
}

fn parse_date(s: &str) -> Result<time::Date, ConversionError> {
    e::stay::parse_date(s).map_err(|_| ConversionError::Date(s.to_string()))
}

/// Parses a local ISO 8601 date-time, ignoring fractional seconds.
pub fn parse_local_datetime(s: &str) -> Result<PrimitiveDateTime, ConversionError> {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let trimmed = s.trim().trim_end_matches('Z');
    let without_fraction = trimmed.split_once('.').map_or(trimmed, |(head, _)| head);
    PrimitiveDateTime::parse(without_fraction, format)
        .map_err(|_| ConversionError::DateTime(s.to_string()))
}

fn stay_dates(check_in: &str, check_out: &str) -> Result<e::stay::StayDates, ConversionError> {
    e::stay::StayDates::try_new(parse_date(check_in)?, parse_date(check_out)?)
        .map_err(|_| ConversionError::Stay(check_in.to_string(), check_out.to_string()))
}

impl From<Place> for e::place::Place {
    fn from(from: Place) -> Self {
        let Place {
            id,
            title,
            description,
            price,
            latitude,
            longitude,
            owner_id,
            amenities,
            images,
            reviews: _,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            price,
            latitude,
            longitude,
            owner_id: owner_id.unwrap_or_default().into(),
            amenities: amenities.iter().map(|a| a.name().to_string()).collect(),
            images,
        }
    }
}

impl From<e::place::NewPlace> for NewPlace {
    fn from(from: e::place::NewPlace) -> Self {
        let e::place::NewPlace {
            title,
            description,
            price,
            latitude,
            longitude,
            amenities,
        } = from;
        Self {
            title,
            description,
            price,
            latitude,
            longitude,
            amenities,
        }
    }
}

impl From<e::place::PlaceUpdate> for PlaceUpdate {
    fn from(from: e::place::PlaceUpdate) -> Self {
        let e::place::PlaceUpdate {
            title,
            description,
            price,
        } = from;
        Self {
            title,
            description,
            price,
        }
    }
}

impl Review {
    /// Reviews nested in a place omit the place id.
    pub fn try_into_review(self, place_id: &str) -> Result<e::review::Review, ConversionError> {
        let Review {
            id,
            place_id: own_place_id,
            user_id,
            rating,
            text,
        } = self;
        Ok(e::review::Review {
            id: id.into(),
            place_id: own_place_id.unwrap_or_else(|| place_id.to_string()).into(),
            user_id: user_id.into(),
            rating: e::review::Rating::try_from(rating)
                .map_err(|_| ConversionError::Rating(rating))?,
            text,
        })
    }
}

impl From<e::review::NewReview> for NewReview {
    fn from(from: e::review::NewReview) -> Self {
        Self {
            place_id: from.place_id.into(),
            rating: from.rating.into(),
            text: from.text,
        }
    }
}

impl TryFrom<Booking> for e::booking::Booking {
    type Error = ConversionError;
    fn try_from(from: Booking) -> Result<Self, Self::Error> {
        let Booking {
            id,
            place_id,
            guest_id,
            check_in_date,
            check_out_date,
            total_price,
            status,
            can_cancel,
            cancellation_deadline,
            created_at: _,
            updated_at: _,
        } = from;
        let stay = stay_dates(&check_in_date, &check_out_date)?;
        let status = status
            .parse::<e::booking::BookingStatus>()
            .map_err(|_| ConversionError::Status(status))?;
        let cancellation_deadline = cancellation_deadline
            .as_deref()
            .map(parse_local_datetime)
            .transpose()?;
        Ok(Self {
            id: id.into(),
            place_id: place_id.into(),
            guest_id: guest_id.into(),
            stay,
            status,
            total_price,
            cancellation_deadline,
            can_cancel,
        })
    }
}

impl From<e::booking::NewBooking> for NewBooking {
    fn from(from: e::booking::NewBooking) -> Self {
        let e::booking::NewBooking {
            place_id,
            stay,
            payment_intent_id,
        } = from;
        Self {
            place_id: place_id.into(),
            check_in_date: e::stay::format_date(stay.check_in()),
            check_out_date: e::stay::format_date(stay.check_out()),
            payment_intent_id,
        }
    }
}

impl AvailabilityRequest {
    pub fn new(place_id: &e::id::Id, stay: &e::stay::StayDates) -> Self {
        Self {
            place_id: place_id.to_string(),
            check_in_date: e::stay::format_date(stay.check_in()),
            check_out_date: e::stay::format_date(stay.check_out()),
        }
    }
}

impl PaymentIntentRequest {
    pub fn new(place_id: &e::id::Id, stay: &e::stay::StayDates) -> Self {
        Self {
            currency: e::payment::DEFAULT_CURRENCY.to_string(),
            place_id: place_id.to_string(),
            check_in_date: e::stay::format_date(stay.check_in()),
            check_out_date: e::stay::format_date(stay.check_out()),
        }
    }
}

impl From<PaymentIntent> for e::payment::PaymentIntent {
    fn from(from: PaymentIntent) -> Self {
        let PaymentIntent {
            client_secret,
            payment_intent_id,
        } = from;
        Self {
            client_secret,
            payment_intent_id,
        }
    }
}

impl From<e::user::Credentials> for Credentials {
    fn from(from: e::user::Credentials) -> Self {
        let e::user::Credentials { email, password } = from;
        Self { email, password }
    }
}

impl From<e::user::Registration> for Registration {
    fn from(from: e::user::Registration) -> Self {
        let e::user::Registration {
            first_name,
            last_name,
            email,
            password,
        } = from;
        Self {
            first_name,
            last_name,
            email,
            password,
        }
    }
}

impl From<User> for e::user::User {
    fn from(from: User) -> Self {
        let User {
            id,
            first_name,
            last_name,
            email,
            phone_number,
            home_location,
        } = from;
        Self {
            id: id.into(),
            first_name,
            last_name,
            email,
            phone_number,
            home_location,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            first_name,
            last_name,
            email,
            phone_number,
            home_location,
        } = from;
        Self {
            id: id.into(),
            first_name,
            last_name,
            email,
            phone_number,
            home_location,
        }
    }
}

impl From<e::user::UserProfileUpdate> for UserProfileUpdate {
    fn from(from: e::user::UserProfileUpdate) -> Self {
        let e::user::UserProfileUpdate {
            first_name,
            last_name,
            phone_number,
            home_location,
        } = from;
        Self {
            first_name,
            last_name,
            phone_number,
            home_location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn booking() -> Booking {
        Booking {
            id: "b1".into(),
            place_id: "p1".into(),
            guest_id: "u1".into(),
            check_in_date: "2025-12-20".into(),
            check_out_date: "2025-12-25".into(),
            total_price: 1430.0,
            status: "confirmed".into(),
            can_cancel: true,
            cancellation_deadline: Some("2025-12-18T15:00:00.000123".into()),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn booking_from_wire() {
        let booking = e::booking::Booking::try_from(booking()).unwrap();
        assert_eq!(booking.stay.check_in(), date!(2025 - 12 - 20));
        assert_eq!(booking.stay.nights(), 5);
        assert_eq!(booking.status, e::booking::BookingStatus::Confirmed);
        assert_eq!(
            booking.cancellation_deadline,
            Some(datetime!(2025 - 12 - 18 15:00))
        );
    }

    #[test]
    fn reject_malformed_bookings() {
        let b = Booking {
            check_in_date: "20.12.2025".into(),
            ..booking()
        };
        assert_eq!(
            e::booking::Booking::try_from(b).unwrap_err(),
            ConversionError::Date("20.12.2025".into())
        );
        let b = Booking {
            check_out_date: "2025-12-20".into(),
            ..booking()
        };
        assert!(matches!(
            e::booking::Booking::try_from(b),
            Err(ConversionError::Stay(_, _))
        ));
        let b = Booking {
            status: "unknown".into(),
            ..booking()
        };
        assert!(matches!(
            e::booking::Booking::try_from(b),
            Err(ConversionError::Status(_))
        ));
        let b = Booking {
            cancellation_deadline: Some("tomorrow".into()),
            ..booking()
        };
        assert!(matches!(
            e::booking::Booking::try_from(b),
            Err(ConversionError::DateTime(_))
        ));
    }

    #[test]
    fn inactive_bookings_have_no_deadline() {
        let b = Booking {
            status: "cancelled".into(),
            can_cancel: false,
            cancellation_deadline: None,
            ..booking()
        };
        let booking = e::booking::Booking::try_from(b).unwrap();
        assert_eq!(booking.cancellation_deadline, None);
        assert!(!booking.can_cancel);
    }

    #[test]
    fn parse_datetime_variants() {
        let expected = datetime!(2025 - 12 - 18 15:00);
        assert_eq!(parse_local_datetime("2025-12-18T15:00:00"), Ok(expected));
        assert_eq!(parse_local_datetime("2025-12-18T15:00:00.5"), Ok(expected));
        assert_eq!(parse_local_datetime("2025-12-18T15:00:00Z"), Ok(expected));
    }

    #[test]
    fn place_amenities_become_names() {
        let place = Place {
            id: "p1".into(),
            title: "Villa".into(),
            description: String::new(),
            price: 10.0,
            latitude: 0.0,
            longitude: 0.0,
            owner_id: None,
            amenities: vec![
                Amenity::Object {
                    id: Some("a1".into()),
                    name: "WiFi".into(),
                },
                Amenity::Name("Pool".into()),
            ],
            images: vec![],
            reviews: vec![],
        };
        let place = e::place::Place::from(place);
        assert_eq!(place.amenities, vec!["WiFi", "Pool"]);
        assert!(!place.owner_id.is_valid());
    }

    #[test]
    fn nested_review_gets_place_id() {
        let review = Review {
            id: "r1".into(),
            place_id: None,
            user_id: "u1".into(),
            rating: 4,
            text: "Great".into(),
        };
        let review = review.try_into_review("p1").unwrap();
        assert_eq!(review.place_id.as_str(), "p1");
        let review = Review {
            id: "r2".into(),
            place_id: None,
            user_id: "u1".into(),
            rating: 9,
            text: "Great".into(),
        };
        assert_eq!(
            review.try_into_review("p1").unwrap_err(),
            ConversionError::Rating(9)
        );
    }

    #[test]
    fn new_booking_to_wire() {
        let stay = e::stay::StayDates::try_new(date!(2025 - 12 - 20), date!(2025 - 12 - 25)).unwrap();
        let new_booking = NewBooking::from(e::booking::NewBooking {
            place_id: "p1".into(),
            stay,
            payment_intent_id: "pi_1".into(),
        });
        assert_eq!(new_booking.check_in_date, "2025-12-20");
        assert_eq!(new_booking.check_out_date, "2025-12-25");
        let req = PaymentIntentRequest::new(&"p1".into(), &stay);
        assert_eq!(req.currency, "usd");
    }
}
