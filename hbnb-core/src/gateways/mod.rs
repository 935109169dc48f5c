// Access to the HBnB backend.
// Implementations carry the session token themselves,
// so none of the methods takes credentials.

use hbnb_entities::{
    booking::{Booking, NewBooking},
    id::Id,
    payment::PaymentIntent,
    place::{NewPlace, Place, PlaceUpdate},
    review::{NewReview, Review},
    stay::StayDates,
    user::{Credentials, Registration, User, UserProfileUpdate},
};
use thiserror::Error;

use crate::{bookings::BookingFilter, favorites::Favorites};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("Authentication required")]
    Unauthorized,
    #[error("Token expired")]
    TokenExpired,
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait AuthGateway {
    /// Returns the access token.
    fn login(&self, credentials: &Credentials) -> Result<String>;
    fn register(&self, registration: &Registration) -> Result<User>;
}

pub trait UserGateway {
    fn current_user(&self) -> Result<User>;
    fn user(&self, id: &Id) -> Result<User>;
    fn update_profile(&self, id: &Id, update: &UserProfileUpdate) -> Result<User>;
}

pub trait PlaceGateway {
    fn places(&self) -> Result<Vec<Place>>;
    fn place(&self, id: &Id) -> Result<Place>;
    fn create_place(&self, place: &NewPlace) -> Result<Place>;
    fn update_place(&self, id: &Id, update: &PlaceUpdate) -> Result<Place>;
    fn delete_place(&self, id: &Id) -> Result<()>;
}

pub trait ReviewGateway {
    fn place_reviews(&self, place_id: &Id) -> Result<Vec<Review>>;
    fn create_review(&self, review: &NewReview) -> Result<Review>;
}

pub trait BookingGateway {
    fn check_availability(&self, place_id: &Id, stay: &StayDates) -> Result<bool>;
    fn create_booking(&self, booking: &NewBooking) -> Result<Booking>;
    fn my_bookings(&self, filter: &BookingFilter) -> Result<Vec<Booking>>;
    fn booking(&self, id: &Id) -> Result<Booking>;
    /// Cancels (as guest) or declines (as host) a booking.
    fn cancel_booking(&self, id: &Id) -> Result<Booking>;
    fn confirm_booking(&self, id: &Id) -> Result<Booking>;
    fn place_bookings(&self, place_id: &Id) -> Result<Vec<Booking>>;
}

pub trait PaymentGateway {
    fn create_payment_intent(&self, place_id: &Id, stay: &StayDates) -> Result<PaymentIntent>;
}

pub trait FavoritesStore {
    fn load(&self) -> Result<Favorites>;
    fn save(&self, favorites: &Favorites) -> Result<()>;
}
