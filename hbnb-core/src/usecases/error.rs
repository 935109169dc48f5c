use crate::{
    availability::GateError,
    gateways,
    review::ReviewInvalidation,
    util::validate::{AccountInvalidation, PlaceInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Title is required")]
    Title,
    #[error("Description must be at least 40 characters")]
    Description,
    #[error("Price must be greater than 0")]
    Price,
    #[error("Latitude must be between -90 and 90")]
    Latitude,
    #[error("Longitude must be between -180 and 180")]
    Longitude,
    #[error("First and last name are required")]
    Name,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid password")]
    Password,
    #[error("Rating value out of range")]
    Rating,
    #[error("Reviews must have between 10 and 500 characters")]
    ReviewText,
    #[error("The check-out date must be after the check-in date")]
    InvalidStay,
    #[error("Choose your check-in and check-out dates first.")]
    MissingDates,
    #[error("Check availability before reserving.")]
    NotChecked,
    #[error("The place is not available for these dates")]
    Unavailable,
    #[error("Only guests with a finished stay can review this place")]
    NotEligibleForReview,
    #[error("This booking can no longer be cancelled")]
    NotCancellable,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Your session has expired. Please log in again.")]
    TokenExpired,
    #[error("The requested object could not be found")]
    NotFound,
    #[error("{0}")]
    Backend(String),
    #[error(transparent)]
    Gateway(anyhow::Error),
}

impl From<gateways::Error> for Error {
    fn from(err: gateways::Error) -> Self {
        match err {
            gateways::Error::NotFound => Self::NotFound,
            gateways::Error::Unauthorized => Self::Unauthorized,
            gateways::Error::TokenExpired => Self::TokenExpired,
            gateways::Error::Rejected(msg) => Self::Backend(msg),
            gateways::Error::Other(err) => Self::Gateway(err),
        }
    }
}

impl From<hbnb_entities::stay::InvalidStay> for Error {
    fn from(_: hbnb_entities::stay::InvalidStay) -> Self {
        Self::InvalidStay
    }
}

impl From<hbnb_entities::review::RatingOutOfRange> for Error {
    fn from(_: hbnb_entities::review::RatingOutOfRange) -> Self {
        Self::Rating
    }
}

impl From<GateError> for Error {
    fn from(err: GateError) -> Self {
        match err {
            GateError::MissingDates => Self::MissingDates,
            GateError::InvalidStay => Self::InvalidStay,
            GateError::NotChecked => Self::NotChecked,
            GateError::Unavailable => Self::Unavailable,
        }
    }
}

impl From<PlaceInvalidation> for Error {
    fn from(err: PlaceInvalidation) -> Self {
        match err {
            PlaceInvalidation::Title => Self::Title,
            PlaceInvalidation::Description => Self::Description,
            PlaceInvalidation::Price => Self::Price,
            PlaceInvalidation::Latitude => Self::Latitude,
            PlaceInvalidation::Longitude => Self::Longitude,
        }
    }
}

impl From<AccountInvalidation> for Error {
    fn from(err: AccountInvalidation) -> Self {
        match err {
            AccountInvalidation::Name => Self::Name,
            AccountInvalidation::Email => Self::Email,
            AccountInvalidation::Password => Self::Password,
        }
    }
}

impl From<ReviewInvalidation> for Error {
    fn from(err: ReviewInvalidation) -> Self {
        match err {
            ReviewInvalidation::Rating => Self::Rating,
            ReviewInvalidation::TooShort | ReviewInvalidation::TooLong => Self::ReviewText,
        }
    }
}
