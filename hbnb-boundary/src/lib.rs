use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::{parse_local_datetime, ConversionError};

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Place {
    pub id          : String,
    pub title       : String,
    #[serde(default)]
    pub description : String,
    pub price       : f64,
    pub latitude    : f64,
    pub longitude   : f64,
    #[serde(default)]
    pub owner_id    : Option<String>,
    #[serde(default)]
    pub amenities   : Vec<Amenity>,
    #[serde(default)]
    pub images      : Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews     : Vec<Review>,
}

/// Amenities are either plain names or `{id, name}` objects.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(untagged)]
pub enum Amenity {
    Name(String),
    Object {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        name: String,
    },
}

impl Amenity {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Object { name, .. } => name,
        }
    }
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewPlace {
    pub title       : String,
    pub description : String,
    pub price       : f64,
    pub latitude    : f64,
    pub longitude   : f64,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub amenities   : Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PlaceUpdate {
    pub title: String,
    pub description: String,
    pub price: f64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Review {
    pub id       : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id : Option<String>,
    pub user_id  : String,
    pub rating   : u8,
    pub text     : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewReview {
    pub place_id: String,
    pub rating: u8,
    pub text: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Booking {
    pub id                    : String,
    pub place_id              : String,
    pub guest_id              : String,
    /// `YYYY-MM-DD`
    pub check_in_date         : String,
    /// `YYYY-MM-DD`
    pub check_out_date        : String,
    pub total_price           : f64,
    pub status                : String,
    #[serde(default)]
    pub can_cancel            : bool,
    /// ISO 8601 local date-time
    #[serde(default)]
    pub cancellation_deadline : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at            : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at            : Option<String>,
}

/// Answer of the cancel and confirm endpoints.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct BookingActionResponse {
    #[serde(default)]
    pub message: String,
    pub booking: Booking,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewBooking {
    pub place_id          : String,
    pub check_in_date     : String,
    pub check_out_date    : String,
    pub payment_intent_id : String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct AvailabilityRequest {
    pub place_id       : String,
    pub check_in_date  : String,
    pub check_out_date : String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct AvailabilityResponse {
    pub available      : bool,
    #[serde(default)]
    pub place_id       : String,
    #[serde(default)]
    pub check_in_date  : String,
    #[serde(default)]
    pub check_out_date : String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PaymentIntentRequest {
    pub currency       : String,
    pub place_id       : String,
    pub check_in_date  : String,
    pub check_out_date : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PaymentIntent {
    pub client_secret: String,
    pub payment_intent_id: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct AccessToken {
    pub access_token: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct User {
    pub id            : String,
    #[serde(default)]
    pub first_name    : String,
    #[serde(default)]
    pub last_name     : String,
    pub email         : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number  : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_location : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct UserProfileUpdate {
    pub first_name    : String,
    pub last_name     : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number  : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_location : Option<String>,
}

/// Error returned by any API call that did not succeed.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, thiserror::Error),
    error("{message}")
)]
pub struct Error {
    /// The HTTP status code of the error.
    pub http_status: u16,
    /// Descriptive error message.
    pub message: String,
}

impl Error {
    pub fn is_unauthorized(&self) -> bool {
        self.http_status == 401
    }

    pub fn is_not_found(&self) -> bool {
        self.http_status == 404
    }

    /// A 401 answer whose message tells that the token expired.
    pub fn is_token_expired(&self) -> bool {
        self.is_unauthorized() && self.message.to_lowercase().contains("expired")
    }
}

/// The different error bodies the backend sends.
///
/// Depending on the endpoint the message lives in `error`,
/// `message` or `msg` (the latter is used by the token layer).
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl ErrorBody {
    pub fn into_error(self, http_status: u16) -> Error {
        let message = [self.error, self.message, self.msg]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP {http_status}"));
        Error {
            http_status,
            message,
        }
    }
}
