use std::time::Duration;

use reqwest::{
    blocking::{Client, RequestBuilder, Response},
    StatusCode,
};
use serde::de::{DeserializeOwned, IgnoredAny};

use hbnb_boundary as b;
use hbnb_core::{
    bookings::BookingFilter,
    gateways::{
        self, AuthGateway, BookingGateway, PaymentGateway, PlaceGateway, ReviewGateway,
        UserGateway,
    },
};
use hbnb_entities::{
    booking::{Booking, NewBooking},
    id::Id,
    payment::PaymentIntent,
    place::{NewPlace, Place, PlaceUpdate},
    review::{NewReview, Review},
    stay::StayDates,
    user::{Credentials, Registration, User, UserProfileUpdate},
};

use crate::{Error, Result};

/// Blocking client of the HBnB REST API.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

/// Translates a non-2xx answer into an error.
pub fn error_from_body(status: StatusCode, body: &str) -> Error {
    serde_json::from_str::<b::ErrorBody>(body)
        .unwrap_or_default()
        .into_error(status.as_u16())
        .into()
}

fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if status.is_success() {
        Ok(response.json()?)
    } else {
        let body = response.text().unwrap_or_default();
        let err = error_from_body(status, &body);
        log::debug!("Request failed with {status}: {err}");
        Err(err)
    }
}

impl HttpApi {
    pub fn try_new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    #[must_use]
    pub fn with_token(self, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..self
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/{path}", self.base_url)
    }

    fn send<T>(&self, req: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let req = match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        };
        into_json(req.send()?)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.client.get(self.url(path)))
    }

    fn post<D: serde::Serialize, T: DeserializeOwned>(&self, path: &str, data: &D) -> Result<T> {
        self.send(self.client.post(self.url(path)).json(data))
    }

    fn put<D: serde::Serialize, T: DeserializeOwned>(&self, path: &str, data: &D) -> Result<T> {
        self.send(self.client.put(self.url(path)).json(data))
    }

    fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.client.delete(self.url(path)))
    }

    fn bookings(bookings: Vec<b::Booking>) -> Result<Vec<Booking>> {
        bookings
            .into_iter()
            .map(|booking| Booking::try_from(booking).map_err(Error::from))
            .collect()
    }
}

type GatewayResult<T> = gateways::Result<T>;

impl AuthGateway for HttpApi {
    fn login(&self, credentials: &Credentials) -> GatewayResult<String> {
        let body = b::Credentials::from(credentials.clone());
        let b::AccessToken { access_token } = self.post("auth/login", &body)?;
        Ok(access_token)
    }

    fn register(&self, registration: &Registration) -> GatewayResult<User> {
        let body = b::Registration::from(registration.clone());
        let user: b::User = self.post("users/", &body)?;
        Ok(user.into())
    }
}

impl UserGateway for HttpApi {
    fn current_user(&self) -> GatewayResult<User> {
        let user: b::User = self.get("users/me")?;
        Ok(user.into())
    }

    fn user(&self, id: &Id) -> GatewayResult<User> {
        let user: b::User = self.get(&format!("users/{id}"))?;
        Ok(user.into())
    }

    fn update_profile(&self, id: &Id, update: &UserProfileUpdate) -> GatewayResult<User> {
        let body = b::UserProfileUpdate::from(update.clone());
        let user: b::User = self.put(&format!("users/{id}"), &body)?;
        Ok(user.into())
    }
}

impl PlaceGateway for HttpApi {
    fn places(&self) -> GatewayResult<Vec<Place>> {
        let places: Vec<b::Place> = self.get("places/")?;
        Ok(places.into_iter().map(Place::from).collect())
    }

    fn place(&self, id: &Id) -> GatewayResult<Place> {
        let place: b::Place = self.get(&format!("places/{id}"))?;
        Ok(place.into())
    }

    fn create_place(&self, place: &NewPlace) -> GatewayResult<Place> {
        let body = b::NewPlace::from(place.clone());
        let place: b::Place = self.post("places/", &body)?;
        Ok(place.into())
    }

    fn update_place(&self, id: &Id, update: &PlaceUpdate) -> GatewayResult<Place> {
        let body = b::PlaceUpdate::from(update.clone());
        let place: b::Place = self.put(&format!("places/{id}"), &body)?;
        Ok(place.into())
    }

    fn delete_place(&self, id: &Id) -> GatewayResult<()> {
        let _: IgnoredAny = self.delete(&format!("places/{id}"))?;
        Ok(())
    }
}

impl ReviewGateway for HttpApi {
    fn place_reviews(&self, place_id: &Id) -> GatewayResult<Vec<Review>> {
        let reviews: Vec<b::Review> = self.get(&format!("places/{place_id}/reviews"))?;
        reviews
            .into_iter()
            .map(|r| {
                r.try_into_review(place_id.as_str())
                    .map_err(|err| Error::from(err).into())
            })
            .collect()
    }

    fn create_review(&self, review: &NewReview) -> GatewayResult<Review> {
        let body = b::NewReview::from(review.clone());
        let created: b::Review = self.post("reviews/", &body)?;
        Ok(created
            .try_into_review(review.place_id.as_str())
            .map_err(Error::from)?)
    }
}

impl BookingGateway for HttpApi {
    fn check_availability(&self, place_id: &Id, stay: &StayDates) -> GatewayResult<bool> {
        let body = b::AvailabilityRequest::new(place_id, stay);
        let answer: b::AvailabilityResponse = self.post("bookings/availability/check", &body)?;
        Ok(answer.available)
    }

    fn create_booking(&self, booking: &NewBooking) -> GatewayResult<Booking> {
        let body = b::NewBooking::from(booking.clone());
        let booking: b::Booking = self.post("bookings/", &body)?;
        Ok(Booking::try_from(booking).map_err(Error::from)?)
    }

    fn my_bookings(&self, filter: &BookingFilter) -> GatewayResult<Vec<Booking>> {
        let req = self
            .client
            .get(self.url("bookings/"))
            .query(&filter.query_params());
        let bookings: Vec<b::Booking> = self.send(req)?;
        Ok(Self::bookings(bookings)?)
    }

    fn booking(&self, id: &Id) -> GatewayResult<Booking> {
        let booking: b::Booking = self.get(&format!("bookings/{id}"))?;
        Ok(Booking::try_from(booking).map_err(Error::from)?)
    }

    fn cancel_booking(&self, id: &Id) -> GatewayResult<Booking> {
        let answer: b::BookingActionResponse = self.delete(&format!("bookings/{id}"))?;
        log::debug!("{}", answer.message);
        Ok(Booking::try_from(answer.booking).map_err(Error::from)?)
    }

    fn confirm_booking(&self, id: &Id) -> GatewayResult<Booking> {
        let answer: b::BookingActionResponse =
            self.put(&format!("bookings/{id}/confirm"), &serde_json::json!({}))?;
        log::debug!("{}", answer.message);
        Ok(Booking::try_from(answer.booking).map_err(Error::from)?)
    }

    fn place_bookings(&self, place_id: &Id) -> GatewayResult<Vec<Booking>> {
        let bookings: Vec<b::Booking> = self.get(&format!("bookings/places/{place_id}"))?;
        Ok(Self::bookings(bookings)?)
    }
}

impl PaymentGateway for HttpApi {
    fn create_payment_intent(&self, place_id: &Id, stay: &StayDates) -> GatewayResult<PaymentIntent> {
        let body = b::PaymentIntentRequest::new(place_id, stay);
        let intent: b::PaymentIntent = self.post("payments/create-payment-intent", &body)?;
        Ok(intent.into())
    }
}
