use gloo_net::http::{Request, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};

use hbnb_boundary as b;
use hbnb_core::bookings::BookingFilter;
use hbnb_entities::{
    booking::{Booking, NewBooking},
    id::Id,
    payment::PaymentIntent,
    place::{NewPlace, Place, PlaceUpdate},
    review::{NewReview, Review},
    stay::StayDates,
    user::{User, UserProfileUpdate},
};

use crate::{auth_header_value, into_empty, into_json, Error, Result};

/// Authorized HBnB API
#[derive(Clone)]
pub struct UserApi {
    url: String,
    token: String,
}

impl UserApi {
    #[must_use]
    pub const fn new(url: String, token: String) -> Self {
        Self { url, token }
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    fn add_auth_headers(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("Authorization", &auth_header_value(&self.token))
    }

    async fn send<T>(&self, req: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .add_auth_headers(req)
            .header("Content-Type", "application/json")
            .send()
            .await?;
        into_json(response).await
    }

    async fn send_json<D, T>(&self, req: RequestBuilder, data: &D) -> Result<T>
    where
        T: DeserializeOwned,
        D: Serialize,
    {
        let response = self.add_auth_headers(req).json(data)?.send().await?;
        into_json(response).await
    }

    pub async fn current_user(&self) -> Result<User> {
        let url = format!("{}/users/me", self.url);
        let user: b::User = self.send(Request::get(&url)).await?;
        Ok(user.into())
    }

    pub async fn user(&self, id: &Id) -> Result<User> {
        let url = format!("{}/users/{id}", self.url);
        let user: b::User = self.send(Request::get(&url)).await?;
        Ok(user.into())
    }

    pub async fn update_profile(&self, id: &Id, update: &UserProfileUpdate) -> Result<User> {
        let url = format!("{}/users/{id}", self.url);
        let body = b::UserProfileUpdate::from(update.clone());
        let user: b::User = self.send_json(Request::put(&url), &body).await?;
        Ok(user.into())
    }

    pub async fn create_place(&self, place: &NewPlace) -> Result<Place> {
        let url = format!("{}/places/", self.url);
        let body = b::NewPlace::from(place.clone());
        let place: b::Place = self.send_json(Request::post(&url), &body).await?;
        Ok(place.into())
    }

    pub async fn update_place(&self, id: &Id, update: &PlaceUpdate) -> Result<Place> {
        let url = format!("{}/places/{id}", self.url);
        let body = b::PlaceUpdate::from(update.clone());
        let place: b::Place = self.send_json(Request::put(&url), &body).await?;
        Ok(place.into())
    }

    pub async fn delete_place(&self, id: &Id) -> Result<()> {
        let url = format!("{}/places/{id}", self.url);
        let response = self.add_auth_headers(Request::delete(&url)).send().await?;
        into_empty(response).await
    }

    pub async fn create_review(&self, review: &NewReview) -> Result<Review> {
        let url = format!("{}/reviews/", self.url);
        let body = b::NewReview::from(review.clone());
        let created: b::Review = self.send_json(Request::post(&url), &body).await?;
        Ok(created.try_into_review(review.place_id.as_str())?)
    }

    pub async fn create_payment_intent(
        &self,
        place_id: &Id,
        stay: &StayDates,
    ) -> Result<PaymentIntent> {
        let url = format!("{}/payments/create-payment-intent", self.url);
        let body = b::PaymentIntentRequest::new(place_id, stay);
        let intent: b::PaymentIntent = self.send_json(Request::post(&url), &body).await?;
        Ok(intent.into())
    }

    pub async fn create_booking(&self, booking: &NewBooking) -> Result<Booking> {
        let url = format!("{}/bookings/", self.url);
        let body = b::NewBooking::from(booking.clone());
        let booking: b::Booking = self.send_json(Request::post(&url), &body).await?;
        Ok(booking.try_into()?)
    }

    pub async fn my_bookings(&self, filter: &BookingFilter) -> Result<Vec<Booking>> {
        let url = format!("{}/bookings/", self.url);
        let request = Request::get(&url).query(filter.query_params());
        let bookings: Vec<b::Booking> = self.send(request).await?;
        bookings
            .into_iter()
            .map(|booking| Booking::try_from(booking).map_err(Error::from))
            .collect()
    }

    pub async fn booking(&self, id: &Id) -> Result<Booking> {
        let url = format!("{}/bookings/{id}", self.url);
        let booking: b::Booking = self.send(Request::get(&url)).await?;
        Ok(booking.try_into()?)
    }

    /// Cancels (as guest) or declines (as host) a booking.
    pub async fn cancel_booking(&self, id: &Id) -> Result<Booking> {
        let url = format!("{}/bookings/{id}", self.url);
        let answer: b::BookingActionResponse = self.send(Request::delete(&url)).await?;
        log::debug!("{}", answer.message);
        Ok(answer.booking.try_into()?)
    }

    pub async fn confirm_booking(&self, id: &Id) -> Result<Booking> {
        let url = format!("{}/bookings/{id}/confirm", self.url);
        let answer: b::BookingActionResponse = self.send(Request::put(&url)).await?;
        Ok(answer.booking.try_into()?)
    }

    pub async fn place_bookings(&self, place_id: &Id) -> Result<Vec<Booking>> {
        let url = format!("{}/bookings/places/{place_id}", self.url);
        let bookings: Vec<b::Booking> = self.send(Request::get(&url)).await?;
        bookings
            .into_iter()
            .map(|booking| Booking::try_from(booking).map_err(Error::from))
            .collect()
    }
}
