use gloo_net::http::Request;

use hbnb_boundary as b;
use hbnb_entities::{
    id::Id,
    place::Place,
    review::Review,
    stay::StayDates,
    user::{Credentials, Registration, User},
};

use crate::{into_json, Error, Result, UserApi};

/// Public HBnB API
#[derive(Clone)]
pub struct PublicApi {
    url: String,
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn places(&self) -> Result<Vec<Place>> {
        let url = format!("{}/places/", self.url);
        let response = Request::get(&url).send().await?;
        let places: Vec<b::Place> = into_json(response).await?;
        Ok(places.into_iter().map(Place::from).collect())
    }

    /// Returns `None` if the place does not exist.
    pub async fn place(&self, id: &Id) -> Result<Option<Place>> {
        let url = format!("{}/places/{id}", self.url);
        let response = Request::get(&url).send().await?;
        match into_json::<b::Place>(response).await {
            Ok(place) => Ok(Some(place.into())),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn place_reviews(&self, place_id: &Id) -> Result<Vec<Review>> {
        let url = format!("{}/places/{place_id}/reviews", self.url);
        let response = Request::get(&url).send().await?;
        let reviews: Vec<b::Review> = into_json(response).await?;
        reviews
            .into_iter()
            .map(|r| r.try_into_review(place_id.as_str()).map_err(Error::from))
            .collect()
    }

    pub async fn check_availability(&self, place_id: &Id, stay: &StayDates) -> Result<bool> {
        let url = format!("{}/bookings/availability/check", self.url);
        let request = b::AvailabilityRequest::new(place_id, stay);
        let response = Request::post(&url).json(&request)?.send().await?;
        let answer: b::AvailabilityResponse = into_json(response).await?;
        Ok(answer.available)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<UserApi> {
        let url = format!("{}/auth/login", self.url);
        let credentials = b::Credentials::from(credentials.clone());
        let response = Request::post(&url).json(&credentials)?.send().await?;
        let b::AccessToken { access_token } = into_json(response).await?;
        Ok(UserApi::new(self.url.clone(), access_token))
    }

    /// Creates the account and logs in.
    pub async fn register(&self, registration: &Registration) -> Result<(User, UserApi)> {
        let url = format!("{}/users/", self.url);
        let body = b::Registration::from(registration.clone());
        let response = Request::post(&url).json(&body)?.send().await?;
        let user: b::User = into_json(response).await?;
        let api = self.login(&Credentials::from(registration)).await?;
        Ok((user.into(), api))
    }
}
