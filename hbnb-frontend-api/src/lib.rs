//! Async client of the HBnB REST API for the browser.

use gloo_net::http::Response;
use serde::de::{DeserializeOwned, IgnoredAny};
use thiserror::Error;

mod cache;
mod public;
mod user;

pub use self::{cache::*, public::*, user::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] hbnb_boundary::Error),

    #[error("Your session has expired. Please log in again.")]
    TokenExpired,

    #[error("Unexpected answer: {0}")]
    Conversion(String),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(err) if err.is_not_found())
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api(err) if err.is_unauthorized())
    }
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<hbnb_boundary::ConversionError> for Error {
    fn from(err: hbnb_boundary::ConversionError) -> Self {
        Self::Conversion(err.to_string())
    }
}

pub fn auth_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Translates a non-2xx answer into an error.
pub fn error_from_body(http_status: u16, body: &str) -> Error {
    let err = serde_json::from_str::<hbnb_boundary::ErrorBody>(body)
        .unwrap_or_default()
        .into_error(http_status);
    if err.is_token_expired() {
        log::warn!("Access token expired");
        return Error::TokenExpired;
    }
    err.into()
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(error_from_body(status, &body))
    }
}

/// Like [`into_json`] but ignores the body of a successful answer.
pub async fn into_empty(response: Response) -> Result<()> {
    into_json::<IgnoredAny>(response).await.map(|_| ())
}
