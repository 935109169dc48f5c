//! Native implementations of the `hbnb-core` gateways.

use std::io;

use thiserror::Error;

pub mod http;
pub mod store;

pub use self::{http::HttpApi, store::*};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Api(hbnb_boundary::Error),
    #[error("Your session has expired. Please log in again.")]
    TokenExpired,
    #[error("Unexpected answer: {0}")]
    Conversion(#[from] hbnb_boundary::ConversionError),
    #[error(transparent)]
    Store(#[from] io::Error),
}

impl From<hbnb_boundary::Error> for Error {
    fn from(err: hbnb_boundary::Error) -> Self {
        if err.is_token_expired() {
            Self::TokenExpired
        } else {
            Self::Api(err)
        }
    }
}

impl From<Error> for hbnb_core::gateways::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Api(err) if err.is_not_found() => Self::NotFound,
            Error::Api(err) if err.is_unauthorized() => Self::Unauthorized,
            Error::Api(err) => Self::Rejected(err.message),
            Error::TokenExpired => Self::TokenExpired,
            err => Self::Other(err.into()),
        }
    }
}
