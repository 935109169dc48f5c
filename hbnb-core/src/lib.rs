//! # hbnb-core
//!
//! Client-side workflow logic of the HBnB marketplace.
//!
//! Everything in here is plain Rust without any I/O:
//! the backend is reached through the traits in [`gateways`],
//! which are implemented by the native HTTP client and by the test mocks.
//! The browser app uses the pure parts directly.

pub mod availability;
pub mod bookings;
pub mod cache;
pub mod cancellation;
pub mod favorites;
pub mod gateways;
pub mod host;
pub mod pricing;
pub mod review;
pub mod search;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use hbnb_entities::{booking::*, id::*, payment::*, place::*, review::*, stay::*, user::*};
}

pub use self::usecases::Error;
