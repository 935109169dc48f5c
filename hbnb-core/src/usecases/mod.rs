mod bookings;
mod check_availability;
mod checkout;
mod error;
mod favorites;
mod host;
mod load_places;
mod login;
mod profile;
mod register;
mod submit_review;

#[cfg(test)]
pub mod tests;

pub use self::{
    bookings::*, check_availability::*, checkout::*, error::Error, favorites::*, host::*,
    load_places::*, login::*, profile::*, register::*, submit_review::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::*};
}
