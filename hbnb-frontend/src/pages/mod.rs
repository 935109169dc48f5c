mod booking;
mod cancellation_policy;
mod favorites;
mod home;
mod host;
mod login;
mod profile;
mod property;
mod register;
mod trips;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Property,
    Booking,
    Trips,
    Favorites,
    Host,
    Profile,
    Login,
    Register,
    CancellationPolicy,
}

impl Page {
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Property => "/property",
            Self::Booking => "/booking",
            Self::Trips => "/trips",
            Self::Favorites => "/favorites",
            Self::Host => "/host",
            Self::Profile => "/profile",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::CancellationPolicy => "/cancellation-policy",
        }
    }
}

/// Link target of a single place.
#[must_use]
pub fn property_path(id: &str) -> String {
    format!("{}/{id}", Page::Property.path())
}

pub use self::{
    booking::*, cancellation_policy::*, favorites::*, home::*, host::*, login::*, profile::*,
    property::*, register::*, trips::*,
};
