use hbnb_entities::{
    place::{NewPlace, PlaceUpdate},
    user::{Credentials, Registration, UserProfileUpdate},
};
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub const MIN_DESCRIPTION_LEN: usize = 40;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub fn is_valid_latitude(lat: f64) -> bool {
    (-90.0..=90.0).contains(&lat)
}

pub fn is_valid_longitude(lng: f64) -> bool {
    (-180.0..=180.0).contains(&lng)
}

pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceInvalidation {
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
}

impl Validate for NewPlace {
    type Error = PlaceInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.title.trim().is_empty() {
            return Err(Self::Error::Title);
        }
        if self.description.trim().chars().count() < MIN_DESCRIPTION_LEN {
            return Err(Self::Error::Description);
        }
        if !(self.price > 0.0) {
            return Err(Self::Error::Price);
        }
        if !is_valid_latitude(self.latitude) {
            return Err(Self::Error::Latitude);
        }
        if !is_valid_longitude(self.longitude) {
            return Err(Self::Error::Longitude);
        }
        Ok(())
    }
}

impl Validate for PlaceUpdate {
    type Error = PlaceInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.title.trim().is_empty() {
            return Err(Self::Error::Title);
        }
        if self.description.trim().is_empty() {
            return Err(Self::Error::Description);
        }
        if !(self.price > 0.0) {
            return Err(Self::Error::Price);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccountInvalidation {
    #[error("First and last name are required")]
    Name,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid password")]
    Password,
}

impl Validate for Credentials {
    type Error = AccountInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_email(self.email.trim()) {
            return Err(Self::Error::Email);
        }
        if self.password.is_empty() {
            return Err(Self::Error::Password);
        }
        Ok(())
    }
}

impl Validate for Registration {
    type Error = AccountInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(Self::Error::Email);
        }
        if !is_strong_password(&self.password) {
            return Err(Self::Error::Password);
        }
        Ok(())
    }
}

impl Validate for UserProfileUpdate {
    type Error = AccountInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_place() -> NewPlace {
        NewPlace {
            title: "Mountain Chalet".into(),
            description: "A cozy wooden chalet with a view of the Dolomites.".into(),
            price: 250.0,
            latitude: 46.498295,
            longitude: 11.354758,
            amenities: vec![],
        }
    }

    #[test]
    fn valid_new_place() {
        assert!(new_place().validate().is_ok());
    }

    #[test]
    fn invalid_new_places() {
        let mut p = new_place();
        p.title = "  ".into();
        assert_eq!(p.validate(), Err(PlaceInvalidation::Title));

        let mut p = new_place();
        p.description = "Too short".into();
        assert_eq!(p.validate(), Err(PlaceInvalidation::Description));

        let mut p = new_place();
        p.price = 0.0;
        assert_eq!(p.validate(), Err(PlaceInvalidation::Price));
        p.price = f64::NAN;
        assert_eq!(p.validate(), Err(PlaceInvalidation::Price));

        let mut p = new_place();
        p.latitude = 90.5;
        assert_eq!(p.validate(), Err(PlaceInvalidation::Latitude));

        let mut p = new_place();
        p.longitude = -180.1;
        assert_eq!(p.validate(), Err(PlaceInvalidation::Longitude));
    }

    #[test]
    fn place_update_needs_title_and_description() {
        let update = PlaceUpdate {
            title: "Chalet".into(),
            description: "Short".into(),
            price: 10.0,
        };
        assert!(update.validate().is_ok());
        let update = PlaceUpdate {
            description: "".into(),
            ..update
        };
        assert_eq!(update.validate(), Err(PlaceInvalidation::Description));
    }

    #[test]
    fn password_rules() {
        assert!(is_strong_password("Secret#123"));
        assert!(!is_strong_password("Sec#12a"));
        assert!(!is_strong_password("secret#123"));
        assert!(!is_strong_password("SECRET#123"));
        assert!(!is_strong_password("Secret#abc"));
        assert!(!is_strong_password("Secret1234"));
        // only ASCII letters count
        assert!(!is_strong_password("Ünïcödé#12"));
        assert!(!is_strong_password("ÜNÏCÖDÉ#12ä"));
    }

    #[test]
    fn registration() {
        let reg = Registration {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            password: "Secret#123".into(),
        };
        assert!(reg.validate().is_ok());
        let invalid = Registration {
            email: "jane.example.com".into(),
            ..reg.clone()
        };
        assert_eq!(invalid.validate(), Err(AccountInvalidation::Email));
        let invalid = Registration {
            last_name: "".into(),
            ..reg
        };
        assert_eq!(invalid.validate(), Err(AccountInvalidation::Name));
    }
}
