use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id            : Id,
    pub first_name    : String,
    pub last_name     : String,
    pub email         : String,
    pub phone_number  : Option<String>,
    pub home_location : Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        match (first.is_empty(), last.is_empty()) {
            (true, true) => self.email.clone(),
            (false, true) => first.to_string(),
            (true, false) => last.to_string(),
            (false, false) => format!("{first} {last}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub home_location: Option<String>,
}

impl From<&User> for UserProfileUpdate {
    fn from(from: &User) -> Self {
        Self {
            first_name: from.first_name.clone(),
            last_name: from.last_name.clone(),
            phone_number: from.phone_number.clone(),
            home_location: from.home_location.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl From<&Registration> for Credentials {
    fn from(from: &Registration) -> Self {
        Self {
            email: from.email.clone(),
            password: from.password.clone(),
        }
    }
}
