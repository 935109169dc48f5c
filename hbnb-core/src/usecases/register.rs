use super::{login::login, prelude::*};
use crate::util::validate::Validate;

/// Creates a new account and logs in.
pub fn register<G>(gateway: &G, registration: &Registration) -> Result<String>
where
    G: AuthGateway,
{
    let registration = Registration {
        first_name: registration.first_name.trim().to_string(),
        last_name: registration.last_name.trim().to_string(),
        email: registration.email.trim().to_lowercase(),
        password: registration.password.clone(),
    };
    registration.validate()?;
    let user = gateway.register(&registration)?;
    log::info!("Registered new user {}", user.id);
    login(gateway, &Credentials::from(&registration))
}
