use super::prelude::*;
use crate::util::validate::Validate;

/// Returns the access token.
pub fn login<G>(gateway: &G, credentials: &Credentials) -> Result<String>
where
    G: AuthGateway,
{
    let credentials = Credentials {
        email: credentials.email.trim().to_lowercase(),
        password: credentials.password.clone(),
    };
    credentials.validate()?;
    let token = gateway.login(&credentials).map_err(|err| match err {
        crate::gateways::Error::Unauthorized => Error::Credentials,
        err => err.into(),
    })?;
    log::debug!("Logged in as {}", credentials.email);
    Ok(token)
}
