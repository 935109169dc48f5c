use super::prelude::*;
use crate::util::validate::Validate;

pub fn load_profile<G>(gateway: &G) -> Result<User>
where
    G: UserGateway,
{
    let current = gateway.current_user()?;
    Ok(gateway.user(&current.id)?)
}

pub fn update_profile<G>(gateway: &G, user_id: &Id, update: UserProfileUpdate) -> Result<User>
where
    G: UserGateway,
{
    let non_empty = |s: Option<String>| s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
    let update = UserProfileUpdate {
        first_name: update.first_name.trim().to_string(),
        last_name: update.last_name.trim().to_string(),
        phone_number: non_empty(update.phone_number),
        home_location: non_empty(update.home_location),
    };
    update.validate()?;
    Ok(gateway.update_profile(user_id, &update)?)
}
