use anyhow::anyhow;
use gloo_storage::{LocalStorage, Storage};

use hbnb_boundary as boundary;
use hbnb_core::{
    favorites::{Favorites, FAVORITES_KEY},
    gateways::{self, FavoritesStore},
};
use hbnb_entities::{id::Id, user::User};

const TOKEN_STORAGE_KEY: &str = "token";
const USER_STORAGE_KEY: &str = "user";

pub fn load_token() -> Option<String> {
    LocalStorage::get(TOKEN_STORAGE_KEY).ok()
}

pub fn load_user() -> Option<User> {
    LocalStorage::get::<boundary::User>(USER_STORAGE_KEY)
        .ok()
        .map(User::from)
}

/// Token and user of the previous visit.
///
/// A stored user without a token is a leftover of an ended session.
pub fn load_session() -> Option<(String, Option<User>)> {
    let session = restore_session(load_token(), load_user());
    if session.is_none() {
        LocalStorage::delete(USER_STORAGE_KEY);
    }
    session
}

fn restore_session(token: Option<String>, user: Option<User>) -> Option<(String, Option<User>)> {
    token.map(|token| (token, user))
}

pub fn save_token(token: &str) {
    if let Err(err) = LocalStorage::set(TOKEN_STORAGE_KEY, token) {
        log::warn!("Unable to save token: {err}");
    }
}

pub fn save_user(user: &User) {
    if let Err(err) = LocalStorage::set(USER_STORAGE_KEY, boundary::User::from(user.clone())) {
        log::warn!("Unable to save user: {err}");
    }
}

pub fn clear_session() {
    LocalStorage::delete(TOKEN_STORAGE_KEY);
    LocalStorage::delete(USER_STORAGE_KEY);
}

/// Favorites kept in the local storage of the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFavorites;

impl FavoritesStore for LocalFavorites {
    fn load(&self) -> gateways::Result<Favorites> {
        let ids: Vec<String> = LocalStorage::get(FAVORITES_KEY).unwrap_or_default();
        Ok(ids.into_iter().map(Id::from).collect())
    }

    fn save(&self, favorites: &Favorites) -> gateways::Result<()> {
        let ids = Vec::<String>::from(favorites.clone());
        LocalStorage::set(FAVORITES_KEY, ids).map_err(|err| anyhow!("{err}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            phone_number: None,
            home_location: None,
        }
    }

    #[test]
    fn keep_user_of_a_stored_token() {
        let (token, restored) = restore_session(Some("t".into()), Some(user())).unwrap();
        assert_eq!(token, "t");
        assert_eq!(restored, Some(user()));
        assert_eq!(restore_session(Some("t".into()), None), Some(("t".into(), None)));
    }

    #[test]
    fn no_session_without_token() {
        assert_eq!(restore_session(None, Some(user())), None);
        assert_eq!(restore_session(None, None), None);
    }
}
