use std::{io, path::Path};

use jfs::Store;
use serde::{Deserialize, Serialize};

use hbnb_boundary as b;
use hbnb_core::{
    favorites::{Favorites, FAVORITES_KEY},
    gateways::{self, FavoritesStore},
};
use hbnb_entities::{id::Id, user::User};

use crate::Result;

const SESSION_KEY: &str = "session";

/// The logged in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Deserialize, Serialize)]
struct StoredSession {
    token: String,
    user: b::User,
}

/// Session and favorites kept as JSON files in a directory.
#[derive(Clone)]
pub struct JsonFileStore {
    json_store: Store,
}

impl JsonFileStore {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let cfg = jfs::Config {
            pretty: true,
            ..Default::default()
        };
        let json_store = Store::new_with_cfg(directory, cfg)?;
        Ok(Self { json_store })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }

    fn get<T>(&self, key: &str) -> io::Result<Option<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        match self.json_store.get::<T>(key) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub fn load_session(&self) -> Result<Option<Session>> {
        let session = self.get::<StoredSession>(SESSION_KEY)?.map(|s| Session {
            token: s.token,
            user: s.user.into(),
        });
        Ok(session)
    }

    pub fn save_session(&self, session: &Session) -> Result<()> {
        let stored = StoredSession {
            token: session.token.clone(),
            user: session.user.clone().into(),
        };
        self.json_store.save_with_id(&stored, SESSION_KEY)?;
        log::debug!("Saved session of {}", session.user.email);
        Ok(())
    }

    pub fn clear_session(&self) -> Result<()> {
        match self.json_store.delete(SESSION_KEY) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }

    pub fn load_favorites(&self) -> Result<Favorites> {
        let ids = self.get::<Vec<String>>(FAVORITES_KEY)?.unwrap_or_default();
        Ok(ids.into_iter().map(Id::from).collect())
    }

    pub fn save_favorites(&self, favorites: &Favorites) -> Result<()> {
        let ids: Vec<String> = favorites.clone().into();
        self.json_store.save_with_id(&ids, FAVORITES_KEY)?;
        Ok(())
    }
}

impl FavoritesStore for JsonFileStore {
    fn load(&self) -> gateways::Result<Favorites> {
        Ok(self.load_favorites()?)
    }

    fn save(&self, favorites: &Favorites) -> gateways::Result<()> {
        Ok(self.save_favorites(favorites)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs};

    fn temp_store() -> JsonFileStore {
        let dir = env::temp_dir().join(format!("hbnb-store-{}", rand::random::<u64>()));
        fs::create_dir_all(&dir).unwrap();
        JsonFileStore::try_new(dir).unwrap()
    }

    #[test]
    fn session_round_trip() {
        let store = temp_store();
        assert_eq!(store.load_session().unwrap(), None);
        let session = Session {
            token: "secret".into(),
            user: User {
                id: "u1".into(),
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                email: "jane@example.com".into(),
                phone_number: None,
                home_location: Some("Bolzano".into()),
            },
        };
        store.save_session(&session).unwrap();
        assert_eq!(store.load_session().unwrap(), Some(session));
        store.clear_session().unwrap();
        assert_eq!(store.load_session().unwrap(), None);
        store.clear_session().unwrap();
        fs::remove_dir_all(store.path()).unwrap();
    }

    #[test]
    fn favorites_persist_under_the_same_key() {
        let store = temp_store();
        assert!(FavoritesStore::load(&store).unwrap().is_empty());
        let mut favorites = Favorites::new();
        favorites.toggle("p1".into());
        favorites.toggle("p2".into());
        FavoritesStore::save(&store, &favorites).unwrap();

        let reopened = JsonFileStore::try_new(store.path()).unwrap();
        assert_eq!(FavoritesStore::load(&reopened).unwrap(), favorites);
        assert!(store.path().join(format!("{FAVORITES_KEY}.json")).exists());
        fs::remove_dir_all(store.path()).unwrap();
    }
}
