use super::{load_places::load_places, prelude::*};
use crate::{cache::PlaceCache, favorites::favorite_places};

/// Returns whether the place is a favorite now.
pub fn toggle_favorite<S>(store: &S, place_id: &Id) -> Result<bool>
where
    S: FavoritesStore,
{
    let mut favorites = store.load()?;
    let is_favorite = favorites.toggle(place_id.clone());
    store.save(&favorites)?;
    Ok(is_favorite)
}

pub fn load_favorite_places<G, S>(gateway: &G, store: &S, cache: &mut PlaceCache) -> Result<Vec<Place>>
where
    G: PlaceGateway,
    S: FavoritesStore,
{
    let favorites = store.load()?;
    if favorites.is_empty() {
        return Ok(vec![]);
    }
    let places = load_places(gateway, cache, false)?;
    Ok(favorite_places(places, &favorites))
}
