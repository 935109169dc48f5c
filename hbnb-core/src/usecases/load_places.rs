use super::prelude::*;
use crate::cache::PlaceCache;

/// Loads all places unless they are already cached.
pub fn load_places<'c, G>(gateway: &G, cache: &'c mut PlaceCache, force: bool) -> Result<&'c [Place]>
where
    G: PlaceGateway,
{
    if force || !cache.is_loaded() {
        let places = gateway.places()?;
        log::debug!("Loaded {} places", places.len());
        cache.replace_all(places);
    }
    Ok(cache.places())
}

/// Looks up a single place, first in the cache.
///
/// Returns `None` if the place does not exist.
pub fn get_place<G>(gateway: &G, cache: &mut PlaceCache, id: &Id) -> Result<Option<Place>>
where
    G: PlaceGateway,
{
    if let Some(place) = cache.find(id.as_str()) {
        return Ok(Some(place.clone()));
    }
    match gateway.place(id) {
        Ok(place) => {
            cache.upsert(place.clone());
            Ok(Some(place))
        }
        Err(crate::gateways::Error::NotFound) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetails {
    pub place: Place,
    pub reviews: Vec<Review>,
}

impl PlaceDetails {
    pub fn average_rating(&self) -> Option<f64> {
        average_rating(&self.reviews)
    }
}

/// A missing review list does not hide the place.
pub fn get_place_details<G>(gateway: &G, cache: &mut PlaceCache, id: &Id) -> Result<Option<PlaceDetails>>
where
    G: PlaceGateway + ReviewGateway,
{
    let Some(place) = get_place(gateway, cache, id)? else {
        return Ok(None);
    };
    let reviews = gateway.place_reviews(id).unwrap_or_else(|err| {
        log::warn!("Unable to load reviews of place {id}: {err}");
        vec![]
    });
    Ok(Some(PlaceDetails { place, reviews }))
}
