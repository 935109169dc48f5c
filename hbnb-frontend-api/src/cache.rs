use std::{cell::RefCell, rc::Rc};

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use hbnb_core::cache::{InFlight, PlaceCache};
use hbnb_entities::{id::Id, place::Place};

use crate::{PublicApi, Result};

type PlacesRequest = Shared<LocalBoxFuture<'static, Result<Vec<Place>>>>;

#[derive(Default)]
struct State {
    cache: PlaceCache,
    in_flight: InFlight<PlacesRequest>,
}

/// Place list shared by all views.
///
/// Concurrent callers share a single request.
/// A forced reload starts a new one and only the latest request
/// updates the cache.
#[derive(Clone)]
pub struct CachedPlaces {
    api: PublicApi,
    state: Rc<RefCell<State>>,
}

impl CachedPlaces {
    #[must_use]
    pub fn new(api: PublicApi) -> Self {
        Self {
            api,
            state: Rc::default(),
        }
    }

    #[must_use]
    pub fn api(&self) -> &PublicApi {
        &self.api
    }

    pub async fn places(&self, force: bool) -> Result<Vec<Place>> {
        let (id, request) = {
            let mut state = self.state.borrow_mut();
            if !force && state.cache.is_loaded() {
                return Ok(state.cache.places().to_vec());
            }
            let api = self.api.clone();
            state.in_flight.join_or_start(force, move || {
                async move { api.places().await }.boxed_local().shared()
            })
        };
        let result = request.await;
        let mut state = self.state.borrow_mut();
        let latest = state.in_flight.finish(id);
        match result {
            Ok(places) => {
                if latest {
                    state.cache.replace_all(places.clone());
                }
                Ok(places)
            }
            Err(err) => {
                log::warn!("Unable to load places: {err}");
                Err(err)
            }
        }
    }

    /// Looks in the cache before asking the backend.
    pub async fn place(&self, id: &Id) -> Result<Option<Place>> {
        if let Some(place) = self.state.borrow().cache.find(id.as_str()) {
            return Ok(Some(place.clone()));
        }
        let place = self.api.place(id).await?;
        if let Some(place) = &place {
            self.state.borrow_mut().cache.upsert(place.clone());
        }
        Ok(place)
    }

    /// Drops the cached list and any request still in flight.
    pub fn invalidate(&self) {
        let mut state = self.state.borrow_mut();
        state.cache.invalidate();
        state.in_flight.clear();
    }

    pub fn remove(&self, id: &Id) {
        self.state.borrow_mut().cache.remove(id.as_str());
    }
}
