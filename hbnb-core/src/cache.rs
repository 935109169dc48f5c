use hbnb_entities::place::Place;

/// Locally cached list of places.
#[derive(Debug, Clone, Default)]
pub struct PlaceCache {
    places: Option<Vec<Place>>,
}

impl PlaceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn is_loaded(&self) -> bool {
        self.places.is_some()
    }

    pub fn places(&self) -> &[Place] {
        self.places.as_deref().unwrap_or_default()
    }

    pub fn replace_all(&mut self, places: Vec<Place>) {
        self.places = Some(places);
    }

    pub fn find(&self, id: &str) -> Option<&Place> {
        self.places().iter().find(|p| p.id.as_str() == id)
    }

    /// Replaces a known place or appends a new one.
    ///
    /// An unloaded cache stays unloaded.
    pub fn upsert(&mut self, place: Place) {
        let Some(places) = self.places.as_mut() else {
            return;
        };
        match places.iter_mut().find(|p| p.id == place.id) {
            Some(existing) => *existing = place,
            None => places.push(place),
        }
    }

    pub fn remove(&mut self, id: &str) {
        if let Some(places) = self.places.as_mut() {
            places.retain(|p| p.id.as_str() != id);
        }
    }

    pub fn invalidate(&mut self) {
        self.places = None;
    }
}

/// Ticket of a started request.
pub type RequestId = u64;

/// Bookkeeping of the one request that may be in flight at a time.
///
/// Callers join the pending request unless they force a new one.
/// Only the request that still occupies the slot may publish its result.
#[derive(Debug)]
pub struct InFlight<R> {
    current: Option<(RequestId, R)>,
    next_id: RequestId,
}

impl<R> Default for InFlight<R> {
    fn default() -> Self {
        Self {
            current: None,
            next_id: 0,
        }
    }
}

impl<R: Clone> InFlight<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn is_pending(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the pending request or a new one from `start`.
    ///
    /// With `force` a new request replaces the pending one.
    pub fn join_or_start<F>(&mut self, force: bool, start: F) -> (RequestId, R)
    where
        F: FnOnce() -> R,
    {
        if !force {
            if let Some((id, request)) = &self.current {
                return (*id, request.clone());
            }
        }
        let id = self.next_id;
        self.next_id += 1;
        let request = start();
        self.current = Some((id, request.clone()));
        (id, request)
    }

    /// Frees the slot if it still holds request `id`.
    ///
    /// Returns `false` for a superseded or already finished request.
    pub fn finish(&mut self, id: RequestId) -> bool {
        match self.current {
            Some((current, _)) if current == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
