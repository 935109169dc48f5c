use hbnb_entities::{id::Id, place::Place};

/// Storage key of the favorite place ids.
pub const FAVORITES_KEY: &str = "hbnb_favorites";

/// An ordered set of favorite place ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<Id>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x.as_str() == id)
    }

    /// Adds or removes the place and returns the new membership.
    pub fn toggle(&mut self, id: Id) -> bool {
        if let Some(pos) = self.ids.iter().position(|x| *x == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<Id> for Favorites {
    fn from_iter<I: IntoIterator<Item = Id>>(iter: I) -> Self {
        let mut ids: Vec<Id> = vec![];
        for id in iter {
            if id.is_valid() && !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self { ids }
    }
}

impl From<Favorites> for Vec<String> {
    fn from(from: Favorites) -> Self {
        from.ids.into_iter().map(String::from).collect()
    }
}

/// Keeps the order of `places`.
pub fn favorite_places(places: &[Place], favorites: &Favorites) -> Vec<Place> {
    places
        .iter()
        .filter(|p| favorites.contains(p.id.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hbnb_entities::builders::*;
    use rand::{seq::SliceRandom, Rng};

    #[test]
    fn toggle_twice_restores_the_set() {
        let mut rng = rand::thread_rng();
        let pool: Vec<Id> = (0..20).map(|i| Id::from(format!("p{i}"))).collect();
        for _ in 0..100 {
            let amount = rng.gen_range(0..pool.len());
            let initial: Favorites = pool
                .choose_multiple(&mut rng, amount)
                .cloned()
                .collect();
            let mut favorites = initial.clone();
            let id = pool.choose(&mut rng).unwrap().clone();
            let added = favorites.toggle(id.clone());
            assert_eq!(added, !initial.contains(id.as_str()));
            assert_eq!(favorites.contains(id.as_str()), added);
            favorites.toggle(id.clone());
            assert_eq!(favorites.contains(id.as_str()), initial.contains(id.as_str()));
            assert_eq!(favorites.len(), initial.len());
        }
    }

    #[test]
    fn duplicates_and_empty_ids_are_ignored() {
        let favorites: Favorites = ["a", "b", "a", ""].into_iter().map(Id::from).collect();
        assert_eq!(favorites.len(), 2);
        assert_eq!(Vec::<String>::from(favorites), vec!["a", "b"]);
    }

    #[test]
    fn favorite_places_keep_listing_order() {
        let places = vec![
            Place::build().id("a").finish(),
            Place::build().id("b").finish(),
            Place::build().id("c").finish(),
        ];
        let favorites: Favorites = ["c", "a"].into_iter().map(Id::from).collect();
        let ids: Vec<_> = favorite_places(&places, &favorites)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![Id::from("a"), Id::from("c")]);
    }
}
