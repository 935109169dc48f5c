use hbnb_entities::{
    id::Id,
    place::{NewPlace, Place, PlaceUpdate},
};

pub fn owned_listings(places: &[Place], user_id: &Id) -> Vec<Place> {
    places
        .iter()
        .filter(|p| p.is_owned_by(user_id))
        .cloned()
        .collect()
}

/// Trims the text fields and drops blank amenities.
pub fn tidy_new_place(new_place: NewPlace) -> NewPlace {
    NewPlace {
        title: new_place.title.trim().to_string(),
        description: new_place.description.trim().to_string(),
        amenities: new_place
            .amenities
            .into_iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect(),
        ..new_place
    }
}

pub fn tidy_place_update(update: PlaceUpdate) -> PlaceUpdate {
    PlaceUpdate {
        title: update.title.trim().to_string(),
        description: update.description.trim().to_string(),
        ..update
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationPreset {
    pub label: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

#[rustfmt::skip]
pub const LOCATION_PRESETS: [LocationPreset; 6] = [
    LocationPreset { label: "Bolzano, Italy",         latitude: 46.498_295, longitude:   11.354_758 },
    LocationPreset { label: "Aspen, Colorado",        latitude: 39.191_098, longitude: -106.817_539 },
    LocationPreset { label: "Malibu, California",     latitude: 34.025_921, longitude: -118.779_757 },
    LocationPreset { label: "Portland, Oregon",       latitude: 45.515_2,   longitude: -122.678_4   },
    LocationPreset { label: "Palm Springs, California", latitude: 33.830_296, longitude: -116.545_292 },
    LocationPreset { label: "Lake Tahoe, California", latitude: 39.096_849, longitude: -120.032_351 },
];

pub fn find_location_preset(label: &str) -> Option<&'static LocationPreset> {
    LOCATION_PRESETS
        .iter()
        .find(|p| p.label.eq_ignore_ascii_case(label.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hbnb_entities::builders::*;

    #[test]
    fn only_own_listings() {
        let places = vec![
            Place::build().id("a").owner("me").finish(),
            Place::build().id("b").owner("you").finish(),
            Place::build().id("c").owner("me").finish(),
        ];
        let mine = owned_listings(&places, &"me".into());
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|p| p.owner_id.as_str() == "me"));
        assert!(owned_listings(&places, &Id::default()).is_empty());
    }

    #[test]
    fn lookup_presets() {
        let preset = find_location_preset("bolzano, italy").unwrap();
        assert_eq!(preset.latitude, 46.498295);
        assert!(find_location_preset("Atlantis").is_none());
    }

    #[test]
    fn tidy_listing_text() {
        let new_place = tidy_new_place(NewPlace {
            title: "  Cabin ".into(),
            description: "\tQuiet cabin in the woods\n".into(),
            price: 80.0,
            amenities: vec![" wifi ".into(), "  ".into(), "pool".into()],
            ..NewPlace::default()
        });
        assert_eq!(new_place.title, "Cabin");
        assert_eq!(new_place.description, "Quiet cabin in the woods");
        assert_eq!(new_place.amenities, vec!["wifi", "pool"]);
        assert_eq!(new_place.price, 80.0);

        let update = tidy_place_update(PlaceUpdate {
            title: " Cabin ".into(),
            description: " Cosy ".into(),
            price: 90.0,
        });
        assert_eq!((update.title.as_str(), update.description.as_str()), ("Cabin", "Cosy"));
    }
}
