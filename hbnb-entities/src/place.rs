use crate::id::Id;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id          : Id,
    pub title       : String,
    pub description : String,
    /// Price per night
    pub price       : f64,
    pub latitude    : f64,
    pub longitude   : f64,
    pub owner_id    : Id,
    pub amenities   : Vec<String>,
    pub images      : Vec<String>,
}

impl Place {
    pub fn location_label(&self) -> String {
        format!("{:.3}, {:.3}", self.latitude, self.longitude)
    }

    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn is_owned_by(&self, user_id: &Id) -> bool {
        user_id.is_valid() && &self.owner_id == user_id
    }

    pub fn has_amenity(&self, name: &str) -> bool {
        let name = name.trim();
        self.amenities.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

/// A listing that is about to be published.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewPlace {
    pub title       : String,
    pub description : String,
    pub price       : f64,
    pub latitude    : f64,
    pub longitude   : f64,
    pub amenities   : Vec<String>,
}

/// The editable part of a published listing.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaceUpdate {
    pub title       : String,
    pub description : String,
    pub price       : f64,
}

impl From<&Place> for PlaceUpdate {
    fn from(from: &Place) -> Self {
        Self {
            title: from.title.clone(),
            description: from.description.clone(),
            price: from.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;

    #[test]
    fn location_label_with_three_decimals() {
        let place = Place::build().pos(46.498295, 11.354758).finish();
        assert_eq!(place.location_label(), "46.498, 11.355");
    }

    #[test]
    fn cover_image_falls_back_to_placeholder() {
        let place = Place::build().finish();
        assert_eq!(place.cover_image(), PLACEHOLDER_IMAGE);
        let place = Place::build().images(vec!["/a.png", "/b.png"]).finish();
        assert_eq!(place.cover_image(), "/a.png");
    }

    #[test]
    fn ownership_requires_a_valid_id() {
        let place = Place::build().owner("").finish();
        assert!(!place.is_owned_by(&Id::default()));
        let place = Place::build().owner("u1").finish();
        assert!(place.is_owned_by(&"u1".into()));
        assert!(!place.is_owned_by(&"u2".into()));
    }

    #[test]
    fn amenities_are_matched_case_insensitive() {
        let place = Place::build().amenities(vec!["WiFi", "Pool"]).finish();
        assert!(place.has_amenity("wifi"));
        assert!(place.has_amenity(" pool "));
        assert!(!place.has_amenity("parking"));
    }
}
