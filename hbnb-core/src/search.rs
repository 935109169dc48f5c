use hbnb_entities::place::Place;

use crate::pricing::format_amount;

/// Inclusive price bounds per night.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub const ANY: Self = Self {
        min: None,
        max: None,
    };

    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }

    pub fn label(&self) -> String {
        match (self.min, self.max) {
            (None, None) => "All prices".to_string(),
            (Some(min), None) => format!("from {}", format_amount(min)),
            (None, Some(max)) => format!("up to {}", format_amount(max)),
            (Some(min), Some(max)) => format!("{} – {}", format_amount(min), format_amount(max)),
        }
    }
}

pub const PRICE_PRESETS: [PriceRange; 6] = [
    PriceRange::ANY,
    PriceRange::between(500.0, 1_000.0),
    PriceRange::between(1_000.0, 1_500.0),
    PriceRange::between(1_500.0, 2_000.0),
    PriceRange::between(2_000.0, 3_000.0),
    PriceRange::between(10_000.0, 12_000.0),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceFilter {
    pub text: String,
    pub price: PriceRange,
    pub amenities: Vec<String>,
}

impl PlaceFilter {
    pub fn matches(&self, place: &Place) -> bool {
        let text = self.text.trim().to_lowercase();
        (text.is_empty()
            || place.title.to_lowercase().contains(&text)
            || place.description.to_lowercase().contains(&text))
            && self.price.contains(place.price)
            && self
                .amenities
                .iter()
                .filter(|a| !a.trim().is_empty())
                .all(|a| place.has_amenity(a))
    }
}

pub fn filter_places(places: &[Place], filter: &PlaceFilter) -> Vec<Place> {
    places.iter().filter(|p| filter.matches(p)).cloned().collect()
}
