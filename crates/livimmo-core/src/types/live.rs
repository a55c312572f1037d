//! Scheduled live-viewing events and their projection into listings
//!
//! A live event is a video visit tied to a listing. The map view only knows
//! how to plot [`Property`] records, so events are projected one-way into
//! property shape; nothing flows back.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::property::{Agent, Coordinates, Property};

/// Price as it arrives in event payloads: some sources send the amount as a
/// string, others as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceTag {
    Amount(u64),
    Text(String),
}

impl PriceTag {
    /// Numeric value; a non-numeric string parses to 0.
    pub fn as_amount(&self) -> u64 {
        match self {
            PriceTag::Amount(n) => *n,
            PriceTag::Text(s) => s.trim().parse().unwrap_or(0),
        }
    }
}

/// A scheduled or currently running live viewing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveEvent {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    /// Host agent's display name
    pub agent: String,
    pub location: String,
    pub property_type: String,
    pub price: PriceTag,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub viewers: u32,
}

impl LiveEvent {
    /// Project this event into a listing-shaped record for the map view.
    ///
    /// Lossless for what the event carries: id, title, location, type, price
    /// (numeric form), thumbnail and description survive. Surface, rooms and
    /// bathrooms are unknown and zeroed. The host gets a synthetic agent
    /// record with placeholder contact fields, and coordinates are
    /// synthesized from the location name.
    pub fn to_property(&self) -> Property {
        Property {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone().unwrap_or_default(),
            price: self.price.as_amount(),
            location: self.location.clone(),
            property_type: self.property_type.clone(),
            surface: 0,
            rooms: 0,
            bathrooms: 0,
            features: vec![],
            images: vec![self.thumbnail.clone()],
            has_live: true,
            live_date: Some(self.date),
            agent: Agent {
                id: format!("agent-{}", self.id),
                name: self.agent.clone(),
                image: "/placeholder.svg".to_string(),
                phone: "N/A".to_string(),
                email: "N/A".to_string(),
                is_verified: false,
            },
            coordinates: Some(mock_coordinates(&self.location)),
        }
    }
}

/// City centers the mock coordinates are anchored to.
const CITY_CENTERS: &[(&str, f64, f64)] = &[
    ("casablanca", 33.5731, -7.5898),
    ("rabat", 34.0209, -6.8416),
    ("marrakech", 31.6295, -7.9811),
    ("tanger", 35.7595, -5.8340),
    ("agadir", 30.4278, -9.5981),
    ("fès", 34.0181, -5.0078),
    ("fes", 34.0181, -5.0078),
];

/// Synthesize coordinates for a location name.
///
/// Looks the city up in a fixed table and scatters the point a little so
/// several listings in the same city don't stack on one pin. Unknown
/// locations fall back to the Casablanca center. Always returns a value.
pub fn mock_coordinates(location: &str) -> Coordinates {
    let needle = location.to_lowercase();
    let (_, lat, lng) = CITY_CENTERS
        .iter()
        .find(|(city, _, _)| needle.contains(city))
        .unwrap_or(&CITY_CENTERS[0]);

    let mut rng = rand::rng();
    Coordinates {
        lat: lat + rng.random_range(-0.05..0.05),
        lng: lng + rng.random_range(-0.05..0.05),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn live_event() -> LiveEvent {
        LiveEvent {
            id: "live-1".to_string(),
            title: "Villa moderne avec piscine".to_string(),
            thumbnail: "/lives/villa.jpg".to_string(),
            agent: "Sara Alaoui".to_string(),
            location: "Casablanca".to_string(),
            property_type: "Villa".to_string(),
            price: PriceTag::Text("1200000".to_string()),
            description: Some("Visite en direct".to_string()),
            date: Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap(),
            viewers: 12,
        }
    }

    #[test]
    fn test_projection_parses_string_price() {
        let property = live_event().to_property();
        assert_eq!(property.price, 1_200_000);
        assert_eq!(property.location, "Casablanca");
        assert!(property.coordinates.is_some());
    }

    #[test]
    fn test_projection_carries_event_fields() {
        let event = live_event();
        let property = event.to_property();
        assert_eq!(property.id, event.id);
        assert_eq!(property.title, event.title);
        assert_eq!(property.images, vec![event.thumbnail.clone()]);
        assert_eq!(property.agent.id, "agent-live-1");
        assert_eq!(property.agent.name, "Sara Alaoui");
        assert!(!property.agent.is_verified);
        assert!(property.has_live);
        assert_eq!(property.live_date, Some(event.date));
        assert_eq!(property.surface, 0);
        assert_eq!(property.rooms, 0);
    }

    #[test]
    fn test_non_numeric_price_parses_to_zero() {
        assert_eq!(PriceTag::Text("sur demande".to_string()).as_amount(), 0);
        assert_eq!(PriceTag::Amount(500_000).as_amount(), 500_000);
    }

    #[test]
    fn test_mock_coordinates_near_city_center() {
        let coords = mock_coordinates("Casablanca");
        assert!((coords.lat - 33.5731).abs() < 0.06);
        assert!((coords.lng - -7.5898).abs() < 0.06);
    }

    #[test]
    fn test_mock_coordinates_unknown_city_falls_back() {
        let coords = mock_coordinates("Atlantis");
        // Casablanca fallback
        assert!((coords.lat - 33.5731).abs() < 0.06);
    }
}
