//! Mock marketplace data
//!
//! Stand-in for the missing backend: a fixed set of listings and scheduled
//! live viewings. Everything is rebuilt on each call; nothing is cached or
//! persisted.

use chrono::{Duration, Utc};

use crate::types::{mock_coordinates, Agent, LiveEvent, PriceTag, Property};

fn agent(id: &str, name: &str, verified: bool) -> Agent {
    Agent {
        id: id.to_string(),
        name: name.to_string(),
        image: "/placeholder.svg".to_string(),
        phone: "+212 6 61 23 45 67".to_string(),
        email: format!("{}@livimmo.ma", id),
        is_verified: verified,
    }
}

/// Sample listings for the home and favorites views.
pub fn mock_properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".to_string(),
            title: "Villa moderne avec piscine".to_string(),
            description: "Villa contemporaine dans un quartier calme, proche des écoles."
                .to_string(),
            price: 4_500_000,
            location: "Casablanca, Californie".to_string(),
            property_type: "Villa".to_string(),
            surface: 350,
            rooms: 6,
            bathrooms: 3,
            features: vec![
                "Piscine".to_string(),
                "Jardin".to_string(),
                "Garage".to_string(),
            ],
            images: vec!["/properties/villa-casablanca.jpg".to_string()],
            has_live: true,
            live_date: Some(Utc::now() + Duration::days(2)),
            agent: agent("sara-alaoui", "Sara Alaoui", true),
            coordinates: Some(mock_coordinates("Casablanca")),
        },
        Property {
            id: "2".to_string(),
            title: "Appartement vue mer".to_string(),
            description: "Appartement lumineux au dernier étage, vue dégagée sur la baie."
                .to_string(),
            price: 1_850_000,
            location: "Tanger, Malabata".to_string(),
            property_type: "Appartement".to_string(),
            surface: 120,
            rooms: 3,
            bathrooms: 2,
            features: vec!["Ascenseur".to_string(), "Terrasse".to_string()],
            images: vec!["/properties/appart-tanger.jpg".to_string()],
            has_live: false,
            live_date: None,
            agent: agent("karim-bennis", "Karim Bennis", true),
            coordinates: Some(mock_coordinates("Tanger")),
        },
        Property {
            id: "3".to_string(),
            title: "Riad rénové dans la médina".to_string(),
            description: "Riad traditionnel entièrement rénové, patio avec fontaine."
                .to_string(),
            price: 3_200_000,
            location: "Marrakech, Médina".to_string(),
            property_type: "Riad".to_string(),
            surface: 280,
            rooms: 5,
            bathrooms: 4,
            features: vec!["Patio".to_string(), "Hammam".to_string()],
            images: vec!["/properties/riad-marrakech.jpg".to_string()],
            has_live: true,
            live_date: Some(Utc::now() + Duration::days(5)),
            agent: agent("leila-tazi", "Leila Tazi", false),
            coordinates: Some(mock_coordinates("Marrakech")),
        },
        Property {
            id: "4".to_string(),
            title: "Studio proche université".to_string(),
            description: "Studio meublé, idéal investissement locatif.".to_string(),
            price: 620_000,
            location: "Rabat, Agdal".to_string(),
            property_type: "Studio".to_string(),
            surface: 45,
            rooms: 1,
            bathrooms: 1,
            features: vec!["Meublé".to_string()],
            images: vec!["/properties/studio-rabat.jpg".to_string()],
            has_live: false,
            live_date: None,
            agent: agent("karim-bennis", "Karim Bennis", true),
            coordinates: Some(mock_coordinates("Rabat")),
        },
    ]
}

/// Listings the user has marked as favorites. With no backend this is a
/// fixed slice of the catalog.
pub fn mock_favorites() -> Vec<Property> {
    mock_properties()
        .into_iter()
        .filter(|p| p.id == "1" || p.id == "3")
        .collect()
}

/// Upcoming live viewings for the scheduled-lives list.
pub fn mock_scheduled_lives() -> Vec<LiveEvent> {
    vec![
        LiveEvent {
            id: "live-1".to_string(),
            title: "Villa moderne avec piscine".to_string(),
            thumbnail: "/lives/villa-casablanca.jpg".to_string(),
            agent: "Sara Alaoui".to_string(),
            location: "Casablanca".to_string(),
            property_type: "Villa".to_string(),
            price: PriceTag::Text("4500000".to_string()),
            description: Some("Visite guidée en direct avec l'agent".to_string()),
            date: Utc::now() + Duration::days(2),
            viewers: 0,
        },
        LiveEvent {
            id: "live-2".to_string(),
            title: "Riad rénové dans la médina".to_string(),
            thumbnail: "/lives/riad-marrakech.jpg".to_string(),
            agent: "Leila Tazi".to_string(),
            location: "Marrakech".to_string(),
            property_type: "Riad".to_string(),
            price: PriceTag::Amount(3_200_000),
            description: None,
            date: Utc::now() + Duration::days(5),
            viewers: 0,
        },
        LiveEvent {
            id: "live-3".to_string(),
            title: "Penthouse avec rooftop".to_string(),
            thumbnail: "/lives/penthouse-rabat.jpg".to_string(),
            agent: "Karim Bennis".to_string(),
            location: "Rabat".to_string(),
            property_type: "Appartement".to_string(),
            price: PriceTag::Text("2750000".to_string()),
            description: Some("Découverte du rooftop au coucher du soleil".to_string()),
            date: Utc::now() + Duration::days(7),
            viewers: 0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_properties_have_coordinates() {
        for property in mock_properties() {
            assert!(property.coordinates.is_some(), "{} has no pin", property.id);
            assert!(!property.images.is_empty());
        }
    }

    #[test]
    fn test_favorites_are_a_subset_of_catalog() {
        let catalog: Vec<String> = mock_properties().into_iter().map(|p| p.id).collect();
        for favorite in mock_favorites() {
            assert!(catalog.contains(&favorite.id));
        }
    }

    #[test]
    fn test_scheduled_lives_project_cleanly() {
        for live in mock_scheduled_lives() {
            let property = live.to_property();
            assert!(property.price > 0);
            assert!(property.coordinates.is_some());
        }
    }
}
