//! Listing records shown on property cards and the map view

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact card for the agent attached to a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub image: String,
    pub phone: String,
    pub email: String,
    pub is_verified: bool,
}

/// Map position, WGS-84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A listing as the view layer consumes it.
///
/// Fed to cards, the favorites views, and the map. Derived either from mock
/// data or from a [`crate::LiveEvent`] projection; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Asking price in DH
    pub price: u64,
    pub location: String,
    pub property_type: String,
    /// Living surface in m²
    pub surface: u32,
    pub rooms: u32,
    pub bathrooms: u32,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub has_live: bool,
    pub live_date: Option<DateTime<Utc>>,
    pub agent: Agent,
    pub coordinates: Option<Coordinates>,
}

impl Property {
    /// First image, or a placeholder when the set is empty.
    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or("/placeholder.svg")
    }
}

/// Group digits in thousands for display: `1200000` → `"1 200 000"`.
///
/// Matches the narrow no-break-space grouping used across the UI for DH
/// amounts.
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push('\u{202f}');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(950), "950");
        assert_eq!(format_price(1_000), "1\u{202f}000");
        assert_eq!(format_price(1_200_000), "1\u{202f}200\u{202f}000");
        assert_eq!(format_price(85_000_000), "85\u{202f}000\u{202f}000");
    }

    #[test]
    fn test_cover_image_placeholder() {
        let agent = Agent {
            id: "a1".into(),
            name: "Sara".into(),
            image: "/placeholder.svg".into(),
            phone: "N/A".into(),
            email: "N/A".into(),
            is_verified: false,
        };
        let property = Property {
            id: "p1".into(),
            title: "Villa".into(),
            description: String::new(),
            price: 1,
            location: "Rabat".into(),
            property_type: "Villa".into(),
            surface: 0,
            rooms: 0,
            bathrooms: 0,
            features: vec![],
            images: vec![],
            has_live: false,
            live_date: None,
            agent,
            coordinates: None,
        };
        assert_eq!(property.cover_image(), "/placeholder.svg");
    }
}
