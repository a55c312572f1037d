//! Favorites view-mode toggle

use serde::{Deserialize, Serialize};

/// How the favorites page lays out its listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Grid,
    Carousel,
    Map,
}

impl ViewMode {
    /// All modes, in toggle-bar order.
    pub const ALL: [ViewMode; 3] = [ViewMode::Grid, ViewMode::Carousel, ViewMode::Map];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::Carousel => "carousel",
            ViewMode::Map => "map",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_mode_is_active() {
        let selected = ViewMode::Map;
        let active: Vec<_> = ViewMode::ALL.iter().filter(|m| **m == selected).collect();
        assert_eq!(active, vec![&ViewMode::Map]);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(ViewMode::Grid.as_str(), "grid");
        assert_eq!(ViewMode::Carousel.as_str(), "carousel");
        assert_eq!(ViewMode::Map.as_str(), "map");
    }
}
