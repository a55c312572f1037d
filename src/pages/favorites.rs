//! Favorites page - saved listings with the grid/carousel/map toggle.

use dioxus::prelude::*;
use livimmo_core::{data, Property, ViewMode};

use crate::components::{FavoritesHeader, NavHeader, PropertyCard, PropertyMap};

#[component]
pub fn Favorites() -> Element {
    let mut view_mode = use_signal(|| ViewMode::Grid);
    let favorites = data::mock_favorites();

    rsx! {
        NavHeader {}

        main { class: "page",
            FavoritesHeader {
                view_mode: view_mode(),
                on_view_mode_change: move |mode| view_mode.set(mode),
            }

            if favorites.is_empty() {
                p { class: "muted", "Aucun bien enregistré pour le moment." }
            } else {
                {render_favorites(view_mode(), &favorites)}
            }
        }
    }
}

/// The favorites body for the selected layout.
fn render_favorites(mode: ViewMode, favorites: &[Property]) -> Element {
    match mode {
        ViewMode::Grid => rsx! {
            div { class: "property-grid",
                for property in favorites {
                    PropertyCard { key: "{property.id}", property: property.clone() }
                }
            }
        },
        ViewMode::Carousel => rsx! {
            div { class: "property-carousel",
                for property in favorites {
                    PropertyCard { key: "{property.id}", property: property.clone() }
                }
            }
        },
        ViewMode::Map => rsx! {
            PropertyMap { properties: favorites.to_vec() }
        },
    }
}
