//! Favorites Header Component
//!
//! "Mes Favoris" heading plus the grid/carousel/map toggle bar. Highlighting
//! is purely a function of the `view_mode` prop; changes go up through the
//! callback and state lives in the page.

use dioxus::prelude::*;
use livimmo_core::ViewMode;

#[derive(Props, Clone, PartialEq)]
pub struct FavoritesHeaderProps {
    /// Currently selected layout
    pub view_mode: ViewMode,
    /// Called with the mode the user picked
    pub on_view_mode_change: EventHandler<ViewMode>,
}

/// Header row for the favorites page.
#[component]
pub fn FavoritesHeader(props: FavoritesHeaderProps) -> Element {
    rsx! {
        div { class: "favorites-header",
            h1 { class: "section-title", "Mes Favoris" }

            div { class: "view-toggles",
                for mode in ViewMode::ALL {
                    button {
                        key: "{mode.as_str()}",
                        r#type: "button",
                        class: if mode == props.view_mode { "view-toggle active" } else { "view-toggle" },
                        "aria-label": "Affichage {mode.as_str()}",
                        onclick: move |_| props.on_view_mode_change.call(mode),

                        {mode_icon(mode)}
                    }
                }
            }
        }
    }
}

/// Lucide icon for each view mode
fn mode_icon(mode: ViewMode) -> Element {
    match mode {
        ViewMode::Grid => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                rect { x: "3", y: "3", width: "7", height: "7" }
                rect { x: "14", y: "3", width: "7", height: "7" }
                rect { x: "14", y: "14", width: "7", height: "7" }
                rect { x: "3", y: "14", width: "7", height: "7" }
            }
        },
        ViewMode::Carousel => rsx! {
            // Lucide list icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                line { x1: "8", y1: "6", x2: "21", y2: "6" }
                line { x1: "8", y1: "12", x2: "21", y2: "12" }
                line { x1: "8", y1: "18", x2: "21", y2: "18" }
                line { x1: "3", y1: "6", x2: "3.01", y2: "6" }
                line { x1: "3", y1: "12", x2: "3.01", y2: "12" }
                line { x1: "3", y1: "18", x2: "3.01", y2: "18" }
            }
        },
        ViewMode::Map => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M14.106 5.553a2 2 0 0 0 1.788 0l3.659-1.83A1 1 0 0 1 21 4.619v12.764a1 1 0 0 1-.553.894l-4.553 2.277a2 2 0 0 1-1.788 0l-4.212-2.106a2 2 0 0 0-1.788 0l-3.659 1.83A1 1 0 0 1 3 19.381V6.618a1 1 0 0 1 .553-.894l4.553-2.277a2 2 0 0 1 1.788 0z" }
                path { d: "M15 5.764v15" }
                path { d: "M9 3.236v15" }
            }
        },
    }
}
