//! Property Map Component
//!
//! Presentational stand-in for a real map: pins are placed by projecting
//! each listing's coordinates onto a fixed bounding box covering the
//! Moroccan coast. No tiles, no geolocation.

use dioxus::prelude::*;
use livimmo_core::Property;

// Bounding box the pins are projected into.
const LAT_MAX: f64 = 36.0;
const LAT_MIN: f64 = 29.5;
const LNG_MIN: f64 = -10.5;
const LNG_MAX: f64 = -4.5;

#[derive(Props, Clone, PartialEq)]
pub struct PropertyMapProps {
    pub properties: Vec<Property>,
}

/// Pin panel for listings that carry coordinates.
#[component]
pub fn PropertyMap(props: PropertyMapProps) -> Element {
    let pins: Vec<(String, String, f64, f64)> = props
        .properties
        .iter()
        .filter_map(|p| {
            let coords = p.coordinates?;
            let left = ((coords.lng - LNG_MIN) / (LNG_MAX - LNG_MIN) * 100.0).clamp(2.0, 98.0);
            let top = ((LAT_MAX - coords.lat) / (LAT_MAX - LAT_MIN) * 100.0).clamp(4.0, 96.0);
            Some((p.id.clone(), p.title.clone(), left, top))
        })
        .collect();

    rsx! {
        div { class: "map-panel",
            for (id, title, left, top) in pins {
                div {
                    key: "{id}",
                    class: "map-pin",
                    style: "left: {left}%; top: {top}%;",

                    {pin_icon()}
                    span { class: "map-pin-label", "{title}" }
                }
            }
        }
    }
}

/// Lucide map-pin icon
fn pin_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0" }
            circle { cx: "12", cy: "10", r: "3" }
        }
    }
}
