//! Scheduled Lives List Component
//!
//! Renders one LiveCard per upcoming event and a map of where they are.
//! Events are projected into listing shape (`LiveEvent::to_property`) so the
//! map component only ever deals with `Property` records. No sorting,
//! filtering, or pagination.

use dioxus::prelude::*;
use livimmo_core::{LiveEvent, Property};

use super::{LiveCard, PropertyMap};

#[derive(Props, Clone, PartialEq)]
pub struct ScheduledLivesListProps {
    pub lives: Vec<LiveEvent>,
}

/// Upcoming live viewings, as cards plus a location map.
#[component]
pub fn ScheduledLivesList(props: ScheduledLivesListProps) -> Element {
    let locations: Vec<Property> = props.lives.iter().map(LiveEvent::to_property).collect();

    rsx! {
        div { class: "live-grid",
            for live in props.lives.iter() {
                LiveCard { key: "{live.id}", live: live.clone() }
            }
        }

        PropertyMap { properties: locations }
    }
}
