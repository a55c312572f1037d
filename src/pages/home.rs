//! Home page - listing grid plus the scheduled lives section.

use dioxus::prelude::*;
use livimmo_core::data;

use crate::components::{NavHeader, PropertyCard, ScheduledLivesList};

#[component]
pub fn Home() -> Element {
    let properties = data::mock_properties();
    let lives = data::mock_scheduled_lives();

    rsx! {
        NavHeader {}

        main { class: "page",
            section {
                h2 { class: "section-title", "Annonces" }
                div { class: "property-grid",
                    for property in properties.iter() {
                        PropertyCard { key: "{property.id}", property: property.clone() }
                    }
                }
            }

            section { style: "margin-top: 2rem;",
                h2 { class: "section-title", "Lives programmés" }
                ScheduledLivesList { lives: lives }
            }
        }
    }
}
