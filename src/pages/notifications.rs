//! Notifications page - static list until notifications get a backend.

use dioxus::prelude::*;

use crate::components::NavHeader;

#[component]
pub fn Notifications() -> Element {
    let items = [
        "Le live \"Villa moderne avec piscine\" commence dans 2 jours",
        "Nouveau bien correspondant à votre recherche à Marrakech",
        "Sara Alaoui a répondu à votre demande de visite",
    ];

    rsx! {
        NavHeader {}

        main { class: "page",
            h1 { class: "section-title", "Notifications" }
            div { class: "notification-list",
                for (i, item) in items.iter().enumerate() {
                    div { key: "{i}", class: "notification-item", "{item}" }
                }
            }
        }
    }
}
