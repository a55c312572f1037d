//! Live Card Component
//!
//! Compact card for a scheduled live viewing: thumbnail with the live
//! badge, title, host and location, price line.

use dioxus::prelude::*;
use livimmo_core::{format_price, LiveEvent};

#[derive(Props, Clone, PartialEq)]
pub struct LiveCardProps {
    pub live: LiveEvent,
}

/// One scheduled live viewing.
#[component]
pub fn LiveCard(props: LiveCardProps) -> Element {
    let live = props.live;
    let when = live.date.format("%d/%m %H:%M");

    rsx! {
        div { class: "live-card",
            div { class: "live-card-media",
                img { src: "{live.thumbnail}", alt: "{live.title}" }
                span { class: "live-badge", "Live · {when}" }
            }

            div { class: "live-card-body",
                h3 { class: "live-card-title", "{live.title}" }
                div { class: "live-card-meta", "{live.agent} · {live.location}" }
                div { class: "live-card-price", "{format_price(live.price.as_amount())} DH" }
                if let Some(description) = &live.description {
                    p { class: "live-card-meta", "{description}" }
                }
            }
        }
    }
}
