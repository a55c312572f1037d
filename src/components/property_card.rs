//! Property Card Component
//!
//! Listing card with cover image, live/favorite badges, price and specs,
//! and the offer modal. Confirming an offer only pushes a toast; nothing
//! is submitted anywhere.

use dioxus::prelude::*;
use livimmo_core::{format_price, Property, Toast};

use crate::context::use_toaster;

#[derive(Props, Clone, PartialEq)]
pub struct PropertyCardProps {
    /// Listing to display
    pub property: Property,
}

/// Listing card for grids and carousels.
#[component]
pub fn PropertyCard(props: PropertyCardProps) -> Element {
    let toaster = use_toaster();
    let property = props.property;

    // Proposed offer starts at the asking price.
    let mut offer_amount = use_signal(|| property.price);
    let mut show_offer_modal = use_signal(|| false);

    let title_for_offer = property.title.clone();
    let send_offer = move |_| {
        toaster.push(Toast::success(
            "Offre envoyée !",
            format!(
                "Votre offre de {} DH pour {} a été envoyée.",
                format_price(offer_amount()),
                title_for_offer
            ),
        ));
        show_offer_modal.set(false);
    };

    rsx! {
        div { class: "property-card",
            div { class: "property-card-media",
                img { src: "{property.cover_image()}", alt: "{property.title}" }

                div { class: "property-card-badges",
                    if property.has_live {
                        span { class: "media-badge live", title: "Visite live programmée",
                            {camera_icon()}
                        }
                    }
                    button {
                        r#type: "button",
                        class: "media-badge",
                        "aria-label": "Ajouter aux favoris",
                        {heart_icon()}
                    }
                }
            }

            div { class: "property-card-body",
                h3 { class: "property-card-title", "{property.title}" }
                p { class: "property-card-price", "{format_price(property.price)} DH" }
                div { class: "property-card-location", "{property.location}" }
                div { class: "property-card-specs",
                    span { "{property.property_type}" }
                    span { "{property.surface} m²" }
                    span { "{property.rooms} pièces" }
                }

                div { class: "property-card-actions",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| show_offer_modal.set(true),
                        "Faire une offre"
                    }
                    if property.has_live {
                        button {
                            r#type: "button",
                            class: "btn btn-outline",
                            {camera_icon()}
                            "Rejoindre le live"
                        }
                    }
                }
            }
        }

        if show_offer_modal() {
            div {
                class: "modal-overlay",
                onclick: move |_| show_offer_modal.set(false),

                div {
                    class: "modal-content",
                    // Keep clicks inside the dialog from closing it
                    onclick: move |e| e.stop_propagation(),

                    h3 { class: "modal-title", "Faire une offre pour {property.title}" }
                    p { class: "modal-description",
                        "Prix demandé : {format_price(property.price)} DH"
                    }

                    div { class: "form-stack",
                        div { class: "form-field",
                            label { r#for: "amount", "Montant de votre offre (DH)" }
                            input {
                                id: "amount",
                                r#type: "number",
                                value: "{offer_amount}",
                                oninput: move |e| {
                                    offer_amount.set(e.value().parse().unwrap_or(0));
                                },
                            }
                        }
                        button {
                            r#type: "button",
                            class: "btn",
                            onclick: send_offer,
                            "Envoyer l'offre"
                        }
                    }
                }
            }
        }
    }
}

/// Lucide camera icon (live viewings)
fn camera_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "18",
            height: "18",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z" }
            circle { cx: "12", cy: "13", r: "3" }
        }
    }
}

/// Lucide heart icon (favorites)
fn heart_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "18",
            height: "18",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        }
    }
}
