//! Toast Host Component
//!
//! Renders the toaster's queue of transient banners, bottom-right.
//! Auto-dismiss timing lives in [`crate::context::Toaster`].

use dioxus::prelude::*;

use crate::context::use_toaster;

/// Banner stack overlaying every page.
#[component]
pub fn ToastHost() -> Element {
    let toaster = use_toaster();
    let entries = toaster.entries();

    rsx! {
        div { class: "toast-host",
            for entry in entries {
                div {
                    key: "{entry.id}",
                    class: if entry.toast.destructive { "toast destructive" } else { "toast" },

                    div { class: "toast-title", "{entry.toast.title}" }
                    div { class: "toast-description", "{entry.toast.description}" }

                    button {
                        r#type: "button",
                        class: "toast-close",
                        "aria-label": "Fermer la notification",
                        onclick: move |_| toaster.dismiss(entry.id),
                        "×"
                    }
                }
            }
        }
    }
}
