//! Site Header Component
//!
//! Fixed top bar: Livimmo brand (navigates home), notifications bell with
//! the unread badge, and the profile button.

use dioxus::prelude::*;

use crate::app::Route;

/// Unread count shown on the bell. Fixed until notifications get a backend.
const UNREAD_COUNT: u32 = 3;

/// Fixed site header shown on every browsing page.
#[component]
pub fn NavHeader() -> Element {
    let navigator = use_navigator();

    rsx! {
        header { class: "site-header",
            div { class: "site-header-inner",
                div { class: "brand",
                    h1 {
                        class: "brand-title",
                        onclick: move |_| { navigator.push(Route::Home {}); },
                        "Livimmo"
                    }
                    span { class: "brand-video-icon", {video_icon()} }
                }

                div { class: "header-actions",
                    button {
                        r#type: "button",
                        class: "icon-btn",
                        "aria-label": "Notifications",
                        onclick: move |_| { navigator.push(Route::Notifications {}); },

                        {bell_icon()}
                        span { class: "unread-badge", "{UNREAD_COUNT}" }
                    }
                    button {
                        r#type: "button",
                        class: "icon-btn",
                        "aria-label": "Profil",
                        onclick: move |_| { navigator.push(Route::Profile {}); },

                        {user_icon()}
                    }
                }
            }
        }
    }
}

/// Lucide video icon (live accent next to the brand)
fn video_icon() -> Element {
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
            path { d: "m16 13 5.223 3.482a.5.5 0 0 0 .777-.416V7.87a.5.5 0 0 0-.752-.432L16 10.5" }
            rect { x: "2", y: "6", width: "14", height: "12", rx: "2" }
        }
    }
}

/// Lucide bell icon
fn bell_icon() -> Element {
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
            path { d: "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" }
            path { d: "M10.3 21a1.94 1.94 0 0 0 3.4 0" }
        }
    }
}

/// Lucide user icon
fn user_icon() -> Element {
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
            circle { cx: "12", cy: "8", r: "5" }
            path { d: "M20 21a8 8 0 0 0-16 0" }
        }
    }
}
