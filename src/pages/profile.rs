//! Profile page - current user details and logout.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::NavHeader;
use crate::context::{use_session, use_toaster};

#[component]
pub fn Profile() -> Element {
    let mut session = use_session();
    let toaster = use_toaster();
    let navigator = use_navigator();

    let handle_logout = move |_| {
        let toast = session.write().logout();
        toaster.push(toast);
        navigator.push(Route::Home {});
    };

    let user = session.read().user().cloned();

    rsx! {
        NavHeader {}

        main { class: "page",
            h1 { class: "section-title", "Mon profil" }

            if let Some(user) = user {
                div { class: "profile-card",
                    div { class: "profile-row",
                        span { class: "muted", "Nom" }
                        span { "{user.display_name()}" }
                    }
                    div { class: "profile-row",
                        span { class: "muted", "Email" }
                        span { "{user.email}" }
                    }
                    div { class: "profile-row",
                        span { class: "muted", "Compte" }
                        span { "{user.account_type.display_name()}" }
                    }
                    if let Some(phone) = &user.phone {
                        div { class: "profile-row",
                            span { class: "muted", "Téléphone" }
                            span { "{phone}" }
                        }
                    }
                    if let Some(city) = &user.city {
                        div { class: "profile-row",
                            span { class: "muted", "Ville" }
                            span { "{city}" }
                        }
                    }

                    button {
                        r#type: "button",
                        class: "btn btn-outline",
                        onclick: handle_logout,
                        "Se déconnecter"
                    }
                }
            } else {
                div { class: "profile-card",
                    p { class: "muted", "Vous n'êtes pas connecté." }
                    Link { to: Route::Login {}, class: "btn", "Se connecter" }
                }
            }
        }
    }
}
