//! Login page - email/password form over the session stub.

use dioxus::prelude::*;
use livimmo_core::Toast;

use crate::app::Route;
use crate::context::{use_session, use_toaster};

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let toaster = use_toaster();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_login = move |_| {
        match session.write().login(&email(), &password()) {
            Ok(toast) => {
                toaster.push(toast);
                navigator.push(Route::Home {});
            }
            // Unreachable with the current stub; kept for when real
            // verification lands.
            Err(e) => {
                tracing::warn!(error = %e, "login rejected");
                toaster.push(Toast::error(
                    "Erreur de connexion",
                    "Email ou mot de passe incorrect",
                ));
            }
        }
    };

    rsx! {
        div { class: "page-centered",
            div { class: "auth-panel",
                div { class: "auth-heading",
                    h1 { "Connectez-vous" }
                    p { "Retrouvez vos favoris et vos visites live" }
                }

                div { class: "form-stack",
                    div { class: "form-field",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "john@example.com",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "password", "Mot de passe" }
                        input {
                            id: "password",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-big",
                        onclick: handle_login,
                        "Se connecter"
                    }
                }

                p { class: "auth-footer",
                    "Pas encore de compte ? "
                    Link { to: Route::Signup {}, "Inscrivez-vous ici" }
                }
            }
        }
    }
}
