//! Signup page - two-step flow: credentials, then role selection.
//!
//! Step state and the transition guards live in `livimmo_core::SignupFlow`;
//! this page binds the form fields and wires the submit outcome to the
//! toaster and the router.

use dioxus::prelude::*;
use livimmo_core::{SignupFlow, SignupStep};

use crate::app::Route;
use crate::components::RoleSelector;
use crate::context::{use_session, use_toaster};

#[component]
pub fn Signup() -> Element {
    let mut session = use_session();
    let toaster = use_toaster();
    let navigator = use_navigator();

    let mut flow = use_signal(SignupFlow::new);
    let mut show_password = use_signal(|| false);

    let handle_submit = move |_| {
        let outcome = {
            let mut flow_ref = flow.write();
            let mut session_ref = session.write();
            flow_ref.submit(&mut session_ref)
        };

        if let Some(toast) = outcome.toast {
            toaster.push(toast);
        }
        if outcome.completed {
            navigator.push(Route::Home {});
        }
    };

    let step = flow.read().step;
    let (heading, subheading) = match step {
        SignupStep::Credentials => (
            "Créez votre compte",
            "Rejoignez notre communauté en quelques étapes simples",
        ),
        SignupStep::Role => (
            "Choisissez votre rôle",
            "Sélectionnez le rôle qui correspond le mieux à vos besoins",
        ),
    };

    rsx! {
        div { class: "page-centered",
            div { class: "auth-panel",
                div { class: "auth-heading",
                    h1 { "{heading}" }
                    p { "{subheading}" }
                }

                div { class: "form-stack",
                    if step == SignupStep::Credentials {
                        div { class: "form-row",
                            div { class: "form-field",
                                label { r#for: "first-name", "Prénom" }
                                input {
                                    id: "first-name",
                                    r#type: "text",
                                    placeholder: "John",
                                    value: "{flow.read().form.first_name}",
                                    oninput: move |e| flow.write().form.first_name = e.value(),
                                }
                            }
                            div { class: "form-field",
                                label { r#for: "last-name", "Nom" }
                                input {
                                    id: "last-name",
                                    r#type: "text",
                                    placeholder: "Doe",
                                    value: "{flow.read().form.last_name}",
                                    oninput: move |e| flow.write().form.last_name = e.value(),
                                }
                            }
                        }

                        div { class: "form-field",
                            label { r#for: "email", "Email" }
                            input {
                                id: "email",
                                r#type: "email",
                                placeholder: "john@example.com",
                                value: "{flow.read().form.email}",
                                oninput: move |e| flow.write().form.email = e.value(),
                            }
                        }

                        div { class: "form-field",
                            label { r#for: "password", "Mot de passe" }
                            div { class: "password-wrap",
                                input {
                                    id: "password",
                                    r#type: if show_password() { "text" } else { "password" },
                                    placeholder: "••••••••",
                                    value: "{flow.read().form.password}",
                                    oninput: move |e| flow.write().form.password = e.value(),
                                }
                                button {
                                    r#type: "button",
                                    class: "password-toggle",
                                    "aria-label": if show_password() { "Masquer le mot de passe" } else { "Afficher le mot de passe" },
                                    onclick: move |_| show_password.set(!show_password()),
                                    {eye_icon(show_password())}
                                }
                            }
                            p { class: "field-hint",
                                "Minimum 8 caractères, une majuscule, un chiffre"
                            }
                        }

                        div { class: "form-field",
                            label { r#for: "phone", "Téléphone (optionnel)" }
                            input {
                                id: "phone",
                                r#type: "tel",
                                placeholder: "+212 6 12 34 56 78",
                                value: "{flow.read().form.phone}",
                                oninput: move |e| flow.write().form.phone = e.value(),
                            }
                        }

                        label { class: "checkbox-row", r#for: "terms",
                            input {
                                id: "terms",
                                r#type: "checkbox",
                                checked: flow.read().form.accept_terms,
                                oninput: move |e| flow.write().form.accept_terms = e.checked(),
                            }
                            span {
                                "J'accepte les "
                                Link { to: Route::Terms {}, "conditions générales" }
                                " et la "
                                Link { to: Route::Privacy {}, "politique de confidentialité" }
                            }
                        }
                    } else {
                        RoleSelector {
                            selected_role: flow.read().selected_role,
                            on_select: move |role| flow.write().selected_role = Some(role),
                        }
                    }

                    button {
                        r#type: "button",
                        class: "btn btn-big",
                        onclick: handle_submit,
                        if step == SignupStep::Credentials { "Continuer" } else { "Créer mon compte" }
                    }

                    p { class: "auth-footer",
                        "Vous avez déjà un compte ? "
                        Link { to: Route::Login {}, "Connectez-vous ici" }
                    }
                }
            }
        }
    }
}

/// Lucide eye / eye-off icons for the password toggle
fn eye_icon(visible: bool) -> Element {
    if visible {
        rsx! {
            // eye-off
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M10.733 5.076a10.744 10.744 0 0 1 11.205 6.575 1 1 0 0 1 0 .696 10.747 10.747 0 0 1-1.444 2.49" }
                path { d: "M14.084 14.158a3 3 0 0 1-4.242-4.242" }
                path { d: "M17.479 17.499a10.75 10.75 0 0 1-15.417-5.151 1 1 0 0 1 0-.696 10.75 10.75 0 0 1 4.446-5.143" }
                line { x1: "2", y1: "2", x2: "22", y2: "22" }
            }
        }
    } else {
        rsx! {
            // eye
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M2.062 12.348a1 1 0 0 1 0-.696 10.75 10.75 0 0 1 19.876 0 1 1 0 0 1 0 .696 10.75 10.75 0 0 1-19.876 0" }
                circle { cx: "12", cy: "12", r: "3" }
            }
        }
    }
}
