//! Static legal pages linked from the signup form.

use dioxus::prelude::*;

use crate::components::NavHeader;

#[component]
pub fn Terms() -> Element {
    rsx! {
        NavHeader {}

        main { class: "page",
            h1 { class: "section-title", "Conditions générales" }
            div { class: "legal-body",
                p {
                    "L'utilisation de Livimmo vaut acceptation des présentes conditions. "
                    "Les annonces et visites live sont publiées sous la responsabilité des agents."
                }
                h2 { "Offres" }
                p {
                    "Les offres transmises via la plateforme sont indicatives et ne valent pas "
                    "engagement contractuel tant qu'elles ne sont pas confirmées par écrit."
                }
                h2 { "Comptes" }
                p {
                    "Chaque compte est personnel. Livimmo peut suspendre un compte en cas "
                    "d'usage frauduleux."
                }
            }
        }
    }
}

#[component]
pub fn Privacy() -> Element {
    rsx! {
        NavHeader {}

        main { class: "page",
            h1 { class: "section-title", "Politique de confidentialité" }
            div { class: "legal-body",
                p {
                    "Les informations saisies dans les formulaires ne quittent pas votre "
                    "session : aucune donnée n'est stockée ni transmise à des tiers."
                }
                h2 { "Données de compte" }
                p {
                    "Email, nom et téléphone servent uniquement à l'affichage du profil "
                    "pendant la session en cours."
                }
            }
        }
    }
}
