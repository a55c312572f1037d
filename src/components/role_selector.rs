//! Role Selector Component
//!
//! Buyer/agent choice cards for the second signup step.

use dioxus::prelude::*;
use livimmo_core::AccountType;

#[derive(Props, Clone, PartialEq)]
pub struct RoleSelectorProps {
    /// Currently picked role, if any
    pub selected_role: Option<AccountType>,
    /// Called when a role card is clicked
    pub on_select: EventHandler<AccountType>,
}

/// Two-card role picker.
#[component]
pub fn RoleSelector(props: RoleSelectorProps) -> Element {
    let roles = [
        (
            AccountType::Buyer,
            "Recherchez des biens et participez aux visites live",
        ),
        (
            AccountType::Agent,
            "Publiez vos biens et organisez des visites live",
        ),
    ];

    rsx! {
        div { class: "role-selector",
            for (role, hint) in roles {
                button {
                    key: "{role}",
                    r#type: "button",
                    class: if props.selected_role == Some(role) { "role-option selected" } else { "role-option" },
                    onclick: move |_| props.on_select.call(role),

                    span { class: "role-option-title", "{role.display_name()}" }
                    span { class: "role-option-hint", "{hint}" }
                }
            }
        }
    }
}
