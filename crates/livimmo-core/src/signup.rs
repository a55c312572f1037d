//! Two-step signup flow
//!
//! Step one collects credentials and requires the terms checkbox; step two
//! picks a role and hands everything to [`Session::signup`]. There is no
//! backward transition out of the role step.

use crate::notify::Toast;
use crate::session::Session;
use crate::types::AccountType;

/// Where the signup form currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupStep {
    #[default]
    Credentials,
    Role,
}

/// Transient field values for the credentials step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub accept_terms: bool,
}

/// What a submit produced: possibly a toast, and whether the signup went
/// through to the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub toast: Option<Toast>,
    pub completed: bool,
}

impl SubmitOutcome {
    fn rejected(toast: Toast) -> Self {
        Self {
            toast: Some(toast),
            completed: false,
        }
    }
}

/// Step controller driving the signup page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupFlow {
    pub step: SignupStep,
    pub form: SignupForm,
    pub selected_role: Option<AccountType>,
}

impl SignupFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a submit of the current step.
    ///
    /// At `Credentials` the terms checkbox gates the advance to `Role`; at
    /// `Role` a selected role gates the actual [`Session::signup`] call,
    /// which runs exactly once with the collected fields.
    pub fn submit(&mut self, session: &mut Session) -> SubmitOutcome {
        match self.step {
            SignupStep::Credentials => {
                if !self.form.accept_terms {
                    return SubmitOutcome::rejected(Toast::error(
                        "Conditions d'utilisation",
                        "Veuillez accepter les conditions d'utilisation pour continuer",
                    ));
                }
                self.step = SignupStep::Role;
                SubmitOutcome {
                    toast: None,
                    completed: false,
                }
            }
            SignupStep::Role => {
                let Some(role) = self.selected_role else {
                    return SubmitOutcome::rejected(Toast::error(
                        "Sélection du rôle",
                        "Veuillez sélectionner votre rôle pour continuer",
                    ));
                };

                match session.signup(
                    &self.form.email,
                    &self.form.password,
                    &self.form.first_name,
                    &self.form.last_name,
                    role,
                ) {
                    Ok(toast) => SubmitOutcome {
                        toast: Some(toast),
                        completed: true,
                    },
                    Err(e) => {
                        tracing::warn!(error = %e, "signup rejected");
                        SubmitOutcome::rejected(Toast::error(
                            "Erreur d'inscription",
                            "Une erreur est survenue lors de l'inscription",
                        ))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filled_flow() -> SignupFlow {
        let mut flow = SignupFlow::new();
        flow.form.first_name = "John".to_string();
        flow.form.last_name = "Doe".to_string();
        flow.form.email = "john@example.com".to_string();
        flow.form.password = "hunter22".to_string();
        flow.form.accept_terms = true;
        flow
    }

    #[test]
    fn test_submit_without_terms_stays_on_credentials() {
        let mut flow = SignupFlow::new();
        flow.form.email = "john@example.com".to_string();
        let mut session = Session::new();

        let outcome = flow.submit(&mut session);

        assert_eq!(flow.step, SignupStep::Credentials);
        assert!(!outcome.completed);
        let toast = outcome.toast.unwrap();
        assert!(toast.destructive);
        assert_eq!(toast.title, "Conditions d'utilisation");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_submit_with_terms_advances_to_role() {
        let mut flow = filled_flow();
        let mut session = Session::new();

        let outcome = flow.submit(&mut session);

        assert_eq!(flow.step, SignupStep::Role);
        assert!(outcome.toast.is_none());
        assert!(!outcome.completed);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_role_step_without_selection_is_rejected() {
        let mut flow = filled_flow();
        let mut session = Session::new();
        flow.submit(&mut session);

        let outcome = flow.submit(&mut session);

        assert_eq!(flow.step, SignupStep::Role);
        assert!(!outcome.completed);
        assert_eq!(outcome.toast.unwrap().title, "Sélection du rôle");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_role_step_with_selection_signs_up_with_entered_fields() {
        let mut flow = filled_flow();
        let mut session = Session::new();
        flow.submit(&mut session);

        flow.selected_role = Some(AccountType::Agent);
        let outcome = flow.submit(&mut session);

        assert!(outcome.completed);
        assert_eq!(outcome.toast.unwrap().title, "Inscription réussie");

        let user = session.user().unwrap();
        assert_eq!(user.email, "john@example.com");
        assert_eq!(user.first_name.as_deref(), Some("John"));
        assert_eq!(user.last_name.as_deref(), Some("Doe"));
        assert_eq!(user.account_type, AccountType::Agent);
    }

    proptest! {
        /// Any non-empty credentials with terms accepted advance the flow
        /// from Credentials to Role in exactly one submit.
        #[test]
        fn prop_terms_accepted_advances_once(
            first in "[A-Za-z]{1,12}",
            last in "[A-Za-z]{1,12}",
            email in "[a-z]{1,8}@[a-z]{1,8}\\.com",
            password in "[A-Za-z0-9]{8,16}",
        ) {
            let mut flow = SignupFlow::new();
            flow.form.first_name = first;
            flow.form.last_name = last;
            flow.form.email = email;
            flow.form.password = password;
            flow.form.accept_terms = true;

            let mut session = Session::new();
            let outcome = flow.submit(&mut session);

            prop_assert_eq!(flow.step, SignupStep::Role);
            prop_assert!(!outcome.completed);
            prop_assert!(outcome.toast.is_none());
            // Nothing reaches the session until the role step completes.
            prop_assert!(!session.is_authenticated());
        }
    }
}
