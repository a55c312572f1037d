//! Session state holder
//!
//! Holds at most one authenticated [`User`] for the lifetime of the process.
//! The login/signup operations are stubs: they always succeed and install a
//! synthetic user record. The `Result` plumbing stays so the UI's failure
//! toast has somewhere to hang once real verification exists; no validation
//! rule is assumed in the meantime.
//!
//! Navigation is the caller's job: the view layer routes home after an `Ok`.

use crate::error::AuthError;
use crate::notify::Toast;
use crate::types::{AccountType, User};

/// In-memory session state. Pass a `&mut Session` to whatever needs to
/// mutate it rather than reaching for ambient globals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Derived flag: a user record is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Sign the user in.
    ///
    /// Stub: accepts any credentials and installs a fixed buyer record
    /// carrying the submitted email. The password is unused until real
    /// verification lands.
    pub fn login(&mut self, email: &str, _password: &str) -> Result<Toast, AuthError> {
        self.user = Some(User {
            id: "1".to_string(),
            email: email.to_string(),
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            avatar: None,
            account_type: AccountType::Buyer,
            phone: Some("+1234567890".to_string()),
            address: Some("123 Main St".to_string()),
            city: Some("New York".to_string()),
            country: Some("USA".to_string()),
        });

        tracing::info!(%email, "user logged in");
        Ok(Toast::success("Connexion réussie", "Bienvenue sur Livimmo !"))
    }

    /// Create an account and sign in.
    ///
    /// Stub: always succeeds, storing the submitted fields on the new user.
    pub fn signup(
        &mut self,
        email: &str,
        _password: &str,
        first_name: &str,
        last_name: &str,
        account_type: AccountType,
    ) -> Result<Toast, AuthError> {
        self.user = Some(User {
            id: "1".to_string(),
            email: email.to_string(),
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            avatar: None,
            account_type,
            phone: None,
            address: None,
            city: None,
            country: None,
        });

        tracing::info!(%email, %account_type, "account created");
        Ok(Toast::success("Inscription réussie", "Bienvenue sur Livimmo !"))
    }

    /// Sign out, clearing the current user.
    pub fn logout(&mut self) -> Toast {
        self.user = None;
        tracing::info!("user logged out");
        Toast::success("Déconnexion réussie", "À bientôt !")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_no_user() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_login_installs_user_with_submitted_email() {
        let mut session = Session::new();
        let toast = session.login("amina@example.com", "secret").unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().email, "amina@example.com");
        assert_eq!(session.user().unwrap().account_type, AccountType::Buyer);
        assert_eq!(toast.title, "Connexion réussie");
        assert!(!toast.destructive);
    }

    #[test]
    fn test_signup_stores_submitted_fields() {
        let mut session = Session::new();
        session
            .signup("sara@example.com", "secret", "Sara", "Alaoui", AccountType::Agent)
            .unwrap();

        let user = session.user().unwrap();
        assert_eq!(user.email, "sara@example.com");
        assert_eq!(user.first_name.as_deref(), Some("Sara"));
        assert_eq!(user.last_name.as_deref(), Some("Alaoui"));
        assert_eq!(user.account_type, AccountType::Agent);
    }

    #[test]
    fn test_login_replaces_previous_user() {
        let mut session = Session::new();
        session.login("first@example.com", "pw").unwrap();
        session.login("second@example.com", "pw").unwrap();
        assert_eq!(session.user().unwrap().email, "second@example.com");
    }

    #[test]
    fn test_logout_clears_user() {
        let mut session = Session::new();
        session.login("amina@example.com", "secret").unwrap();

        let toast = session.logout();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert_eq!(toast.title, "Déconnexion réussie");
    }
}
