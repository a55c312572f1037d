//! Toast notification payloads
//!
//! Pure data for the transient banners the UI shows after user actions.
//! Rendering and auto-dismiss timing live in the desktop crate.

use serde::{Deserialize, Serialize};

/// A transient notification banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Short headline, e.g. "Connexion réussie"
    pub title: String,
    /// One-line detail under the headline
    pub description: String,
    /// Styled as an error/rejection when true
    pub destructive: bool,
}

impl Toast {
    /// Plain success banner.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            destructive: false,
        }
    }

    /// Rejection banner (destructive styling).
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            destructive: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_not_destructive() {
        let toast = Toast::success("Offre envoyée !", "Votre offre a été envoyée.");
        assert_eq!(toast.title, "Offre envoyée !");
        assert!(!toast.destructive);
    }

    #[test]
    fn test_error_is_destructive() {
        let toast = Toast::error("Erreur", "Une erreur est survenue");
        assert!(toast.destructive);
    }
}
