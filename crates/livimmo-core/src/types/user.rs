//! User identity record held by the session

use serde::{Deserialize, Serialize};

/// Which side of the marketplace an account is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Buyer,
    Agent,
}

impl AccountType {
    /// Display label for the role selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            AccountType::Buyer => "Acheteur",
            AccountType::Agent => "Agent immobilier",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Buyer => write!(f, "buyer"),
            AccountType::Agent => write!(f, "agent"),
        }
    }
}

/// The authenticated user. At most one exists per session; see
/// [`crate::Session`]. Nothing is persisted across restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub account_type: AccountType,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl User {
    /// Full display name, falling back to the email when no name is set.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: Option<&str>, last: Option<&str>) -> User {
        User {
            id: "1".to_string(),
            email: "john@example.com".to_string(),
            first_name: first.map(String::from),
            last_name: last.map(String::from),
            avatar: None,
            account_type: AccountType::Buyer,
            phone: None,
            address: None,
            city: None,
            country: None,
        }
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        assert_eq!(user(Some("John"), Some("Doe")).display_name(), "John Doe");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(user(None, None).display_name(), "john@example.com");
    }

    #[test]
    fn test_account_type_serde_tags() {
        assert_eq!(
            serde_json::to_string(&AccountType::Agent).unwrap(),
            "\"agent\""
        );
        assert_eq!(AccountType::Buyer.to_string(), "buyer");
    }
}
