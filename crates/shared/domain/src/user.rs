//! User domain entity.

use serde::{Deserialize, Serialize};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// Opaque credential, compared by exact equality
    #[serde(skip_serializing)]
    pub password: String,
    /// Unique across the directory when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// Create a new user without an email
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: None,
        }
    }

    /// Create a new user with an email
    pub fn with_email(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: Some(email.into()),
        }
    }

    /// Check if user has an email
    pub fn has_email(&self) -> bool {
        self.email.is_some()
    }

    /// Email as a borrowed str, if any
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Exact, case-sensitive comparison. No trimming.
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}
