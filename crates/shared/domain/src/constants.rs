//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum username length accepted for key-based operations
pub const MIN_USERNAME_LENGTH: usize = 1;

/// Check if a username is usable as a primary key
pub fn is_valid_username(username: &str) -> bool {
    username.len() >= MIN_USERNAME_LENGTH
}

// =============================================================================
// Index names
// =============================================================================

/// Name of the primary (username) index, used in error messages and logs
pub const USERNAME_INDEX: &str = "username";

/// Name of the secondary (email) index, used in error messages and logs
pub const EMAIL_INDEX: &str = "email";
