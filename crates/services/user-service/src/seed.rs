//! Initial user data parsing.

use common::{AppError, AppResult};
use domain::User;

/// Parse a JSON array of `{ "username", "password", "email"? }` objects.
pub fn parse_users(json: &str) -> AppResult<Vec<User>> {
    serde_json::from_str(json).map_err(|e| AppError::bad_request(format!("Invalid seed users: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_users() {
        let users = parse_users(
            r#"[
                {"username": "admin", "password": "1234"},
                {"username": "trump", "password": "1234", "email": "trump@gmail.com"}
            ]"#,
        )
        .unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0], User::new("admin", "1234"));
        assert_eq!(users[1].email(), Some("trump@gmail.com"));
    }

    #[test]
    fn test_parse_users_rejects_malformed_json() {
        let err = parse_users(r#"{"username": "admin"}"#).unwrap_err();
        assert_eq!(err.code(), "BAD_REQUEST");
    }

    #[test]
    fn test_parse_users_requires_password() {
        assert!(parse_users(r#"[{"username": "admin"}]"#).is_err());
    }
}
