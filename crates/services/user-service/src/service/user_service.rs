//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use tracing::{debug, warn};

use common::{AppError, AppResult};
use domain::{is_valid_username, User};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
///
/// Business rejections come back as `false`/`None`; only invalid input is an
/// error.
pub trait UserService: Send + Sync {
    /// Check credentials against the username index
    fn login_with_username(&self, username: &str, password: &str) -> bool;

    /// Check credentials against the email index
    fn login_with_email(&self, email: &str, password: &str) -> bool;

    /// Register a new user. Returns `false` if the username or email is taken.
    fn register_user(&mut self, username: &str, password: &str, email: Option<&str>) -> bool;

    /// Remove a user by username. Fails if the username is empty.
    fn remove_user(&mut self, username: &str) -> AppResult<bool>;

    /// List all distinct users
    fn get_all_users(&self) -> Vec<User>;

    /// Change the email of a user that already has one
    fn change_user_email(&mut self, username: &str, new_email: &str) -> bool;

    /// Get user by username
    fn get_user_by_username(&self, username: &str) -> Option<User>;

    /// Get user by email
    fn get_user_by_email(&self, email: &str) -> Option<User>;

    /// Number of registered users
    fn count_users(&self) -> usize;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Box<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Box<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

impl UserService for UserManager {
    fn login_with_username(&self, username: &str, password: &str) -> bool {
        let authenticated = self
            .repo
            .find_by_username(username)
            .is_some_and(|user| user.verify_password(password));

        debug!(username, authenticated, "Login with username");
        authenticated
    }

    fn login_with_email(&self, email: &str, password: &str) -> bool {
        let authenticated = self
            .repo
            .find_by_email(email)
            .is_some_and(|user| user.verify_password(password));

        debug!(email, authenticated, "Login with email");
        authenticated
    }

    fn register_user(&mut self, username: &str, password: &str, email: Option<&str>) -> bool {
        let user = match email {
            Some(email) => User::with_email(username, password, email),
            None => User::new(username, password),
        };
        self.repo.insert(user)
    }

    fn remove_user(&mut self, username: &str) -> AppResult<bool> {
        if !is_valid_username(username) {
            warn!("Rejected removal with empty username");
            return Err(AppError::validation("Username cannot be null or empty"));
        }
        Ok(self.repo.remove(username))
    }

    fn get_all_users(&self) -> Vec<User> {
        self.repo.list()
    }

    fn change_user_email(&mut self, username: &str, new_email: &str) -> bool {
        self.repo.update_email(username, new_email.to_string())
    }

    fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.repo.find_by_username(username)
    }

    fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.repo.find_by_email(email)
    }

    fn count_users(&self) -> usize {
        self.repo.count()
    }
}
