//! In-memory user repository with username and email indexes.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::{debug, info};

use domain::{DomainError, DomainResult, User, EMAIL_INDEX, USERNAME_INDEX};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups return owned snapshots. Duplicate keys and missing users are
/// reported through the return value, never as errors.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// Find user by exact, case-sensitive username
    fn find_by_username(&self, username: &str) -> Option<User>;

    /// Find user by exact, case-sensitive email
    fn find_by_email(&self, email: &str) -> Option<User>;

    /// List every user exactly once, in no particular order
    fn list(&self) -> Vec<User>;

    /// Insert a user into both indexes, or into neither.
    ///
    /// Returns `false` if the username or the email is already taken.
    fn insert(&mut self, user: User) -> bool;

    /// Remove a user and its email entry. Returns `false` if absent.
    fn remove(&mut self, username: &str) -> bool;

    /// Replace the email of a user that already has one, re-keying the
    /// email index in the same step.
    ///
    /// Returns `false` if the user is absent, has no email, or `new_email`
    /// belongs to someone else.
    fn update_email(&mut self, username: &str, new_email: String) -> bool;

    /// Number of users in the primary index
    fn count(&self) -> usize;
}

/// Concrete in-memory implementation of UserRepository.
///
/// `by_username` owns the records. `by_email` maps each present email to the
/// username of its owner, so both indexes always resolve to the same record.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    by_username: HashMap<String, User>,
    by_email: HashMap<String, String>,
}

impl UserStore {
    /// Build a store from an initial data set.
    ///
    /// Usernames are checked across the whole set before emails. Any
    /// collision aborts construction.
    pub fn new(users: impl IntoIterator<Item = User>) -> DomainResult<Self> {
        let mut by_username: HashMap<String, User> = HashMap::new();
        for user in users {
            match by_username.entry(user.username.clone()) {
                Entry::Occupied(entry) => {
                    return Err(DomainError::duplicate_username(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(user);
                }
            }
        }

        let mut by_email: HashMap<String, String> = HashMap::new();
        for user in by_username.values() {
            if let Some(email) = user.email() {
                if by_email
                    .insert(email.to_string(), user.username.clone())
                    .is_some()
                {
                    return Err(DomainError::duplicate_email(email));
                }
            }
        }

        debug!(
            users = by_username.len(),
            emails = by_email.len(),
            "User store constructed"
        );

        Ok(Self {
            by_username,
            by_email,
        })
    }

    /// Create an empty store
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check the primary index for a username
    pub fn contains_username(&self, username: &str) -> bool {
        self.by_username.contains_key(username)
    }

    /// Check the secondary index for an email
    pub fn contains_email(&self, email: &str) -> bool {
        self.by_email.contains_key(email)
    }
}

impl UserRepository for UserStore {
    fn find_by_username(&self, username: &str) -> Option<User> {
        self.by_username.get(username).cloned()
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        self.by_email
            .get(email)
            .and_then(|username| self.by_username.get(username))
            .cloned()
    }

    fn list(&self) -> Vec<User> {
        self.by_username.values().cloned().collect()
    }

    fn insert(&mut self, user: User) -> bool {
        if self.by_username.contains_key(&user.username) {
            debug!(username = %user.username, index = USERNAME_INDEX, "Insert rejected: duplicate key");
            return false;
        }
        if let Some(email) = user.email() {
            if self.by_email.contains_key(email) {
                debug!(username = %user.username, index = EMAIL_INDEX, "Insert rejected: duplicate key");
                return false;
            }
            self.by_email.insert(email.to_string(), user.username.clone());
        }

        info!(username = %user.username, has_email = user.has_email(), "User inserted");
        self.by_username.insert(user.username.clone(), user);
        true
    }

    fn remove(&mut self, username: &str) -> bool {
        let Some(user) = self.by_username.remove(username) else {
            debug!(username, "Remove rejected: not found");
            return false;
        };
        if let Some(email) = user.email() {
            self.by_email.remove(email);
        }

        info!(username, "User removed");
        true
    }

    fn update_email(&mut self, username: &str, new_email: String) -> bool {
        let Some(user) = self.by_username.get_mut(username) else {
            debug!(username, "Email change rejected: not found");
            return false;
        };
        let Some(old_email) = user.email.clone() else {
            debug!(username, "Email change rejected: user has no email");
            return false;
        };
        if old_email == new_email {
            return true;
        }
        if self.by_email.contains_key(&new_email) {
            debug!(username, index = EMAIL_INDEX, "Email change rejected: duplicate key");
            return false;
        }

        self.by_email.remove(&old_email);
        self.by_email.insert(new_email.clone(), username.to_string());
        user.email = Some(new_email);

        info!(username, "User email changed");
        true
    }

    fn count(&self) -> usize {
        self.by_username.len()
    }
}
