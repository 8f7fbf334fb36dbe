//! User Service Library
//!
//! In-memory user directory indexed by username and email, with a service
//! layer for registration, login, removal and email changes.

pub mod config;
pub mod repository;
pub mod seed;
pub mod service;

use tracing::info;

use common::AppResult;

use crate::config::UserServiceConfig;
use crate::repository::UserStore;
use crate::service::UserManager;

pub use repository::UserRepository;
pub use service::UserService;

/// Build the user service from configuration.
///
/// Installs the tracing subscriber if none is set yet. Seed data with
/// duplicate usernames or emails is rejected as a whole.
pub fn bootstrap(config: &UserServiceConfig) -> AppResult<UserManager> {
    common::init_tracing(&config.service);

    let users = match config.seed_users.as_deref() {
        Some(json) => seed::parse_users(json)?,
        None => Vec::new(),
    };

    let store = UserStore::new(users)?;
    info!(
        service = %config.service.service_name,
        users = store.count(),
        "User directory loaded"
    );

    Ok(UserManager::new(Box::new(store)))
}
