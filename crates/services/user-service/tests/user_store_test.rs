//! User store integration tests.

use domain::{DomainError, User};
use user_service_lib::repository::{UserRepository, UserStore};

fn seeded_store() -> UserStore {
    UserStore::new(vec![
        User::new("admin", "1234"),
        User::new("ali", "qwert"),
        User::new("mohammad", "123asd"),
        User::with_email("trump", "1234", "trump@gmail.com"),
    ])
    .unwrap()
}

#[test]
fn test_get_containing_user() {
    let store = seeded_store();
    let ali = store.find_by_username("ali").unwrap();

    assert_eq!(ali.username, "ali");
    assert_eq!(ali.password, "qwert");
}

#[test]
fn test_get_missing_user() {
    let store = seeded_store();
    assert!(store.find_by_username("reza").is_none());
}

#[test]
fn test_create_store_with_duplicate_users_fails() {
    let result = UserStore::new(vec![User::new("ali", "1234"), User::new("ali", "4567")]);
    assert!(matches!(result, Err(DomainError::DuplicateUsername(name)) if name == "ali"));
}

#[test]
fn test_insert_increases_count() {
    let mut store = seeded_store();
    let old_count = store.count();

    assert!(store.insert(User::new("reza", "123abc")));
    assert_eq!(store.count(), old_count + 1);
}

#[test]
fn test_insert_duplicate_email_fails() {
    let mut store = seeded_store();
    let old_count = store.count();

    assert!(!store.insert(User::with_email("kamela", "loser", "trump@gmail.com")));
    assert_eq!(store.count(), old_count);
    assert_eq!(store.list().len(), old_count);
}

#[test]
fn test_remove_existing_user() {
    let mut store = seeded_store();
    let old_count = store.count();

    assert!(store.remove("ali"));
    assert!(store.find_by_username("ali").is_none());
    assert_eq!(store.count(), old_count - 1);
}

#[test]
fn test_remove_missing_user_does_not_affect_storage() {
    let mut store = seeded_store();
    let old_count = store.count();

    assert!(!store.remove("nonexistent"));
    assert_eq!(store.count(), old_count);
}

#[test]
fn test_remove_only_removes_specified_user() {
    let mut store = seeded_store();

    assert!(store.remove("admin"));
    assert!(store.find_by_username("admin").is_none());
    assert!(store.find_by_username("ali").is_some());
    assert_eq!(store.count(), 3);
}

#[test]
fn test_list_returns_all_unique_users() {
    let store = seeded_store();
    let users = store.list();

    assert_eq!(users.len(), 4);
    for name in ["admin", "ali", "mohammad", "trump"] {
        assert!(users.iter().any(|u| u.username == name));
    }
}

#[test]
fn test_list_size_tracks_inserts_and_removes() {
    let mut store = UserStore::empty();

    assert!(store.insert(User::new("a", "1")));
    assert!(store.insert(User::with_email("b", "2", "b@x.com")));
    assert!(!store.insert(User::new("a", "3")));
    assert!(store.insert(User::with_email("c", "3", "c@x.com")));
    assert!(store.remove("b"));
    assert!(!store.remove("b"));

    assert_eq!(store.list().len(), 2);
    assert_eq!(store.count(), 2);
}
