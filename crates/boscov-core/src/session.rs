//! Session Store
//!
//! The authenticated user and bearer token, persisted in a client-side
//! key-value storage under fixed keys. Callers get typed values instead of
//! parsing the raw strings themselves.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StorageError;
use crate::models::{Role, User};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "usuario";

/// Client-held record of the authenticated user and their bearer token
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl Session {
    pub fn role(&self) -> Role {
        self.user.role()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }
}

/// Minimal string key-value storage (browser `localStorage` or in-memory)
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Remove every key, not only the session ones
    fn clear(&self) -> Result<(), StorageError>;
}

/// Typed get/set/clear over a [`KeyValueStorage`]
#[derive(Debug, Clone, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Stored user record; unparseable JSON reads as absent
    pub fn user(&self) -> Option<User> {
        let raw = self.storage.get_item(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("ignoring malformed stored user: {}", e);
                None
            }
        }
    }

    /// Both halves must be present for a session to exist
    pub fn get(&self) -> Option<Session> {
        Some(Session {
            token: self.token()?,
            user: self.user()?,
        })
    }

    pub fn set(&self, session: &Session) -> Result<(), StorageError> {
        self.storage.set_item(TOKEN_KEY, &session.token)?;
        self.set_user(&session.user)
    }

    /// Replace the stored user only (profile edits keep the token)
    pub fn set_user(&self, user: &User) -> Result<(), StorageError> {
        let json = serde_json::to_string(user).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.set_item(USER_KEY, &json)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.clear()
    }
}

/// In-memory storage for tests and non-browser targets
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn clear(&self) -> Result<(), StorageError> {
        (**self).clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> User {
        User {
            id: 4,
            name: "Rita".to_string(),
            email: "rita@example.com".to_string(),
            user_type: role.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_set_get_clear() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(&storage);
        assert!(store.get().is_none());

        let session = Session { user: user("admin"), token: "t.o.k".to_string() };
        store.set(&session).unwrap();
        assert_eq!(store.get(), Some(session.clone()));
        assert!(store.get().unwrap().is_admin());

        storage.set_item("unrelated", "x").unwrap();
        store.clear().unwrap();
        assert!(store.get().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_token_without_user_is_not_a_session() {
        let storage = MemoryStorage::new();
        storage.set_item(TOKEN_KEY, "abc").unwrap();
        let store = SessionStore::new(&storage);
        assert_eq!(store.token().as_deref(), Some("abc"));
        assert!(store.get().is_none());
    }

    #[test]
    fn test_malformed_user_reads_as_absent() {
        let storage = MemoryStorage::new();
        storage.set_item(USER_KEY, "{not json").unwrap();
        assert!(SessionStore::new(&storage).user().is_none());
    }

    #[test]
    fn test_set_user_keeps_token() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(&storage);
        store.set(&Session { user: user("comum"), token: "tok".to_string() }).unwrap();

        let mut edited = user("comum");
        edited.name = "Rita Lee".to_string();
        store.set_user(&edited).unwrap();

        let session = store.get().unwrap();
        assert_eq!(session.token, "tok");
        assert_eq!(session.user.name, "Rita Lee");
        assert!(!session.is_admin());
    }
}
