//! Test helpers for inbound HTTP components.
//!
//! Wires the real account service and token codec over an in-memory user
//! store so handler tests exercise the whole request path without I/O.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::ports::{
    PasswordHasher, PasswordHasherError, UserPersistenceError, UserRepository,
};
use crate::domain::{NewUser, Password, PasswordHash, User, UserAccountService, UserId, UserProfile};
use crate::inbound::http::state::HttpState;
use crate::outbound::crypto::JwtTokenCodec;

pub const TEST_SECRET: &str = "test-secret";

/// `SERIAL`-like in-memory user table.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<(i32, BTreeMap<i32, User>)>,
}

impl InMemoryUserRepository {
    fn with_rows<T>(&self, f: impl FnOnce(&mut (i32, BTreeMap<i32, User>)) -> T) -> T {
        let mut guard = self.rows.lock().expect("user table lock");
        f(&mut guard)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        Ok(self.with_rows(|(next, rows)| {
            *next += 1;
            let stored = User::new(
                UserId::new(*next),
                user.profile.clone(),
                user.password.clone(),
            );
            rows.insert(*next, stored.clone());
            stored
        }))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.with_rows(|(_, rows)| rows.get(&id.value()).cloned()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.with_rows(|(_, rows)| rows.values().find(|user| user.email() == email).cloned()))
    }

    async fn update_profile(
        &self,
        id: UserId,
        profile: &UserProfile,
    ) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.with_rows(|(_, rows)| {
            rows.get_mut(&id.value()).map(|user| {
                *user = User::new(id, profile.clone(), user.password_hash().clone());
                user.clone()
            })
        }))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        Ok(self.with_rows(|(_, rows)| rows.remove(&id.value()).is_some()))
    }
}

/// Cheap reversible stand-in for Argon2.
pub struct TaggingPasswordHasher;

#[async_trait]
impl PasswordHasher for TaggingPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        Ok(PasswordHash::new(format!("hashed:{}", password.expose())))
    }

    async fn verify(
        &self,
        password: &Password,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        Ok(hash.as_str() == format!("hashed:{}", password.expose()))
    }
}

/// Handler state over an empty in-memory store.
pub fn test_state() -> HttpState {
    let tokens = Arc::new(JwtTokenCodec::new(TEST_SECRET, None));
    let accounts = UserAccountService::new(
        Arc::new(InMemoryUserRepository::default()),
        Arc::new(TaggingPasswordHasher),
        tokens.clone(),
    );
    HttpState::new(Arc::new(accounts), tokens)
}
