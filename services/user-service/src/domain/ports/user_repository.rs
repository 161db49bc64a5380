//! Port abstraction for user account persistence adapters and their errors.
//!
//! Every method maps to exactly one store statement; adapters must not retry
//! or combine calls.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId, UserProfile};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account and return the stored row, including its
    /// store-assigned identifier.
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Fetch an account by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch the first account registered under `email`.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError>;

    /// Overwrite the profile fields of an account in a single conditional
    /// update, returning the post-update row. The password is never touched.
    ///
    /// Returns `None` when no row matched `id`.
    async fn update_profile(
        &self,
        id: UserId,
        profile: &UserProfile,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Remove an account. Returns `false` when no row matched `id`.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
