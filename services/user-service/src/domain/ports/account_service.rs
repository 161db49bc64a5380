//! Driving port for the account use-cases.
//!
//! Inbound adapters call this port without knowing the backing
//! infrastructure, so HTTP handler tests can substitute a double instead of
//! wiring persistence and crypto.

use async_trait::async_trait;

use crate::domain::{AccessToken, Error, LoginCredentials, Registration, User, UserId, UserProfile};

/// Account registration, login and profile management.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Hash the password and persist a new account.
    async fn register(&self, registration: Registration) -> Result<User, Error>;

    /// Check credentials and issue a bearer token.
    async fn login(&self, credentials: &LoginCredentials) -> Result<AccessToken, Error>;

    /// Fetch an account profile.
    async fn profile(&self, id: UserId) -> Result<User, Error>;

    /// Replace the profile fields of an account, leaving its password intact.
    async fn update_profile(&self, id: UserId, profile: UserProfile) -> Result<User, Error>;

    /// Remove an account.
    async fn delete(&self, id: UserId) -> Result<(), Error>;
}
