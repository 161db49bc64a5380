//! Account use-cases: registration, login and profile management.
//!
//! Each operation issues exactly one repository call (login adds one hash
//! verification) and maps port failures onto the domain error taxonomy.
//! Unknown emails and wrong passwords produce the same
//! `invalid credentials` error.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use super::ports::{
    AccountService, PasswordHasher, PasswordHasherError, TokenCodec, UserPersistenceError,
    UserRepository,
};
use super::{
    AccessToken, Error, LoginCredentials, NewUser, Registration, TokenClaims, User, UserId,
    UserProfile,
};

const USER_NOT_FOUND: &str = "User not found";

/// Default [`AccountService`] implementation over the driven ports.
#[derive(Clone)]
pub struct UserAccountService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenCodec>,
}

impl UserAccountService {
    /// Create a service from its collaborators.
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenCodec>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            error!(%message, "user store unavailable");
            Error::service_unavailable("user store is not available")
        }
        UserPersistenceError::Query { message } => {
            error!(%message, "user store query failed");
            Error::internal(message)
        }
    }
}

fn map_hasher_error(error: &PasswordHasherError) -> Error {
    error!(%error, "password hashing failed");
    Error::internal(error.to_string())
}

#[async_trait]
impl AccountService for UserAccountService {
    async fn register(&self, registration: Registration) -> Result<User, Error> {
        let Registration { profile, password } = registration;
        let hash = self
            .hasher
            .hash(&password)
            .await
            .map_err(|err| map_hasher_error(&err))?;
        let user = self
            .users
            .insert(&NewUser {
                profile,
                password: hash,
            })
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %user.id(), "account registered");
        Ok(user)
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<AccessToken, Error> {
        let Some(user) = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_persistence_error)?
        else {
            debug!("login rejected: unknown email");
            return Err(Error::invalid_credentials());
        };

        let matches = self
            .hasher
            .verify(credentials.password(), user.password_hash())
            .await
            .map_err(|err| map_hasher_error(&err))?;
        if !matches {
            debug!(user_id = %user.id(), "login rejected: password mismatch");
            return Err(Error::invalid_credentials());
        }

        let token = self
            .tokens
            .issue(&TokenClaims::new(user.id(), user.email()))
            .map_err(|err| {
                error!(error = %err, "token issuance failed");
                Error::internal(err.to_string())
            })?;
        info!(user_id = %user.id(), "login succeeded");
        Ok(token)
    }

    async fn profile(&self, id: UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }

    async fn update_profile(&self, id: UserId, profile: UserProfile) -> Result<User, Error> {
        self.users
            .update_profile(id, &profile)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }

    async fn delete(&self, id: UserId) -> Result<(), Error> {
        let deleted = self.users.delete(id).await.map_err(map_persistence_error)?;
        if deleted {
            info!(user_id = %id, "account deleted");
            Ok(())
        } else {
            Err(Error::not_found(USER_NOT_FOUND))
        }
    }
}

#[cfg(test)]
mod tests;
