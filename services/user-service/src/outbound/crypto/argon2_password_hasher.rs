//! Argon2id-backed `PasswordHasher` adapter.
//!
//! Hashes are stored as PHC strings, so the salt and cost parameters travel
//! with each hash and verification needs no extra configuration. Hashing is
//! CPU-bound and runs on the blocking pool.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    self, PasswordHash as PhcHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;

use crate::domain::ports::{PasswordHasher, PasswordHasherError};
use crate::domain::{Password, PasswordHash};

/// Salted Argon2id password hashing.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    /// Hasher with the library's recommended Argon2id parameters.
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Hasher with explicit cost parameters.
    pub fn with_params(params: Params) -> Self {
        Self { params }
    }

    fn engine(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

async fn run_blocking<T, F>(task: F) -> Result<T, PasswordHasherError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, PasswordHasherError> + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| PasswordHasherError::hash(format!("hashing task failed: {err}")))?
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        let engine = self.engine();
        let password = password.clone();
        run_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            engine
                .hash_password(password.expose().as_bytes(), &salt)
                .map(|hash| PasswordHash::new(hash.to_string()))
                .map_err(|err| PasswordHasherError::hash(err.to_string()))
        })
        .await
    }

    async fn verify(
        &self,
        password: &Password,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        let engine = self.engine();
        let password = password.clone();
        let encoded = hash.as_str().to_owned();
        run_blocking(move || {
            let parsed = PhcHash::new(&encoded)
                .map_err(|err| PasswordHasherError::malformed_hash(err.to_string()))?;
            match engine.verify_password(password.expose().as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(err) => Err(PasswordHasherError::malformed_hash(err.to_string())),
            }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn hasher() -> Argon2PasswordHasher {
        let params = Params::new(8, 1, 1, None).expect("valid test params");
        Argon2PasswordHasher::with_params(params)
    }

    fn password(raw: &str) -> Password {
        Password::new(raw).expect("non-empty password")
    }

    #[rstest]
    #[tokio::test]
    async fn hash_verifies_against_same_password(hasher: Argon2PasswordHasher) {
        let hash = hasher.hash(&password("hunter2")).await.expect("hash");

        assert!(hash.as_str().starts_with("$argon2id$"));
        assert!(!hash.as_str().contains("hunter2"));
        assert!(
            hasher
                .verify(&password("hunter2"), &hash)
                .await
                .expect("verify")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn verify_rejects_different_password(hasher: Argon2PasswordHasher) {
        let hash = hasher.hash(&password("hunter2")).await.expect("hash");

        assert!(
            !hasher
                .verify(&password("hunter3"), &hash)
                .await
                .expect("verify")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn hashing_twice_uses_fresh_salts(hasher: Argon2PasswordHasher) {
        let first = hasher.hash(&password("hunter2")).await.expect("hash");
        let second = hasher.hash(&password("hunter2")).await.expect("hash");

        assert_ne!(first.as_str(), second.as_str());
    }

    #[rstest]
    #[tokio::test]
    async fn malformed_stored_hash_is_an_error(hasher: Argon2PasswordHasher) {
        let err = hasher
            .verify(&password("hunter2"), &PasswordHash::new("not-a-phc-string"))
            .await
            .expect_err("malformed hash");

        assert!(matches!(err, PasswordHasherError::MalformedHash { .. }));
    }
}
