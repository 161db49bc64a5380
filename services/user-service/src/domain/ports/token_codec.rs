//! Port for issuing and verifying stateless bearer tokens.

use crate::domain::{AccessToken, TokenClaims};

use super::define_port_error;

define_port_error! {
    /// Errors raised by token codec adapters.
    pub enum TokenError {
        /// The token could not be signed.
        Encoding { message: String } => "token encoding failed: {message}",
        /// The token is malformed or its signature does not verify.
        Invalid { message: String } => "token is invalid: {message}",
        /// The token carried an expiry that has passed.
        Expired => "token has expired",
    }
}

/// Sign claims into bearer tokens and verify presented tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenCodec: Send + Sync {
    /// Sign the claims with the server-held secret.
    fn issue(&self, claims: &TokenClaims) -> Result<AccessToken, TokenError>;

    /// Verify the signature (and expiry, when present) and decode the claims.
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
