//! HS256 JSON Web Token adapter for the `TokenCodec` port.
//!
//! Tokens carry the account id and email plus an `iat` timestamp. An `exp`
//! claim is only added when a lifetime is configured; tokens without one are
//! accepted until the signing secret changes.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::domain::ports::{TokenCodec, TokenError};
use crate::domain::{AccessToken, TokenClaims};

#[derive(Debug, Serialize, Deserialize)]
struct TokenPayload {
    id: i32,
    email: String,
    iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,
}

/// Signs and verifies bearer tokens with a shared HMAC secret.
#[derive(Clone)]
pub struct JwtTokenCodec {
    secret: Zeroizing<Vec<u8>>,
    ttl: Option<Duration>,
}

impl JwtTokenCodec {
    /// Codec for `secret`; `ttl` of `None` issues non-expiring tokens.
    pub fn new(secret: impl AsRef<[u8]>, ttl: Option<Duration>) -> Self {
        Self {
            secret: Zeroizing::new(secret.as_ref().to_vec()),
            ttl,
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation
    }
}

impl std::fmt::Debug for JwtTokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenCodec")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenCodec for JwtTokenCodec {
    fn issue(&self, claims: &TokenClaims) -> Result<AccessToken, TokenError> {
        let now = Utc::now().timestamp();
        let exp = match self.ttl {
            Some(ttl) => {
                let secs = i64::try_from(ttl.as_secs())
                    .map_err(|_| TokenError::encoding("token lifetime out of range"))?;
                Some(now.saturating_add(secs))
            }
            None => None,
        };
        let payload = TokenPayload {
            id: claims.id,
            email: claims.email.clone(),
            iat: now,
            exp,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(&self.secret),
        )
        .map(AccessToken::new)
        .map_err(|err| TokenError::encoding(err.to_string()))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let data = decode::<TokenPayload>(
            token,
            &DecodingKey::from_secret(&self.secret),
            &Self::validation(),
        )
        .map_err(|err| match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::expired(),
            _ => TokenError::invalid(err.to_string()),
        })?;

        Ok(TokenClaims {
            id: data.claims.id,
            email: data.claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use rstest::{fixture, rstest};

    #[fixture]
    fn claims() -> TokenClaims {
        TokenClaims::new(UserId::new(7), "a@x.com")
    }

    #[rstest]
    #[case(None)]
    #[case(Some(Duration::from_secs(3600)))]
    fn issued_token_verifies(claims: TokenClaims, #[case] ttl: Option<Duration>) {
        let codec = JwtTokenCodec::new("secret", ttl);
        let token = codec.issue(&claims).expect("issue");

        assert_eq!(codec.verify(token.as_str()).expect("verify"), claims);
    }

    #[rstest]
    fn token_signed_with_other_secret_is_invalid(claims: TokenClaims) {
        let token = JwtTokenCodec::new("secret", None)
            .issue(&claims)
            .expect("issue");

        let err = JwtTokenCodec::new("other", None)
            .verify(token.as_str())
            .expect_err("signature mismatch");
        assert!(matches!(err, TokenError::Invalid { .. }));
    }

    #[rstest]
    #[case("")]
    #[case("not-a-token")]
    #[case("a.b.c")]
    fn garbage_is_invalid(#[case] token: &str) {
        let err = JwtTokenCodec::new("secret", None)
            .verify(token)
            .expect_err("garbage");
        assert!(matches!(err, TokenError::Invalid { .. }));
    }

    #[rstest]
    fn past_expiry_is_reported(claims: TokenClaims) {
        let issued_at = Utc::now().timestamp() - 7200;
        let payload = TokenPayload {
            id: claims.id,
            email: claims.email,
            iat: issued_at,
            exp: Some(issued_at + 60),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(b"secret"),
        )
        .expect("encode");

        let err = JwtTokenCodec::new("secret", None)
            .verify(&token)
            .expect_err("expired");
        assert_eq!(err, TokenError::Expired);
    }

    #[rstest]
    fn debug_hides_secret() {
        let codec = JwtTokenCodec::new("s3cret", None);
        assert!(!format!("{codec:?}").contains("s3cret"));
    }
}
