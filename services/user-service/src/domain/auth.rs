//! Authentication primitives: plaintext passwords, login credentials and
//! bearer-token claims.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::user::{UserId, UserProfile};

/// Domain error returned when registration credentials are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

/// Caller-supplied plaintext password, wiped from memory on drop.
///
/// Whitespace is preserved so credential comparisons match what the caller
/// typed at registration.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Accept any non-empty password.
    pub fn new(raw: &str) -> Result<Self, CredentialsValidationError> {
        if raw.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }
        Ok(Self::attempt(raw))
    }

    /// Wrap a login attempt verbatim. Empty input is allowed; it simply
    /// never matches a stored hash.
    #[must_use]
    pub fn attempt(raw: &str) -> Self {
        Self(Zeroizing::new(raw.to_owned()))
    }

    /// Plaintext value, for hashing and verification only.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(..)")
    }
}

/// Validated registration input: profile fields plus the plaintext password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub profile: UserProfile,
    pub password: Password,
}

/// Login credentials used by the account service.
///
/// Both parts are kept exactly as supplied: the email is matched verbatim
/// against stored accounts, and a blank email or password is just another
/// credential that fails to match.
///
/// # Examples
/// ```
/// use user_service::domain::LoginCredentials;
///
/// let creds = LoginCredentials::new(" a@x.com ", "");
/// assert_eq!(creds.email(), " a@x.com ");
/// assert_eq!(creds.password().expose(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Password,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn new(email: impl Into<String>, password: &str) -> Self {
        Self {
            email: email.into(),
            password: Password::attempt(password),
        }
    }

    /// Email used for the account lookup.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password supplied by the caller.
    pub fn password(&self) -> &Password {
        &self.password
    }
}

/// Claims embedded in an issued bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: i32,
    pub email: String,
}

impl TokenClaims {
    /// Claims binding the given account identifier and email.
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id: id.value(),
            email: email.into(),
        }
    }

    /// Account identifier carried by the token.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        UserId::new(self.id)
    }
}

/// Signed bearer token returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    access_token: String,
}

impl AccessToken {
    /// Wrap an encoded token.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self {
            access_token: encoded.into(),
        }
    }

    /// Encoded token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.access_token.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn registration_password_must_not_be_empty() {
        assert_eq!(
            Password::new("").expect_err("empty password must fail"),
            CredentialsValidationError::EmptyPassword
        );
    }

    #[rstest]
    #[case("  a@x.com  ", "hunter2")]
    #[case("b@y.org", " leading and trailing ")]
    #[case("", "")]
    fn login_credentials_keep_inputs_verbatim(#[case] email: &str, #[case] password: &str) {
        let creds = LoginCredentials::new(email, password);
        assert_eq!(creds.email(), email);
        assert_eq!(creds.password().expose(), password);
    }

    #[rstest]
    fn password_debug_is_redacted() {
        let password = Password::new("hunter2").expect("non-empty");
        assert_eq!(format!("{password:?}"), "Password(..)");
    }

    #[rstest]
    fn access_token_serialises_camel_case() {
        let value = serde_json::to_value(AccessToken::new("abc")).expect("serialise");
        assert_eq!(value, serde_json::json!({ "accessToken": "abc" }));
    }
}
