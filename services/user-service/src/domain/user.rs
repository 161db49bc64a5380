//! User account data model.

use std::fmt;

use serde::Serialize;

/// Validation errors raised while building user values from raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// The identifier is not a decimal integer.
    InvalidId,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "user id must be an integer"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Store-assigned numeric user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw identifier returned by the store.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Parse an identifier from a path segment.
    ///
    /// # Examples
    /// ```
    /// use user_service::domain::UserId;
    ///
    /// assert_eq!(UserId::parse("42").map(|id| id.value()), Ok(42));
    /// assert!(UserId::parse("abc").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, UserValidationError> {
        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mutable profile fields of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub surname: String,
    pub display_name: String,
    pub email: String,
    pub tel: String,
}

/// Salted one-way password hash in PHC string format.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash produced by a password hasher or read from storage.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded hash string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// Account ready to be inserted; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub profile: UserProfile,
    pub password: PasswordHash,
}

/// Persisted user account.
///
/// Serialises flat in camelCase with the stored hash under `password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    #[serde(flatten)]
    profile: UserProfile,
    password: PasswordHash,
}

impl User {
    /// Assemble a user from its persisted parts.
    #[must_use]
    pub fn new(id: UserId, profile: UserProfile, password: PasswordHash) -> Self {
        Self {
            id,
            profile,
            password,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Profile fields.
    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Email address used for login lookups.
    #[must_use]
    pub fn email(&self) -> &str {
        self.profile.email.as_str()
    }

    /// Stored password hash.
    #[must_use]
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Ada".to_owned(),
            surname: "Lovelace".to_owned(),
            display_name: "ada".to_owned(),
            email: "ada@example.com".to_owned(),
            tel: "555-0100".to_owned(),
        }
    }

    #[rstest]
    #[case("1", Some(1))]
    #[case("-7", Some(-7))]
    #[case("2147483647", Some(i32::MAX))]
    #[case("2147483648", None)]
    #[case("1.5", None)]
    #[case("", None)]
    #[case("abc", None)]
    fn parse_user_id(#[case] raw: &str, #[case] expected: Option<i32>) {
        assert_eq!(UserId::parse(raw).ok().map(UserId::value), expected);
    }

    #[rstest]
    fn user_serialises_flat_camel_case() {
        let user = User::new(UserId::new(3), profile(), PasswordHash::new("$argon2id$x"));
        let value = serde_json::to_value(&user).expect("serialise user");
        assert_eq!(
            value,
            json!({
                "id": 3,
                "name": "Ada",
                "surname": "Lovelace",
                "displayName": "ada",
                "email": "ada@example.com",
                "tel": "555-0100",
                "password": "$argon2id$x",
            })
        );
    }

    #[rstest]
    fn password_hash_debug_is_redacted() {
        let hash = PasswordHash::new("$argon2id$secret");
        assert_eq!(format!("{hash:?}"), "PasswordHash(..)");
    }
}
