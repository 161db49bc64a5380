//! Review record data model.

use std::collections::BTreeMap;
use std::fmt;

/// Raised when a review identifier is not a 24-character hex string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewIdError;

impl fmt::Display for ReviewIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("reviewID must be a 24-character hexadecimal ObjectId")
    }
}

impl std::error::Error for ReviewIdError {}

/// Store-assigned review identifier in its canonical lowercase hex form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReviewId(String);

impl ReviewId {
    const LEN: usize = 24;

    /// Validate an identifier received from a caller.
    ///
    /// # Examples
    /// ```
    /// use review_service::domain::ReviewId;
    ///
    /// assert!(ReviewId::parse("65a1f0c2e4b0a1b2c3d4e5f6").is_ok());
    /// assert!(ReviewId::parse("not-an-id").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ReviewIdError> {
        if raw.len() == Self::LEN && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(raw.to_ascii_lowercase()))
        } else {
            Err(ReviewIdError)
        }
    }

    /// Hex encoding of the identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller-supplied review fields, persisted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Review {
    pub product_id: String,
    pub user_id: String,
    pub rating: i32,
    pub comment: String,
    pub attributes: BTreeMap<String, String>,
}

/// A review together with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReview {
    pub id: ReviewId,
    pub review: Review,
}
