//! Port abstraction for review persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Review, ReviewId, StoredReview};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by review repository adapters.
    pub enum ReviewPersistenceError {
        /// The document store could not be reached.
        Connection { message: String } => "review store connection failed: {message}",
        /// The store rejected or failed the operation.
        Query { message: String } => "review store query failed: {message}",
    }
}

/// Single-statement access to the review collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Insert a new document and return its store-assigned identifier.
    async fn insert(&self, review: &Review) -> Result<ReviewId, ReviewPersistenceError>;

    /// Fetch a review by identifier.
    async fn find(&self, id: &ReviewId) -> Result<Option<StoredReview>, ReviewPersistenceError>;

    /// Replace every field of a review. Returns `false` when nothing matched.
    async fn replace(&self, id: &ReviewId, review: &Review)
    -> Result<bool, ReviewPersistenceError>;

    /// Remove a review. Returns `false` when nothing was deleted.
    async fn delete(&self, id: &ReviewId) -> Result<bool, ReviewPersistenceError>;

    /// Every review in store-defined order.
    async fn list(&self) -> Result<Vec<StoredReview>, ReviewPersistenceError>;
}
