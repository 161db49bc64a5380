//! Driving port for the review use-cases.

use async_trait::async_trait;

use crate::domain::{Error, Review, ReviewId, StoredReview};

/// Create, read, replace, delete and list review records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewCatalogue: Send + Sync {
    /// Store a new review, returning its assigned identifier.
    async fn create(&self, review: Review) -> Result<ReviewId, Error>;

    /// Fetch a review.
    async fn get(&self, id: ReviewId) -> Result<StoredReview, Error>;

    /// Replace a review wholesale.
    async fn update(&self, id: ReviewId, review: Review) -> Result<(), Error>;

    /// Remove a review.
    async fn delete(&self, id: ReviewId) -> Result<(), Error>;

    /// All reviews.
    async fn list(&self) -> Result<Vec<StoredReview>, Error>;
}
