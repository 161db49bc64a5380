//! Review use-cases over the repository port.
//!
//! Each operation issues exactly one repository call. Missing documents
//! become `NotFound`; store failures become `ServiceUnavailable` or
//! `InternalError`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use super::ports::{ReviewCatalogue, ReviewPersistenceError, ReviewRepository};
use super::{Error, Review, ReviewId, StoredReview};

const REVIEW_NOT_FOUND: &str = "Review not found";

/// Default [`ReviewCatalogue`] implementation.
#[derive(Clone)]
pub struct ReviewCatalogueService {
    reviews: Arc<dyn ReviewRepository>,
}

impl ReviewCatalogueService {
    /// Create a service over the given repository.
    pub fn new(reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { reviews }
    }
}

fn map_persistence_error(error: ReviewPersistenceError) -> Error {
    match error {
        ReviewPersistenceError::Connection { message } => {
            error!(%message, "review store unavailable");
            Error::service_unavailable("review store is not available")
        }
        ReviewPersistenceError::Query { message } => {
            error!(%message, "review store operation failed");
            Error::internal(message)
        }
    }
}

#[async_trait]
impl ReviewCatalogue for ReviewCatalogueService {
    async fn create(&self, review: Review) -> Result<ReviewId, Error> {
        let id = self
            .reviews
            .insert(&review)
            .await
            .map_err(map_persistence_error)?;
        info!(review_id = %id, "review created");
        Ok(id)
    }

    async fn get(&self, id: ReviewId) -> Result<StoredReview, Error> {
        self.reviews
            .find(&id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::not_found(REVIEW_NOT_FOUND))
    }

    async fn update(&self, id: ReviewId, review: Review) -> Result<(), Error> {
        let matched = self
            .reviews
            .replace(&id, &review)
            .await
            .map_err(map_persistence_error)?;
        if !matched {
            return Err(Error::not_found(REVIEW_NOT_FOUND));
        }
        info!(review_id = %id, "review replaced");
        Ok(())
    }

    async fn delete(&self, id: ReviewId) -> Result<(), Error> {
        let deleted = self
            .reviews
            .delete(&id)
            .await
            .map_err(map_persistence_error)?;
        if !deleted {
            return Err(Error::not_found(REVIEW_NOT_FOUND));
        }
        info!(review_id = %id, "review deleted");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StoredReview>, Error> {
        self.reviews.list().await.map_err(map_persistence_error)
    }
}
