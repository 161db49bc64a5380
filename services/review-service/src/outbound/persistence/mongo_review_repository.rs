//! MongoDB-backed `ReviewRepository` implementation.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::{Client, Collection, Database};
use tracing::{debug, warn};

use crate::domain::ports::{ReviewPersistenceError, ReviewRepository};
use crate::domain::{Review, ReviewId, StoredReview};

use super::documents::{ReviewDocument, object_id_to_review_id};

/// Collection holding review documents.
pub const REVIEW_COLLECTION: &str = "reviews";

/// Connect to the deployment named by `uri` and confirm it answers a `ping`.
///
/// The database named in the URI wins; `fallback_database` is used when the
/// URI names none.
///
/// # Errors
///
/// Returns `ReviewPersistenceError::Connection` when the URI is invalid or no
/// server responds.
pub async fn connect(
    uri: &str,
    fallback_database: &str,
) -> Result<Database, ReviewPersistenceError> {
    let client = Client::with_uri_str(uri).await.map_err(map_mongo_error)?;
    let database = client
        .default_database()
        .unwrap_or_else(|| client.database(fallback_database));
    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|err| ReviewPersistenceError::connection(err.to_string()))?;
    debug!(database = database.name(), "document store reachable");
    Ok(database)
}

/// MongoDB implementation of the `ReviewRepository` port.
#[derive(Clone)]
pub struct MongoReviewRepository {
    collection: Collection<ReviewDocument>,
}

impl MongoReviewRepository {
    /// Repository over the `reviews` collection of `database`.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(REVIEW_COLLECTION),
        }
    }
}

fn map_mongo_error(error: MongoError) -> ReviewPersistenceError {
    debug!(%error, "mongodb operation failed");
    match error.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. } => {
            ReviewPersistenceError::connection(error.to_string())
        }
        _ => ReviewPersistenceError::query(error.to_string()),
    }
}

fn id_filter(id: &ReviewId) -> Result<Document, ReviewPersistenceError> {
    let oid = ObjectId::parse_str(id.as_str())
        .map_err(|err| ReviewPersistenceError::query(err.to_string()))?;
    Ok(doc! { "_id": oid })
}

#[async_trait]
impl ReviewRepository for MongoReviewRepository {
    async fn insert(&self, review: &Review) -> Result<ReviewId, ReviewPersistenceError> {
        let result = self
            .collection
            .insert_one(ReviewDocument::from(review))
            .await
            .map_err(map_mongo_error)?;
        result
            .inserted_id
            .as_object_id()
            .and_then(object_id_to_review_id)
            .ok_or_else(|| ReviewPersistenceError::query("store assigned a non-ObjectId _id"))
    }

    async fn find(&self, id: &ReviewId) -> Result<Option<StoredReview>, ReviewPersistenceError> {
        let document = self
            .collection
            .find_one(id_filter(id)?)
            .await
            .map_err(map_mongo_error)?;
        Ok(document.and_then(ReviewDocument::into_stored))
    }

    async fn replace(
        &self,
        id: &ReviewId,
        review: &Review,
    ) -> Result<bool, ReviewPersistenceError> {
        let result = self
            .collection
            .replace_one(id_filter(id)?, ReviewDocument::from(review))
            .await
            .map_err(map_mongo_error)?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &ReviewId) -> Result<bool, ReviewPersistenceError> {
        let result = self
            .collection
            .delete_one(id_filter(id)?)
            .await
            .map_err(map_mongo_error)?;
        Ok(result.deleted_count > 0)
    }

    async fn list(&self) -> Result<Vec<StoredReview>, ReviewPersistenceError> {
        let documents: Vec<ReviewDocument> = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_mongo_error)?
            .try_collect()
            .await
            .map_err(map_mongo_error)?;

        let total = documents.len();
        let reviews: Vec<StoredReview> = documents
            .into_iter()
            .filter_map(ReviewDocument::into_stored)
            .collect();
        if reviews.len() < total {
            warn!(
                skipped = total - reviews.len(),
                "documents without an ObjectId _id left out of listing"
            );
        }
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn io_failures_map_to_connection() {
        let error = MongoError::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "refused",
        ));
        assert!(matches!(
            map_mongo_error(error),
            ReviewPersistenceError::Connection { .. }
        ));
    }

    #[rstest]
    fn other_failures_map_to_query() {
        let error = MongoError::custom("write conflict");
        assert!(matches!(
            map_mongo_error(error),
            ReviewPersistenceError::Query { .. }
        ));
    }

    #[rstest]
    fn id_filter_targets_object_id() {
        let id = ReviewId::parse("65a1f0c2e4b0a1b2c3d4e5f6").expect("valid id");
        let filter = id_filter(&id).expect("filter");
        let oid = filter.get_object_id("_id").expect("object id");
        assert_eq!(oid.to_hex(), id.as_str());
    }
}
