//! MongoDB persistence adapter for review records.
//!
//! The document shape (`documents.rs`) stays internal; the repository only
//! translates between documents and domain types.

mod documents;
mod mongo_review_repository;

pub use mongo_review_repository::{MongoReviewRepository, REVIEW_COLLECTION, connect};
