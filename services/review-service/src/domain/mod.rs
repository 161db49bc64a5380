//! Domain primitives, ports and use-cases for review records.

pub mod error;
pub mod ports;
mod review;
mod review_catalogue;

pub use self::error::{DomainError, ErrorCode};
pub use self::review::{Review, ReviewId, ReviewIdError, StoredReview};
pub use self::review_catalogue::ReviewCatalogueService;

/// Short alias used across adapters.
pub type Error = DomainError;
