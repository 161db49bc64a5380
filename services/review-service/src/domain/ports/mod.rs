//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod review_catalogue;
mod review_repository;

#[cfg(test)]
pub use review_catalogue::MockReviewCatalogue;
pub use review_catalogue::ReviewCatalogue;
#[cfg(test)]
pub use review_repository::MockReviewRepository;
pub use review_repository::{ReviewPersistenceError, ReviewRepository};
