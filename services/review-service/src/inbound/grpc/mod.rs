//! gRPC inbound adapter implementing the generated `ReviewService` trait.

mod review_service;
mod status;

pub use review_service::ReviewGrpcService;
pub use status::status_for;
