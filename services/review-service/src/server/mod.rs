//! gRPC server construction: review service, reflection and request spans.

use std::net::SocketAddr;
use std::sync::Arc;

use tonic::transport::Server;
use tonic::transport::server::Router;
use tracing::{info, info_span};

use crate::domain::ports::ReviewCatalogue;
use crate::inbound::grpc::ReviewGrpcService;
use crate::proto::FILE_DESCRIPTOR_SET;
use crate::proto::review_service_server::ReviewServiceServer;

/// Failures while assembling or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The reflection service rejected the descriptor set.
    #[error("failed to build reflection service: {0}")]
    Reflection(#[from] tonic_reflection::server::Error),
    /// Binding or serving failed.
    #[error("gRPC transport failed: {0}")]
    Transport(#[from] tonic::transport::Error),
}

fn reflection_builder() -> tonic_reflection::server::Builder<'static> {
    tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
}

/// Assemble the router serving `reviews` plus server reflection.
///
/// Reflection answers on both the `v1` and `v1alpha` protocols; older
/// clients such as grpcurl before 1.8.8 only speak `v1alpha`.
///
/// # Errors
/// Returns [`ServerError::Reflection`] if the embedded descriptor set cannot
/// be registered.
pub fn build_router(reviews: Arc<dyn ReviewCatalogue>) -> Result<Router, ServerError> {
    let reflection_v1 = reflection_builder().build_v1()?;
    let reflection_v1alpha = reflection_builder().build_v1alpha()?;

    Ok(Server::builder()
        .trace_fn(|request| info_span!("grpc_request", path = %request.uri().path()))
        .add_service(ReviewServiceServer::new(ReviewGrpcService::new(reviews)))
        .add_service(reflection_v1)
        .add_service(reflection_v1alpha))
}

/// Serve on `addr` until the process is stopped.
///
/// # Errors
/// Propagates reflection and transport failures.
pub async fn serve(addr: SocketAddr, reviews: Arc<dyn ReviewCatalogue>) -> Result<(), ServerError> {
    let router = build_router(reviews)?;
    info!(%addr, "review service listening");
    router.serve(addr).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockReviewCatalogue;
    use rstest::rstest;

    #[rstest]
    #[case::v1(reflection_builder().build_v1().map(|_| ()))]
    #[case::v1alpha(reflection_builder().build_v1alpha().map(|_| ()))]
    fn embedded_descriptor_registers_for_reflection(
        #[case] built: Result<(), tonic_reflection::server::Error>,
    ) {
        assert!(built.is_ok());
    }

    #[rstest]
    fn router_builds_with_both_reflection_protocols() {
        let reviews: Arc<dyn ReviewCatalogue> = Arc::new(MockReviewCatalogue::new());
        assert!(build_router(reviews).is_ok());
    }
}
