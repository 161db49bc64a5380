//! Review service entry-point: loads settings, connects to MongoDB and serves
//! the gRPC API.

use std::net::SocketAddr;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use review_service::domain::ReviewCatalogueService;
use review_service::outbound::persistence::{MongoReviewRepository, connect};
use review_service::server::serve;
use review_service::settings::ReviewSettings;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ReviewSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    info!(?settings, "settings loaded");

    let database = connect(&settings.mongodb_uri, settings.database())
        .await
        .map_err(|e| std::io::Error::other(format!("document store unavailable: {e}")))?;
    let reviews = ReviewCatalogueService::new(Arc::new(MongoReviewRepository::new(&database)));

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    serve(addr, Arc::new(reviews))
        .await
        .map_err(std::io::Error::other)
}
