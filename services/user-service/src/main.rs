//! Account service entry-point: loads settings, connects the user store and
//! serves the HTTP API.

use std::net::SocketAddr;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use user_service::inbound::http::health::HealthState;
use user_service::outbound::persistence::{DbPool, PoolConfig};
use user_service::server::{ServerConfig, create_server, drain_on};
use user_service::settings::AccountSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AccountSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    info!(?settings, "settings loaded");

    let database_url = settings.database_url().map_err(std::io::Error::other)?;
    let pool_config =
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections);
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|e| std::io::Error::other(format!("database unavailable: {e}")))?;

    let bind_addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let config = ServerConfig::new(bind_addr, pool, settings.jwt_secret.as_str())
        .with_token_ttl(settings.token_ttl());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &config)?;
    actix_web::rt::spawn(drain_on(shutdown_signal(), health_state, server.handle()));
    server.await
}

/// Resolve on Ctrl-C or, on Unix, `SIGTERM`.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = terminate.recv() => {}
                }
                return;
            }
            Err(e) => warn!(error = %e, "SIGTERM handler unavailable"),
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Ctrl-C handler unavailable; not draining on signal");
        std::future::pending::<()>().await;
    }
}
