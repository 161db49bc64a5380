//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::Trace;
use crate::domain::UserAccountService;
use crate::inbound::http::error::json_error_handler;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{delete_user, get_user, login, register, update_user};
use crate::outbound::crypto::{Argon2PasswordHasher, JwtTokenCodec};
use crate::outbound::persistence::DieselUserRepository;

/// Wire the Diesel repository and credential adapters behind the account
/// service.
fn build_http_state(config: &ServerConfig) -> HttpState {
    let tokens = Arc::new(JwtTokenCodec::new(
        config.jwt_secret.as_bytes(),
        config.token_ttl,
    ));
    let accounts = UserAccountService::new(
        Arc::new(DieselUserRepository::new(config.db_pool.clone())),
        Arc::new(Argon2PasswordHasher::new()),
        tokens.clone(),
    );
    HttpState::new(Arc::new(accounts), tokens)
}

/// Assemble the application: trace middleware, JSON error envelope, account
/// routes and health probes.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .service(register)
        .service(login)
        .service(get_user)
        .service(update_user)
        .service(delete_user)
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// Readiness flips once the listener is bound. Actix's own signal handling is
/// disabled; pair the server with [`drain_on`] to stop it.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(config));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .disable_signals()
    .run();

    info!(addr = %config.bind_addr, "account service listening");
    health_state.mark_ready();
    Ok(server)
}

/// Once `signal` resolves, fail liveness, then stop accepting connections and
/// wait for in-flight requests to finish.
pub async fn drain_on(
    signal: impl Future<Output = ()>,
    health_state: web::Data<HealthState>,
    handle: ServerHandle,
) {
    signal.await;
    info!("shutdown requested, draining");
    health_state.mark_unhealthy();
    handle.stop(true).await;
}
