//! HTTP server configuration object.

use std::net::SocketAddr;
use std::time::Duration;

use zeroize::Zeroizing;

use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) jwt_secret: Zeroizing<String>,
    pub(crate) token_ttl: Option<Duration>,
}

impl ServerConfig {
    /// Configuration serving `db_pool` on `bind_addr`, signing tokens with
    /// `jwt_secret`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool, jwt_secret: impl Into<String>) -> Self {
        Self {
            bind_addr,
            db_pool,
            jwt_secret: Zeroizing::new(jwt_secret.into()),
            token_ttl: None,
        }
    }

    /// Add an `exp` claim of `ttl` to issued tokens.
    #[must_use]
    pub fn with_token_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
