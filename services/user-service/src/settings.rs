//! Account service configuration loaded via OrthoConfig.
//!
//! Values are layered from CLI flags, the environment (`PORT`, `DB_HOST`,
//! `JWT_SECRET`, ...) and optional configuration files.

use std::fmt;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_DB_HOST: &str = "localhost";

/// Errors raised while deriving runtime values from settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// Neither a full database URL nor a database name was supplied.
    #[error("set DATABASE_URL or DB_NAME to locate the user database")]
    MissingDatabase,
    /// The `db_*` parts do not form a valid connection URL.
    #[error("invalid database location: {0}")]
    InvalidDatabaseUrl(String),
}

/// Runtime settings for the account service.
#[derive(Clone, Deserialize, OrthoConfig)]
pub struct AccountSettings {
    /// HTTP listen port.
    #[ortho_config(default = 3000)]
    pub port: u16,
    /// Full connection string; overrides the `db_*` parts when present.
    pub database_url: Option<String>,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
    pub db_host: Option<String>,
    #[ortho_config(default = 5432)]
    pub db_port: u16,
    pub db_name: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
    /// HMAC secret used to sign and verify bearer tokens.
    pub jwt_secret: String,
    /// Token lifetime in seconds; tokens never expire when unset.
    pub token_ttl_secs: Option<u64>,
}

impl AccountSettings {
    /// Database host, falling back to `localhost`.
    pub fn db_host(&self) -> &str {
        self.db_host.as_deref().unwrap_or(DEFAULT_DB_HOST)
    }

    /// Connection string for the user database.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingDatabase`] when neither `database_url`
    /// nor `db_name` is configured, and [`SettingsError::InvalidDatabaseUrl`]
    /// when the host or port cannot form a URL.
    pub fn database_url(&self) -> Result<String, SettingsError> {
        if let Some(url) = &self.database_url {
            return Ok(url.clone());
        }
        let name = self
            .db_name
            .as_deref()
            .ok_or(SettingsError::MissingDatabase)?;
        let invalid = |detail: &str| SettingsError::InvalidDatabaseUrl(detail.to_owned());

        let mut url = Url::parse(&format!("postgres://{}:{}", self.db_host(), self.db_port))
            .map_err(|e| invalid(&e.to_string()))?;
        url.set_path(&format!("/{name}"));
        // `Url` percent-encodes userinfo, so reserved characters survive.
        if let Some(user) = &self.db_user {
            url.set_username(user)
                .map_err(|()| invalid("cannot set database user"))?;
            url.set_password(self.db_password.as_deref())
                .map_err(|()| invalid("cannot set database password"))?;
        }
        Ok(url.into())
    }

    /// Configured token lifetime.
    pub fn token_ttl(&self) -> Option<Duration> {
        self.token_ttl_secs.map(Duration::from_secs)
    }
}

impl fmt::Debug for AccountSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("AccountSettings")
            .field("port", &self.port)
            .field("database_url", &redacted(&self.database_url))
            .field("db_user", &self.db_user)
            .field("db_password", &redacted(&self.db_password))
            .field("db_host", &self.db_host())
            .field("db_port", &self.db_port)
            .field("db_name", &self.db_name)
            .field("db_max_connections", &self.db_max_connections)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish()
    }
}
