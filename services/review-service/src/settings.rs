//! Review service configuration loaded via OrthoConfig.

use std::fmt;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_DATABASE: &str = "reviews";

/// Runtime settings for the review service.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REVIEW")]
pub struct ReviewSettings {
    /// MongoDB connection string.
    pub mongodb_uri: String,
    /// Database used when the URI names none.
    pub database: Option<String>,
    /// gRPC listen port.
    #[ortho_config(default = 50051)]
    pub port: u16,
}

impl ReviewSettings {
    /// Fallback database name, defaulting to `reviews`.
    pub fn database(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }
}

impl fmt::Debug for ReviewSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviewSettings")
            .field("mongodb_uri", &"<redacted>")
            .field("database", &self.database())
            .field("port", &self.port)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for review settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load() -> ReviewSettings {
        ReviewSettings::load_from_iter([OsString::from("review-service")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_only_uri_is_set() {
        let _guard = lock_env([
            (
                "REVIEW_MONGODB_URI",
                Some("mongodb://localhost:27017".to_owned()),
            ),
            ("REVIEW_DATABASE", None),
            ("REVIEW_PORT", None),
        ]);

        let settings = load();
        assert_eq!(settings.port, 50051);
        assert_eq!(settings.database(), "reviews");
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "REVIEW_MONGODB_URI",
                Some("mongodb://user:pw@db:27017".to_owned()),
            ),
            ("REVIEW_DATABASE", Some("feedback".to_owned())),
            ("REVIEW_PORT", Some("6000".to_owned())),
        ]);

        let settings = load();
        assert_eq!(settings.port, 6000);
        assert_eq!(settings.database(), "feedback");
        assert!(!format!("{settings:?}").contains("pw@"));
    }

    #[rstest]
    fn missing_uri_fails_to_load() {
        let _guard = lock_env([
            ("REVIEW_MONGODB_URI", None::<String>),
            ("REVIEW_DATABASE", None),
            ("REVIEW_PORT", None),
        ]);

        let result = ReviewSettings::load_from_iter([OsString::from("review-service")]);
        assert!(result.is_err());
    }
}
