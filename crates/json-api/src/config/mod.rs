//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Thunder Services JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "thunder-json", about = "Thunder Services JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "thunder-json",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--database-name",
            "thunder_staging",
            "--seed-on-startup",
            "false",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:9000");
        assert_eq!(config.database.database_name, "thunder_staging");
        assert!(!config.database.seed_on_startup, "seeding should be disabled");

        Ok(())
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = ServerConfig::try_parse_from(["thunder-json", "--port", "not-a-port"]);

        assert!(result.is_err(), "expected port parse failure");
    }
}
