//! Database Config

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` server connection string
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432",
        hide_env_values = true
    )]
    pub database_url: String,

    /// Database name on the server
    #[arg(long, env = "DATABASE_NAME", default_value = "thunder_services")]
    pub database_name: String,

    /// Seed empty product and testimonial tables at startup.
    #[arg(
        long,
        env = "SEED_ON_STARTUP",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub seed_on_startup: bool,
}
