use clap::{Args, Parser, Subcommand};
use thunder_app::context::AppContext;

mod migrate;
mod seed;

#[derive(Debug, Parser)]
#[command(name = "thunder-app", about = "Thunder Services CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    database: DatabaseArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct DatabaseArgs {
    /// PostgreSQL server connection string
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432",
        hide_env_values = true
    )]
    database_url: String,

    /// Database name on the server
    #[arg(long, env = "DATABASE_NAME", default_value = "thunder_services")]
    database_name: String,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply pending schema migrations
    Migrate,

    /// Seed products and testimonials into empty tables
    Seed,

    /// Replace all products and testimonials with the seed set
    Reseed,
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let app = AppContext::from_database(
            &self.database.database_url,
            &self.database.database_name,
        )
        .map_err(|error| format!("{error}: {}", source_of(&error)))?;

        match self.command {
            Commands::Migrate => migrate::run(&app).await,
            Commands::Seed => seed::seed(&app).await,
            Commands::Reseed => seed::reseed(&app).await,
        }
    }
}

fn source_of(error: &dyn std::error::Error) -> String {
    error
        .source()
        .map_or_else(String::new, ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_args_default_to_local_server() {
        let cli = Cli::try_parse_from(["thunder-app", "migrate"]).expect("should parse");

        assert_eq!(cli.database.database_name, "thunder_services");
        assert!(matches!(cli.command, Commands::Migrate));
    }

    #[test]
    fn database_args_accept_flags() {
        let cli = Cli::try_parse_from([
            "thunder-app",
            "--database-url",
            "postgres://db:5432",
            "--database-name",
            "thunder_staging",
            "reseed",
        ])
        .expect("should parse");

        assert_eq!(cli.database.database_url, "postgres://db:5432");
        assert_eq!(cli.database.database_name, "thunder_staging");
        assert!(matches!(cli.command, Commands::Reseed));
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["thunder-app", "tenant"]).is_err());
    }
}
