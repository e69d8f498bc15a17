// src/presentation/cli.rs
use clap::Parser;

/// Database credentials. Everything else comes from the environment.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "docs-migrator",
    version,
    about = "Slugs holdings, publications and projects and moves their documents \
             to the slug-based layout"
)]
pub struct CliArgs {
    /// Database user
    #[arg(short = 'u', long = "user")]
    pub user: Option<String>,

    /// Database password
    #[arg(short = 'p', long = "password")]
    pub password: Option<String>,

    /// SSL mode (disable, allow, prefer, require, verify-ca, verify-full)
    #[arg(short = 's', long = "sslmode", default_value = "disable")]
    pub ssl_mode: String,
}
