// src/config.rs
use crate::domain::document::DocumentLayout;
use crate::presentation::cli::CliArgs;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::{env, path::PathBuf, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct MigrationConfig {
    db_host: String,
    db_port: u16,
    db_name: String,
    db_user: String,
    db_password: Option<String>,
    ssl_mode: PgSslMode,
    connect_timeout: Duration,
    query_timeout: Duration,
    source_root: PathBuf,
    destination_root: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_db_host() -> String {
    "127.0.0.1".into()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_name() -> String {
    "nbirdt".into()
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_query_timeout() -> u64 {
    3
}

fn default_source_root() -> PathBuf {
    PathBuf::from("./client/clienthandlers/files")
}

fn default_destination_root() -> PathBuf {
    PathBuf::from("./ui/static/site-content/files")
}

impl MigrationConfig {
    /// Build configuration from the command line and the process environment.
    /// A `.env` file, when present, populates the environment first.
    pub fn from_cli(args: CliArgs) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_sources(args, |key| env::var(key).ok())
    }

    /// Build configuration from the command line and an arbitrary variable
    /// lookup.
    pub fn from_sources(
        args: CliArgs,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let db_user = args
            .user
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::Missing("database user (-u)"))?;
        let db_password = args.password.filter(|p| !p.is_empty());
        let ssl_mode = PgSslMode::from_str(&args.ssl_mode)
            .map_err(|_| ConfigError::Invalid(format!("unknown ssl mode {:?}", args.ssl_mode)))?;

        let db_host = lookup("DB_HOST").unwrap_or_else(default_db_host);
        let db_port = match lookup("DB_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                ConfigError::Invalid(format!("DB_PORT must be a port number, got {raw:?}"))
            })?,
            None => default_db_port(),
        };
        let db_name = lookup("DB_NAME").unwrap_or_else(default_db_name);

        let connect_timeout_secs = lookup("DB_CONNECT_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or_else(default_connect_timeout);
        let query_timeout_secs = lookup("DB_QUERY_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or_else(default_query_timeout);

        let source_root = lookup("SOURCE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(default_source_root);
        let destination_root = lookup("DESTINATION_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(default_destination_root);

        Ok(Self {
            db_host,
            db_port,
            db_name,
            db_user,
            db_password,
            ssl_mode,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            query_timeout: Duration::from_secs(query_timeout_secs),
            source_root,
            destination_root,
        })
    }

    /// Connection options for the store, pinned to UTC.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .database(&self.db_name)
            .username(&self.db_user)
            .ssl_mode(self.ssl_mode)
            .options([("timezone", "UTC")]);

        match &self.db_password {
            Some(password) => options.password(password),
            None => options,
        }
    }

    pub fn db_host(&self) -> &str {
        &self.db_host
    }

    pub fn db_port(&self) -> u16 {
        self.db_port
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    pub fn db_user(&self) -> &str {
        &self.db_user
    }

    pub fn has_password(&self) -> bool {
        self.db_password.is_some()
    }

    pub fn ssl_mode(&self) -> PgSslMode {
        self.ssl_mode
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    pub fn layout(&self) -> DocumentLayout {
        DocumentLayout::new(self.source_root.clone(), self.destination_root.clone())
    }
}
