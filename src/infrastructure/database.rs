// src/infrastructure/database.rs
use crate::config::MigrationConfig;
use sqlx::{Connection, PgPool, postgres::PgPoolOptions};

/// Opens the single connection the migration runs on. Fails when the store is
/// unreachable within the connect timeout.
pub async fn init_pool(config: &MigrationConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(config.connect_timeout())
        .connect_with(config.connect_options())
        .await
}

pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    conn.ping().await
}
