//! Postgres connection pool setup.
//!
//! Builds a `PgPool` from [`StoreSettings`] and runs migrations on it,
//! creating the chat log schema if absent.

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::config::StoreSettings;

/// Connect to Postgres and bring the schema up to date.
///
/// Connection parameters are passed as options rather than a URL so the
/// password never appears in a formatted string.
pub async fn connect(settings: &StoreSettings) -> Result<PgPool, sqlx::Error> {
    let options = PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .database(&settings.database)
        .username(&settings.user)
        .password(settings.password.expose_secret());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    sqlx::migrate!("../../migrations").run(&pool).await?;
    tracing::debug!(database = %settings.database, "schema migrations applied");

    Ok(pool)
}
