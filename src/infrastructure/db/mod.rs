use std::time::Duration;

use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;

/// Bounded pool over the configured backend (Postgres or MySQL). The pool
/// scopes acquire/release around every query, including error paths;
/// `acquire_timeout` bounds waits at the I/O boundary.
pub async fn connect_pool(database_url: &str) -> anyhow::Result<AnyPool> {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub mod repositories;
