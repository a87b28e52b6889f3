use std::time::Duration;

use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::AppConfig;

/// Shared store handle. Cloning is cheap; every clone uses the same pool.
pub type DbConn = DatabaseConnection;

/// Open the SeaORM connection pool described by `config`.
pub async fn create_orm_conn(config: &AppConfig) -> Result<DbConn> {
    connect(&config.database_url, config.db_max_connections, config.db_timeout).await
}

pub async fn connect(
    database_url: &str,
    max_connections: u32,
    timeout: Duration,
) -> Result<DbConn> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .max_connections(max_connections)
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;
    tracing::debug!(max_connections, "store handle opened");
    Ok(conn)
}

/// Apply the embedded migrations in `migrations/` in version order.
pub async fn run_migrations(conn: &DbConn) -> Result<()> {
    let pool = conn.get_sqlite_connection_pool();
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
