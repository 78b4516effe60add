//! Database bootstrap: read-only SQLite pool and schema verification.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::Result;
use crate::config::DatabaseConfig;
use crate::error::ClimateError;

/// Opens a read-only connection pool over the observation database.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Verifies the observation schema is present.
///
/// The dataset ships as a pre-built SQLite file, so a missing table means a
/// wrong or corrupt `database.path` and the service refuses to start.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('measurement', 'station')",
    )
    .fetch_all(pool)
    .await?;

    for required in ["measurement", "station"] {
        if !tables.iter().any(|t| t == required) {
            return Err(ClimateError::config(format!(
                "Database is missing the '{required}' table"
            )));
        }
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_ensure_schema_accepts_complete_database() {
        let pool = memory_pool().await;
        assert!(ensure_schema(&pool).await.is_ok());
    }

    #[tokio::test]
    async fn test_ensure_schema_rejects_missing_table() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory database");
        sqlx::query(CREATE_STATION)
            .execute(&pool)
            .await
            .expect("create station table");

        let err = ensure_schema(&pool).await.unwrap_err();
        assert!(err.to_string().contains("measurement"));
    }

    #[tokio::test]
    async fn test_connect_missing_database_fails() {
        let config = DatabaseConfig {
            path: PathBuf::from("/nonexistent/hawaii.sqlite"),
            max_connections: 1,
        };
        assert!(connect(&config).await.is_err());
    }
}
