//! Pool setup and developers-table bootstrap.

use crate::config::Settings;
use crate::error::AppError;
use crate::sql::{quoted, Table};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Open the pool and make one round trip; an unreachable datastore fails here.
pub async fn connect(settings: &Settings) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;
    sqlx::query("SELECT 1").execute(&pool).await?;
    Ok(pool)
}

/// Create the schema (unless `public`) and the developers table if they do not exist.
pub async fn ensure_developers_table(pool: &PgPool, table: &Table) -> Result<(), AppError> {
    if table.schema != "public" {
        sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(&table.schema)))
            .execute(pool)
            .await?;
    }
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            github_url TEXT NOT NULL DEFAULT '',
            stack TEXT[] NOT NULL DEFAULT '{{}}'
        )
        "#,
        table.qualified()
    );
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!(table = %table.qualified(), "developers table ready");
    Ok(())
}
