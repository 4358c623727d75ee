//! Developer persistence against PostgreSQL.

use crate::error::AppError;
use crate::model::{Developer, DeveloperInput};
use crate::service::validate_create;
use crate::sql::{insert, select_all, select_by_id, update, QueryBuf, Table};
use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

/// Storage gateway for developer records. Implementations hold only a pooled
/// handle and are shared across concurrent requests.
#[async_trait]
pub trait DeveloperRepository: Send + Sync {
    /// All rows ordered by id; empty when the table is empty.
    async fn get_all(&self) -> Result<Vec<Developer>, AppError>;

    /// The row with this id, or `AppError::NotFound`.
    async fn get_by_id(&self, id: i64) -> Result<Developer, AppError>;

    /// Insert a new row and return it with its assigned id.
    async fn create(&self, input: DeveloperInput) -> Result<Developer, AppError>;

    /// Partial update of the present fields; returns the row as written.
    async fn update(&self, input: DeveloperInput) -> Result<Developer, AppError>;

    /// Round trip to the datastore, for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct PgDeveloperRepository {
    pool: PgPool,
    table: Table,
}

impl PgDeveloperRepository {
    pub fn new(pool: PgPool, table: Table) -> Self {
        PgDeveloperRepository { pool, table }
    }

    async fn query_many(&self, q: QueryBuf) -> Result<Vec<Developer>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_all(sqlx::query_as(&q.sql), &q).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn query_optional(&self, q: QueryBuf) -> Result<Option<Developer>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_all(sqlx::query_as(&q.sql), &q).fetch_optional(&self.pool).await?;
        Ok(row)
    }

    /// Statement with RETURNING; a missing row surfaces as `sqlx::Error::RowNotFound`.
    async fn execute_returning_one(&self, q: QueryBuf) -> Result<Developer, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_all(sqlx::query_as(&q.sql), &q).fetch_one(&self.pool).await?;
        Ok(row)
    }
}

fn bind_all<'q>(
    mut query: QueryAs<'q, Postgres, Developer, PgArguments>,
    q: &QueryBuf,
) -> QueryAs<'q, Postgres, Developer, PgArguments> {
    for p in &q.params {
        query = query.bind(p.clone());
    }
    query
}

#[async_trait]
impl DeveloperRepository for PgDeveloperRepository {
    async fn get_all(&self) -> Result<Vec<Developer>, AppError> {
        self.query_many(select_all(&self.table)).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Developer, AppError> {
        self.query_optional(select_by_id(&self.table, id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("developer {}", id)))
    }

    async fn create(&self, input: DeveloperInput) -> Result<Developer, AppError> {
        validate_create(&input)?;
        let developer = self.execute_returning_one(insert(&self.table, &input)).await?;
        tracing::info!(id = developer.id, "developer created");
        Ok(developer)
    }

    async fn update(&self, input: DeveloperInput) -> Result<Developer, AppError> {
        let q = update(&self.table, &input)?;
        let developer = self.execute_returning_one(q).await?;
        tracing::info!(id = developer.id, "developer updated");
        Ok(developer)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
