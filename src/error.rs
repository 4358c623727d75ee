//! Typed errors and GraphQL field-error mapping.

use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing setting: {0}")]
    Missing(&'static str),
    #[error("invalid setting {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
    #[error("graphql schema: {0}")]
    Schema(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("type: argument '{field}' element {index} must be a string, got {found}")]
    Type {
        field: &'static str,
        index: usize,
        found: &'static str,
    },
}

impl AppError {
    /// Stable machine-readable code, carried in `extensions.code` of GraphQL errors.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Storage(sqlx::Error::RowNotFound) => "NOT_FOUND",
            AppError::Storage(_) => "STORAGE",
            AppError::Type { .. } => "TYPE",
        }
    }

    /// Wrap into a GraphQL field error, prefixing the operation that failed.
    pub fn in_context(self, context: &str) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(format!("{}: {}", context, self))
            .extend_with(|_, ext| ext.set("code", code.to_string()))
    }
}
