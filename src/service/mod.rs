//! Storage gateway: the repository trait, its Postgres implementation, and input rules.

mod repository;
mod validation;
pub use repository::{DeveloperRepository, PgDeveloperRepository};
pub use validation::{validate_create, validate_update};
