//! devgraph: GraphQL API over a PostgreSQL developers table.

pub mod config;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use graphql::{build_schema, DeveloperSchema};
pub use model::{Developer, DeveloperInput};
pub use routes::{app_router, common_routes, common_routes_with_ready, graphql_routes};
pub use service::{DeveloperRepository, PgDeveloperRepository};
pub use state::AppState;
pub use store::{connect, ensure_developers_table};
