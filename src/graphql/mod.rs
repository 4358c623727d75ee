//! GraphQL surface over the developer repository.

pub mod coerce;
mod resolvers;
mod schema;

pub use coerce::coerce_developer;
pub use schema::{build_schema, DeveloperSchema, DEVELOPER, MUTATION, QUERY};
