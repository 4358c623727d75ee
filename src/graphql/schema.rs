//! Schema declaration: the `Developer` object, two queries and two mutations.
//! Built once at startup and shared read-only afterwards.

use super::resolvers::{create_developer, developer_details, list_developers, update_developer};
use crate::error::ConfigError;
use crate::model::Developer;
use crate::service::DeveloperRepository;
use async_graphql::dynamic::{Field, FieldFuture, InputValue, Object, Schema, TypeRef};
use async_graphql::Value;
use std::sync::Arc;

pub const DEVELOPER: &str = "Developer";
pub const QUERY: &str = "Query";
pub const MUTATION: &str = "Mutation";

pub type DeveloperSchema = Schema;

fn developer_field(name: &'static str, ty: TypeRef, read: fn(&Developer) -> Value) -> Field {
    Field::new(name, ty, move |ctx| {
        FieldFuture::new(async move {
            let developer = ctx.parent_value.try_downcast_ref::<Developer>()?;
            Ok(Some(read(developer)))
        })
    })
}

/// GraphQL `Int` is 32-bit; a BIGSERIAL id past `i32::MAX` is a field error, not a wrapped number.
fn developer_id_field() -> Field {
    Field::new("id", TypeRef::named(TypeRef::INT), |ctx| {
        FieldFuture::new(async move {
            let developer = ctx.parent_value.try_downcast_ref::<Developer>()?;
            let id = i32::try_from(developer.id)
                .map_err(|_| async_graphql::Error::new(format!("developer id {} exceeds the Int range", developer.id)))?;
            Ok(Some(Value::from(id)))
        })
    })
}

fn developer_type() -> Object {
    Object::new(DEVELOPER)
        .field(developer_id_field())
        .field(developer_field("first_name", TypeRef::named(TypeRef::STRING), |d| {
            Value::from(d.first_name.clone())
        }))
        .field(developer_field("last_name", TypeRef::named(TypeRef::STRING), |d| {
            Value::from(d.last_name.clone())
        }))
        .field(developer_field("github_url", TypeRef::named(TypeRef::STRING), |d| {
            Value::from(d.github_url.clone())
        }))
        .field(developer_field("stack", TypeRef::named_list(TypeRef::STRING), |d| {
            Value::List(d.stack.iter().cloned().map(Value::from).collect())
        }))
}

/// Optional editable-field arguments shared by create and update.
fn with_developer_args(field: Field) -> Field {
    field
        .argument(InputValue::new("first_name", TypeRef::named(TypeRef::STRING)))
        .argument(InputValue::new("last_name", TypeRef::named(TypeRef::STRING)))
        .argument(InputValue::new("github_url", TypeRef::named(TypeRef::STRING)))
        .argument(InputValue::new("stack", TypeRef::named_list(TypeRef::STRING)))
}

pub fn build_schema(repository: Arc<dyn DeveloperRepository>) -> Result<DeveloperSchema, ConfigError> {
    // `id` and `name` on `developers` are declared but not applied; the list is unfiltered.
    let query = Object::new(QUERY)
        .field(
            Field::new("developers", TypeRef::named_list(DEVELOPER), list_developers)
                .description("Get a list of developers")
                .argument(InputValue::new("id", TypeRef::named(TypeRef::INT)))
                .argument(InputValue::new("name", TypeRef::named(TypeRef::STRING))),
        )
        .field(
            Field::new("developer", TypeRef::named(DEVELOPER), developer_details)
                .description("Get a single developer")
                .argument(InputValue::new("id", TypeRef::named(TypeRef::INT))),
        );

    let mutation = Object::new(MUTATION)
        .field(with_developer_args(
            Field::new("create", TypeRef::named(DEVELOPER), create_developer).description("Create new developer"),
        ))
        .field(with_developer_args(
            Field::new("update", TypeRef::named(DEVELOPER), update_developer)
                .description("Update a developer")
                .argument(InputValue::new("id", TypeRef::named(TypeRef::INT))),
        ));

    Schema::build(QUERY, Some(MUTATION), None)
        .register(developer_type())
        .register(query)
        .register(mutation)
        .data(repository)
        .finish()
        .map_err(|e| ConfigError::Schema(e.to_string()))
}
