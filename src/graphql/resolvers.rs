//! Field resolvers: coerce arguments, call the repository, wrap failures with context.

use super::coerce::coerce_developer;
use crate::model::Developer;
use crate::service::DeveloperRepository;
use async_graphql::dynamic::{FieldFuture, FieldValue, ResolverContext};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Arguments as a JSON object, dropping any that do not convert.
fn raw_args(ctx: &ResolverContext<'_>) -> Map<String, Value> {
    ctx.args
        .iter()
        .filter_map(|(name, value)| {
            value
                .as_value()
                .clone()
                .into_json()
                .ok()
                .map(|v| (name.to_string(), v))
        })
        .collect()
}

fn developer_value<'a>(developer: Developer) -> FieldValue<'a> {
    FieldValue::owned_any(developer)
}

pub(crate) fn list_developers(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        let repository = ctx.data::<Arc<dyn DeveloperRepository>>()?;
        let developers = repository
            .get_all()
            .await
            .map_err(|e| e.in_context("getting all developers"))?;
        Ok(Some(FieldValue::list(developers.into_iter().map(developer_value))))
    })
}

/// A missing `id` resolves to null without a lookup; `id: 0` is looked up like any other.
pub(crate) fn developer_details(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        let repository = ctx.data::<Arc<dyn DeveloperRepository>>()?;
        let input = coerce_developer(&raw_args(&ctx)).map_err(|e| e.in_context("getting developer"))?;
        let Some(id) = input.id else {
            return Ok(None::<FieldValue>);
        };
        let developer = repository
            .get_by_id(id)
            .await
            .map_err(|e| e.in_context(&format!("getting developer ID {}", id)))?;
        Ok(Some(developer_value(developer)))
    })
}

pub(crate) fn create_developer(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        let repository = ctx.data::<Arc<dyn DeveloperRepository>>()?;
        let input = coerce_developer(&raw_args(&ctx)).map_err(|e| e.in_context("creating new developer"))?;
        let developer = repository
            .create(input)
            .await
            .map_err(|e| e.in_context("creating new developer"))?;
        Ok(Some(developer_value(developer)))
    })
}

pub(crate) fn update_developer(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        let repository = ctx.data::<Arc<dyn DeveloperRepository>>()?;
        let input = coerce_developer(&raw_args(&ctx)).map_err(|e| e.in_context("updating developer"))?;
        let developer = repository
            .update(input)
            .await
            .map_err(|e| e.in_context("updating developer"))?;
        Ok(Some(developer_value(developer)))
    })
}
