//! GraphQL endpoint: query string on GET, JSON request on POST.

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GraphQLParams {
    pub query: Option<String>,
}

/// A missing `query` parameter is executed as an empty document and fails to parse.
pub async fn execute_get(State(state): State<AppState>, Query(params): Query<GraphQLParams>) -> Response {
    let request = async_graphql::Request::new(params.query.unwrap_or_default());
    respond(state.schema.execute(request).await)
}

pub async fn execute_post(State(state): State<AppState>, Json(request): Json<async_graphql::Request>) -> Response {
    respond(state.schema.execute(request).await)
}

/// 200 when the response has no errors, otherwise 400.
fn respond(response: async_graphql::Response) -> Response {
    let status = if response.errors.is_empty() {
        StatusCode::OK
    } else {
        tracing::debug!(errors = response.errors.len(), "graphql response carries errors");
        StatusCode::BAD_REQUEST
    };
    (status, Json(response)).into_response()
}
