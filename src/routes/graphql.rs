use crate::handlers::graphql::{execute_get, execute_post};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::limit::RequestBodyLimitLayer;

pub fn graphql_routes(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .route("/graphql", get(execute_get).post(execute_post))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .with_state(state)
}
