mod common;
mod graphql;

pub use common::{common_routes, common_routes_with_ready};
pub use graphql::graphql_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Full application router: health, readiness, version and the GraphQL endpoint.
pub fn app_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(graphql_routes(state, body_limit))
        .layer(TraceLayer::new_for_http())
}
