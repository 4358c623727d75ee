//! Shared application state for all routes.

use crate::graphql::DeveloperSchema;
use crate::service::DeveloperRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; cloning shares the same schema.
    pub schema: DeveloperSchema,
    pub repository: Arc<dyn DeveloperRepository>,
}

impl AppState {
    pub fn new(schema: DeveloperSchema, repository: Arc<dyn DeveloperRepository>) -> Self {
        AppState { schema, repository }
    }
}
