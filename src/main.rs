//! Server binary: reads settings, connects to PostgreSQL, builds the schema and serves `/graphql`.

use devgraph::{app_router, build_schema, connect, ensure_developers_table, AppState, PgDeveloperRepository, Settings};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("devgraph=info".parse()?))
        .init();

    let settings = Settings::from_env()?;
    let pool = connect(&settings).await?;
    ensure_developers_table(&pool, &settings.table).await?;

    let repository = Arc::new(PgDeveloperRepository::new(pool, settings.table.clone()));
    let schema = build_schema(repository.clone())?;
    let state = AppState::new(schema, repository);
    let app = app_router(state, settings.body_limit);

    let listener = TcpListener::bind(settings.listen_addr).await?;
    tracing::info!("server running at http://{}/graphql", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
