//! Taskdeck HTTP server binary.
//!
//! Reads configuration from the environment, connects the `PostgreSQL`
//! repository, wires it into the task service, and serves the HTTP surface
//! until the process is terminated.

use std::sync::Arc;

use taskdeck::config::ServiceConfig;
use taskdeck::http;
use taskdeck::task::adapters::postgres::PostgresTaskRepository;
use taskdeck::task::services::TaskService;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    let repository = PostgresTaskRepository::connect(&config.database_url)?;
    let service = TaskService::new(Arc::new(repository));
    let app = http::router(service);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "taskdeck listening");
    axum::serve(listener, app).await?;
    Ok(())
}
