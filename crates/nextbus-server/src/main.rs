use anyhow::{Context, Result};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    nextbus_core::init()?;

    let config = nextbus_core::Config::from_env()?;
    if config.api_key.is_none() {
        // Not fatal: arrivals/stops report the missing credential per
        // request, and weather needs no key.
        tracing::warn!("API_KEY not set; transit endpoints will return errors");
    }

    let port = config.port;
    let state = nextbus_server::AppState::new(config)?;

    let app = nextbus_server::router(state)
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http());

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Next Bus server running on http://localhost:{}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
