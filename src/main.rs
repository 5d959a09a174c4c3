mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // `.env` is optional; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::PortalConfig::from_env().expect("invalid portal configuration");
    let port = config.port;
    tracing::info!(backend = %config.backend_url, static_dir = %config.static_dir.display(), "portal configured");

    let state = state::AppState::new(config).expect("backend client init failed");
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "portal listening");
    axum::serve(listener, app).await.expect("server failed");
}
