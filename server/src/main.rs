#![recursion_limit = "256"]

mod backend;
mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ProxyConfig::from_env();
    let backend = backend::HttpBackend::new(config.backend_url.clone(), config.timeouts)
        .expect("backend client init failed");
    tracing::info!(backend_url = backend.base_url(), "bill backend configured");

    let state = state::AppState::new(Arc::new(backend));

    // Fall back to the bare proxy API if the Leptos site is not configured.
    let app = match routes::leptos_app(state.clone(), config.max_upload_bytes) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos app unavailable, serving proxy API only");
            routes::api_routes(state, config.max_upload_bytes)
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "billscan listening");
    axum::serve(listener, app).await.expect("server failed");
}
