use std::net::SocketAddr;

use axum::{
    debug_handler,
    http::{Method, Uri},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::auth::AuthProvider;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    // Not consulted by the placeholder handler; future routes get it from
    // here.
    pub auth: AuthProvider,
}

pub async fn run_server(state: AppState) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], state.config.port()));
    let port = state.config.port();
    let environment = state.config.node_env();

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on http://localhost:{}", port);
    tracing::info!("Environment: {}", environment);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

pub fn create_router(state: AppState) -> Router {
    // No routes yet: every path and method lands on the echo handler.
    Router::new()
        .fallback(echo)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Placeholder handler describing the request it received.
#[debug_handler]
async fn echo(method: Method, uri: Uri) -> Json<Value> {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    Json(json!({
        "message": "Hello from oRPC backend!",
        "path": path,
        "method": method.as_str(),
    }))
}
