//! Static host for the built frontend.
//!
//! Serves the trunk output directory. Any path that is not a file in
//! the bundle gets `index.html`, so `/submit` and unknown routes load
//! the single-page app, which then picks the page client-side.
//!
//! # Endpoints
//!
//! | Method | Path       | Description                           |
//! |--------|------------|---------------------------------------|
//! | GET    | `/health`  | Health check                          |
//! | GET    | `/*`       | Bundle file, or `index.html` fallback |

use axum::{
    http::{header, Method},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::path::Path;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::config::ServeConfig;
use crate::error::{ServerError, ServerResult};

/// Build the router for a bundle directory.
pub fn router(dist_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let index = dist_dir.join("index.html");
    let bundle = ServeDir::new(dist_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(health))
        .fallback_service(bundle)
        .layer(cors)
}

/// Start the static host on `0.0.0.0:<port>`.
pub async fn start_server(config: &ServeConfig) -> ServerResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    println!("🚀 Portal running on http://localhost:{}", config.port);
    println!("   GET /        - Landing page");
    println!("   GET /submit  - Problem submission form");
    println!("   GET /health  - Health check");

    serve(listener, &config.dist_dir).await
}

/// Serve the bundle on an already bound listener.
pub async fn serve(listener: TcpListener, dist_dir: &Path) -> ServerResult<()> {
    let index = dist_dir.join("index.html");
    if !index.is_file() {
        return Err(ServerError::MissingIndex(dist_dir.to_path_buf()));
    }

    info!("Serving bundle from {}", dist_dir.display());
    axum::serve(listener, router(dist_dir)).await?;
    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "aiclub-portal",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
