// admin/mod.rs — Local HTTP admin API.
//
// Axum server on port 4310 (loopback only by default). Bridges REST calls
// to the live DevTools session so the page can be inspected and driven
// while a capture is being set up.
//
// Endpoints:
//   GET  /api/health
//   GET  /api/config              read scene state back from the page
//   POST /api/config              inject a scene state into the page
//   GET  /api/camera
//   POST /api/camera
//   POST /api/panel               apply panel commands
//   GET  /api/sequence            sequence.json metadata
//   POST /api/sequence
//   POST /api/sequence/init
//   GET  /api/sequence/download

pub mod routes;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::AppContext;

pub async fn start_admin_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.admin_port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("admin API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/api/health", get(routes::health))
        .route(
            "/api/config",
            get(routes::get_config).post(routes::post_config),
        )
        .route(
            "/api/camera",
            get(routes::get_camera).post(routes::post_camera),
        )
        .route("/api/panel", post(routes::post_panel))
        .route(
            "/api/sequence",
            get(routes::get_sequence).post(routes::post_sequence),
        )
        .route("/api/sequence/init", post(routes::init_sequence))
        .route("/api/sequence/download", get(routes::download_sequence))
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
