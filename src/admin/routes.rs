// admin/routes.rs — Admin API route handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::camera::CameraPose;
use crate::capture::js;
use crate::panel::PanelCommand;
use crate::scene::SceneState;
use crate::AppContext;

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn bad_gateway(e: impl std::fmt::Display) -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({ "error": e.to_string() })),
    )
}

fn internal(e: impl std::fmt::Display) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.to_string() })),
    )
}

pub async fn health(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    let uptime = ctx.started_at.elapsed().as_secs();
    Json(json!({
        "status": "ok",
        "uptime_secs": uptime,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ─── Scene config pass-through ────────────────────────────────────────────────

pub async fn get_config(State(ctx): State<Arc<AppContext>>) -> ApiResult {
    let value = ctx.evaluate(js::read_state()).await.map_err(bad_gateway)?;
    Ok(Json(value))
}

pub async fn post_config(
    State(ctx): State<Arc<AppContext>>,
    Json(state): Json<SceneState>,
) -> ApiResult {
    let expr = js::apply_state(&state).map_err(internal)?;
    ctx.evaluate(&expr).await.map_err(bad_gateway)?;
    Ok(Json(json!({ "applied": true })))
}

// ─── Camera pass-through ──────────────────────────────────────────────────────

pub async fn get_camera(State(ctx): State<Arc<AppContext>>) -> ApiResult {
    let value = ctx.evaluate(js::read_camera()).await.map_err(bad_gateway)?;
    Ok(Json(value))
}

pub async fn post_camera(
    State(ctx): State<Arc<AppContext>>,
    Json(pose): Json<CameraPose>,
) -> ApiResult {
    ctx.evaluate(&js::set_camera(&pose))
        .await
        .map_err(bad_gateway)?;
    Ok(Json(json!({ "applied": true })))
}

// ─── Panel commands ───────────────────────────────────────────────────────────

pub async fn post_panel(
    State(ctx): State<Arc<AppContext>>,
    Json(commands): Json<Vec<PanelCommand>>,
) -> ApiResult {
    for command in &commands {
        ctx.evaluate(&command.to_expression())
            .await
            .map_err(bad_gateway)?;
    }
    Ok(Json(json!({ "applied": commands.len() })))
}

// ─── Sequence metadata ────────────────────────────────────────────────────────

pub async fn get_sequence(State(ctx): State<Arc<AppContext>>) -> ApiResult {
    match ctx.store.load().await.map_err(internal)? {
        Some(meta) => Ok(Json(serde_json::to_value(&meta).map_err(internal)?)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "no sequence recorded yet" })),
        )),
    }
}

pub async fn post_sequence(
    State(ctx): State<Arc<AppContext>>,
    Json(meta): Json<crate::sequence::SequenceMeta>,
) -> ApiResult {
    ctx.store.save(&meta).await.map_err(internal)?;
    Ok(Json(json!({ "saved": true })))
}

#[derive(Deserialize)]
pub struct InitSequenceRequest {
    pub name: String,
    pub total_frames: u32,
}

pub async fn init_sequence(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<InitSequenceRequest>,
) -> ApiResult {
    let meta = ctx
        .store
        .init(&body.name, body.total_frames)
        .await
        .map_err(internal)?;
    Ok(Json(serde_json::to_value(&meta).map_err(internal)?))
}

pub async fn download_sequence(
    State(ctx): State<Arc<AppContext>>,
) -> Result<([(header::HeaderName, &'static str); 2], String), (StatusCode, Json<Value>)> {
    let path = ctx.store.meta_path();
    let contents = tokio::fs::read_to_string(&path).await.map_err(|_| {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "no sequence recorded yet" })),
        )
    })?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"sequence.json\"",
            ),
        ],
        contents,
    ))
}
