// src/api/http/handlers.rs
// Generator widget endpoints

use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::generation::Generation;
use crate::menu::{MenuBoard, Reaction, ReactionUpdate};
use crate::state::AppState;
use crate::widgets::{EggReveal, FactReveal, FactStanding, JokeReveal, ShareKind};

/// Health check handler
pub async fn health_handler(State(app_state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "provider": app_state.gateway.provider_name(),
        "timestamp": Utc::now().to_rfc3339()
    }))
}

pub async fn joke_handler(State(app_state): State<Arc<AppState>>) -> ApiResult<Json<JokeReveal>> {
    Ok(Json(app_state.jokes.next().await?))
}

pub async fn fact_handler(State(app_state): State<Arc<AppState>>) -> ApiResult<Json<FactReveal>> {
    Ok(Json(app_state.facts.next().await?))
}

pub async fn fact_like_handler(
    State(app_state): State<Arc<AppState>>,
) -> ApiResult<Json<FactStanding>> {
    Ok(Json(app_state.facts.like().await?))
}

#[derive(Debug, Deserialize)]
pub struct ShareRequest {
    pub kind: ShareKind,
}

pub async fn fact_share_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<ShareRequest>,
) -> ApiResult<Json<FactStanding>> {
    Ok(Json(app_state.facts.shared(request.kind).await?))
}

pub async fn food_handler(State(app_state): State<Arc<AppState>>) -> ApiResult<Json<Generation>> {
    Ok(Json(app_state.food.recommend().await?))
}

pub async fn easter_egg_handler(
    State(app_state): State<Arc<AppState>>,
) -> ApiResult<Json<EggReveal>> {
    Ok(Json(app_state.easter_egg.press().await?))
}

pub async fn menu_handler(State(app_state): State<Arc<AppState>>) -> ApiResult<Json<MenuBoard>> {
    Ok(Json(app_state.menu.generate().await?))
}

#[derive(Debug, Deserialize)]
pub struct ReactionRequest {
    pub name: String,
    pub reaction: Reaction,
}

pub async fn menu_reaction_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<ReactionRequest>,
) -> ApiResult<Json<ReactionUpdate>> {
    let update = app_state
        .menu
        .react(&request.name, request.reaction)
        .await?;
    Ok(Json(update))
}
