// src/api/http/router.rs
// HTTP router composition for REST API endpoints

use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::{
    comments::{add_comment, delete_comment, like_comment, list_comments},
    handlers::{
        easter_egg_handler, fact_handler, fact_like_handler, fact_share_handler, food_handler,
        health_handler, joke_handler, menu_handler, menu_reaction_handler,
    },
    wheel::{spin_handler, wheel_state_handler},
};
use crate::state::AppState;

/// Widget endpoints; nested under /api by `create_router`
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Health
        .route("/health", get(health_handler))

        // Generators
        .route("/joke", post(joke_handler))
        .route("/fact", post(fact_handler))
        .route("/fact/like", post(fact_like_handler))
        .route("/fact/share", post(fact_share_handler))
        .route("/food", post(food_handler))
        .route("/easter-egg", post(easter_egg_handler))

        // Fictional menu
        .route("/menu", post(menu_handler))
        .route("/menu/reaction", post(menu_reaction_handler))

        // Food wheel
        .route("/wheel", get(wheel_state_handler))
        .route("/wheel/spin", post(spin_handler))

        // Comment board
        .route("/comments", get(list_comments).post(add_comment))
        .route("/comments/{id}/like", post(like_comment))
        .route("/comments/{id}", delete(delete_comment))
}

/// Full application router with tracing and CORS for the page origin
pub fn create_router(app_state: Arc<AppState>, cors_origin: &str) -> Router {
    let mut router = Router::new()
        .nest("/api", api_router())
        .layer(TraceLayer::new_for_http());

    match cors_origin.parse::<HeaderValue>() {
        Ok(origin) => {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(origin)
                    .allow_methods([Method::GET, Method::POST, Method::DELETE])
                    .allow_headers([axum::http::header::CONTENT_TYPE]),
            );
        }
        Err(e) => warn!("Ignoring invalid CORS origin {:?}: {}", cors_origin, e),
    }

    router.with_state(app_state)
}
