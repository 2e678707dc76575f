// src/api/http/wheel.rs

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::wheel::{SpinReport, WheelState, FOOD_CATEGORIES, FoodCategory, SpinOutcome};

#[derive(Debug, Serialize)]
pub struct WheelSnapshot {
    pub state: WheelState,
    pub categories: &'static [FoodCategory],
    pub achievements: Vec<&'static str>,
}

pub async fn wheel_state_handler(State(app_state): State<Arc<AppState>>) -> Json<WheelSnapshot> {
    let achievements = app_state
        .wheel
        .unlocked_achievements()
        .await
        .into_iter()
        .map(|a| a.label())
        .collect();

    Json(WheelSnapshot {
        state: app_state.wheel.snapshot().await,
        categories: &FOOD_CATEGORIES,
        achievements,
    })
}

/// Blocks for the spin animation, then returns the settled outcome
pub async fn spin_handler(State(app_state): State<Arc<AppState>>) -> ApiResult<Json<SpinReport>> {
    match app_state.wheel.spin().await {
        SpinOutcome::Completed(report) => Ok(Json(*report)),
        SpinOutcome::Ignored => Err(ApiError::conflict("wheel is already spinning")),
    }
}
