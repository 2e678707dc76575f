// src/api/http/comments.rs
// Comment board endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::comments::{relative_time, Comment};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NewCommentRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct CommentView {
    #[serde(flatten)]
    pub comment: Comment,
    pub age: String,
}

impl CommentView {
    fn from_comment(comment: Comment, now: chrono::DateTime<Utc>) -> Self {
        let age = relative_time(comment.created_at, now);
        Self { comment, age }
    }
}

pub async fn list_comments(State(app_state): State<Arc<AppState>>) -> Json<Vec<CommentView>> {
    let now = Utc::now();
    let views = app_state
        .comments
        .list()
        .await
        .into_iter()
        .map(|c| CommentView::from_comment(c, now))
        .collect();
    Json(views)
}

pub async fn add_comment(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<NewCommentRequest>,
) -> ApiResult<(StatusCode, Json<CommentView>)> {
    let comment = app_state.comments.add(&request.text).await?;
    Ok((
        StatusCode::CREATED,
        Json(CommentView::from_comment(comment, Utc::now())),
    ))
}

pub async fn like_comment(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<CommentView>> {
    let comment = app_state.comments.toggle_like(&id).await?;
    Ok(Json(CommentView::from_comment(comment, Utc::now())))
}

pub async fn delete_comment(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    app_state.comments.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
