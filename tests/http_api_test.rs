// tests/http_api_test.rs
// End-to-end requests through the axum router

mod test_helpers;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use eleme_fun::api::create_router;
use test_helpers::{create_test_app_state, StubProvider};

async fn test_router(provider: std::sync::Arc<StubProvider>) -> Router {
    let state = create_test_app_state(provider).await;
    create_router(state, "http://localhost:3000")
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let app = test_router(StubProvider::failing()).await;
    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["provider"], "stub");
}

#[tokio::test]
async fn test_joke_backup_over_http() {
    let app = test_router(StubProvider::failing()).await;
    let (status, body) = send(&app, Method::POST, "/api/joke", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "backup");
    assert_eq!(body["notice"], "获取美食段子失败，请稍后重试");
    assert_eq!(body["joke_count"], 0);
}

#[tokio::test]
async fn test_fact_and_egg_over_http() {
    let app = test_router(StubProvider::replying("芒果和腰果是亲戚")).await;

    let (status, body) = send(&app, Method::POST, "/api/fact", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "芒果和腰果是亲戚");
    assert_eq!(body["knowledge_level"], 1);

    let (status, body) = send(&app, Method::POST, "/api/easter-egg", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["click_count"], 1);
    assert_eq!(body["tier"], "warm");
}

#[tokio::test]
async fn test_fact_engagement_over_http() {
    let app = test_router(StubProvider::replying("番茄最初被认为有毒")).await;

    let (status, _) = send(&app, Method::POST, "/api/fact/like", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    send(&app, Method::POST, "/api/fact", None).await;
    let (status, body) = send(&app, Method::POST, "/api/fact/like", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["liked"], true);
    assert_eq!(body["knowledge_level"], 6);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/fact/share",
        Some(json!({ "kind": "copy" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["knowledge_level"], 8);
    assert_eq!(body["rank_label"], "知识新手");
}

#[tokio::test]
async fn test_wheel_spin_over_http() {
    let app = test_router(StubProvider::failing()).await;

    let (status, body) = send(&app, Method::POST, "/api/wheel/spin", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"]["name"], "火锅");
    assert_eq!(body["achievements"], json!(["首次旋转"]));
    assert!(body["share_text"].as_str().unwrap().starts_with("今天吃火锅！"));

    let (status, body) = send(&app, Method::GET, "/api/wheel", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"]["spin_count"], 1);
    assert_eq!(body["categories"].as_array().unwrap().len(), 12);
    assert_eq!(body["achievements"], json!(["首次旋转"]));
}

#[tokio::test]
async fn test_comment_lifecycle_over_http() {
    let app = test_router(StubProvider::failing()).await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/comments",
        Some(json!({ "text": "小龙虾季到了" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["text"], "小龙虾季到了");
    assert_eq!(created["age"], "刚刚");
    let id = created["id"].as_str().unwrap().to_string();

    let (status, liked) = send(&app, Method::POST, &format!("/api/comments/{id}/like"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(liked["likeCount"], 1);
    assert_eq!(liked["likedByViewer"], true);

    let (status, list) = send(&app, Method::GET, "/api/comments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/comments/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::DELETE, &format!("/api/comments/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_overlong_comment_is_rejected() {
    let app = test_router(StubProvider::failing()).await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/comments",
        Some(json!({ "text": "辣".repeat(101) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], true);

    let (_, list) = send(&app, Method::GET, "/api/comments", None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_menu_reaction_over_http() {
    let app = test_router(StubProvider::replying("月光冰淇淋火锅")).await;

    let (status, board) = send(&app, Method::POST, "/api/menu", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(board["items"][0]["name"], "月光冰淇淋火锅");

    let (status, update) = send(
        &app,
        Method::POST,
        "/api/menu/reaction",
        Some(json!({ "name": "月光冰淇淋火锅", "reaction": "like" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(update["reaction"], "like");
    assert_eq!(update["likes"], 1);
}
