mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use cardmaker::routes::{self, AppState};
use common::test_pool;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn test_app() -> Router {
    routes::app(AppState {
        pool: test_pool().await,
    })
}

/// 요청 하나를 보내고 (상태 코드, JSON 본문)을 돌려줍니다. 본문이 비어 있으면 `Value::Null`.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn seed(app: &Router) -> (i64, i64, i64, i64) {
    let (_, user) = send(app, Method::POST, "/api/v1/users", Some(json!({ "name": "Alice" }))).await;
    let (_, card_type) = send(
        app,
        Method::POST,
        "/api/v1/card-types",
        Some(json!({ "name": "Location" })),
    )
    .await;
    let (_, card) = send(
        app,
        Method::POST,
        "/api/v1/cards",
        Some(json!({
            "name": "Dark Forest",
            "fluff": "A shadowed grove",
            "effect": null,
            "user_id": user["id"],
            "card_type_id": card_type["id"],
            "in_set": false,
            "set_name": null
        })),
    )
    .await;
    let (_, tag) = send(app, Method::POST, "/api/v1/tags", Some(json!({ "name": "2023" }))).await;

    (
        user["id"].as_i64().unwrap(),
        card_type["id"].as_i64().unwrap(),
        card["id"].as_i64().unwrap(),
        tag["id"].as_i64().unwrap(),
    )
}

#[tokio::test]
async fn health_check_responds_ok() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn dark_forest_scenario_over_http() {
    let app = test_app().await;
    let (user_id, card_type_id, card_id, tag_id) = seed(&app).await;
    assert_eq!((user_id, card_type_id, card_id, tag_id), (1, 1, 1, 1));

    let (status, card) = send(&app, Method::GET, "/api/v1/cards/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        card,
        json!({
            "id": 1,
            "name": "Dark Forest",
            "fluff": "A shadowed grove",
            "effect": null,
            "user_id": 1,
            "card_type_id": 1,
            "in_set": false,
            "set_name": null
        })
    );

    let attach = Some(json!({ "tag_id": 1 }));
    let (status, link) = send(&app, Method::POST, "/api/v1/cards/1/tags", attach.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(link, json!({ "card_id": 1, "tag_id": 1 }));

    let (status, body) = send(&app, Method::POST, "/api/v1/cards/1/tags", attach).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "duplicate");

    let (status, body) = send(&app, Method::GET, "/api/v1/cards/1/tags", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "tags": [{ "id": 1, "name": "2023", "description": null }] })
    );

    let (_, body) = send(&app, Method::GET, "/api/v1/tags/1/cards", None).await;
    assert_eq!(body["cards"][0]["name"], "Dark Forest");
}

#[tokio::test]
async fn card_with_unknown_author_is_a_conflict() {
    let app = test_app().await;
    send(&app, Method::POST, "/api/v1/card-types", Some(json!({ "name": "Location" }))).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/cards",
        Some(json!({ "name": "Orphan", "user_id": 5, "card_type_id": 1, "in_set": false })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "foreign_key_violation");

    let (_, body) = send(&app, Method::GET, "/api/v1/cards", None).await;
    assert_eq!(body, json!({ "cards": [] }));
}

#[tokio::test]
async fn missing_required_field_is_rejected_before_write() {
    let app = test_app().await;
    seed(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/cards",
        Some(json!({ "name": "No flag", "user_id": 1, "card_type_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_error");

    let (_, body) = send(&app, Method::GET, "/api/v1/cards", None).await;
    assert_eq!(body["cards"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = test_app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/tags")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn detach_then_detach_again() {
    let app = test_app().await;
    seed(&app).await;
    send(&app, Method::POST, "/api/v1/cards/1/tags", Some(json!({ "tag_id": 1 }))).await;

    let (status, body) = send(&app, Method::DELETE, "/api/v1/cards/1/tags/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::DELETE, "/api/v1/cards/1/tags/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/api/v1/tags/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, "/api/v1/cards/1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn attaching_to_missing_card_is_not_found() {
    let app = test_app().await;
    seed(&app).await;

    let (status, body) =
        send(&app, Method::POST, "/api/v1/cards/9/tags", Some(json!({ "tag_id": 1 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");

    let (status, body) =
        send(&app, Method::POST, "/api/v1/cards/1/tags", Some(json!({ "tag_id": 9 }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "foreign_key_violation");
}

#[tokio::test]
async fn patch_card_clears_set_name_with_null() {
    let app = test_app().await;
    seed(&app).await;

    let (status, card) = send(
        &app,
        Method::PATCH,
        "/api/v1/cards/1",
        Some(json!({ "in_set": true, "set_name": "Core" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(card["set_name"], "Core");
    assert_eq!(card["fluff"], "A shadowed grove");

    let (_, card) = send(
        &app,
        Method::PATCH,
        "/api/v1/cards/1",
        Some(json!({ "in_set": false, "set_name": null })),
    )
    .await;
    assert_eq!(card["in_set"], false);
    assert_eq!(card["set_name"], Value::Null);

    let (status, _) = send(&app, Method::PATCH, "/api/v1/cards/7", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_with_null_required_field_is_rejected() {
    let app = test_app().await;
    seed(&app).await;

    let (status, body) =
        send(&app, Method::PATCH, "/api/v1/cards/1", Some(json!({ "in_set": null }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_error");

    let (status, body) =
        send(&app, Method::PATCH, "/api/v1/users/1", Some(json!({ "name": null }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_error");

    let (_, card) = send(&app, Method::GET, "/api/v1/cards/1", None).await;
    assert_eq!(card["in_set"], false);
    assert_eq!(card["name"], "Dark Forest");
}

#[tokio::test]
async fn malformed_path_and_query_use_error_body() {
    let app = test_app().await;
    seed(&app).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/cards/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");

    let (status, body) = send(&app, Method::GET, "/api/v1/cards?user_id=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");

    let (status, body) = send(&app, Method::DELETE, "/api/v1/cards/1/tags/x", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn list_cards_filters_by_query_string() {
    let app = test_app().await;
    seed(&app).await;
    send(&app, Method::POST, "/api/v1/users", Some(json!({ "name": "Bob" }))).await;
    send(
        &app,
        Method::POST,
        "/api/v1/cards",
        Some(json!({ "name": "Wand", "user_id": 2, "card_type_id": 1, "in_set": true })),
    )
    .await;
    send(&app, Method::POST, "/api/v1/cards/2/tags", Some(json!({ "tag_id": 1 }))).await;

    let (_, body) = send(&app, Method::GET, "/api/v1/cards?user_id=1", None).await;
    assert_eq!(body["cards"][0]["name"], "Dark Forest");
    assert_eq!(body["cards"].as_array().unwrap().len(), 1);

    let (_, body) = send(&app, Method::GET, "/api/v1/cards?tag_id=1", None).await;
    assert_eq!(body["cards"][0]["name"], "Wand");
    assert_eq!(body["cards"].as_array().unwrap().len(), 1);

    let (_, body) = send(&app, Method::GET, "/api/v1/cards?in_set=true", None).await;
    assert_eq!(body["cards"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_referenced_user_conflicts() {
    let app = test_app().await;
    seed(&app).await;

    let (status, body) = send(&app, Method::DELETE, "/api/v1/users/1", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "foreign_key_violation");

    let (status, _) = send(&app, Method::DELETE, "/api/v1/cards/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::DELETE, "/api/v1/users/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, "/api/v1/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_and_update_card_types_and_tags() {
    let app = test_app().await;
    seed(&app).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/v1/card-types/1",
        Some(json!({ "name": "Magical item" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "Magical item" }));

    let (_, body) = send(&app, Method::GET, "/api/v1/card-types", None).await;
    assert_eq!(body, json!({ "card_types": [{ "id": 1, "name": "Magical item" }] }));

    let (_, body) = send(
        &app,
        Method::PATCH,
        "/api/v1/tags/1",
        Some(json!({ "description": "Year of creation" })),
    )
    .await;
    assert_eq!(body["description"], "Year of creation");

    let (_, body) = send(&app, Method::GET, "/api/v1/users", None).await;
    assert_eq!(body, json!({ "users": [{ "id": 1, "name": "Alice" }] }));

    let (status, _) = send(&app, Method::DELETE, "/api/v1/tags/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, body) = send(&app, Method::GET, "/api/v1/tags", None).await;
    assert_eq!(body, json!({ "tags": [] }));
}
