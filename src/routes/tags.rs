//! # 태그 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/v1/tags | `list_tags` | 전체 태그 목록 |
//! | POST | /api/v1/tags | `create_tag` | 새 태그 생성 |
//! | GET | /api/v1/tags/{id} | `get_tag` | 태그 조회 |
//! | PATCH | /api/v1/tags/{id} | `update_tag` | 태그 수정 |
//! | DELETE | /api/v1/tags/{id} | `delete_tag` | 태그 삭제 (연결도 함께 삭제) |
//! | GET | /api/v1/tags/{id}/cards | `get_tag_cards` | 태그가 붙은 카드 목록 |
//!
//! 카드 쪽에서의 연결/해제는 `routes::cards`에 있습니다.

use crate::{
    db,
    error::AppError,
    models::tag::{NewTag, Tag, UpdateTag},
    routes::{AppJson, AppPath, AppState},
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// `GET /api/v1/tags` → `{ "tags": [...] }`
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let tags = db::list_tags(&state.pool).await?;
    Ok(Json(json!({ "tags": tags })))
}

pub async fn get_tag(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Tag>, AppError> {
    let tag = db::get_tag(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(tag))
}

/// `POST /api/v1/tags` + `{ "name": "...", "description": "..." }` → `201 Created`
pub async fn create_tag(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewTag>,
) -> Result<(StatusCode, Json<Tag>), AppError> {
    let tag = db::create_tag(&state.pool, &req).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

pub async fn update_tag(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<UpdateTag>,
) -> Result<Json<Tag>, AppError> {
    let tag = db::update_tag(&state.pool, id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(tag))
}

/// `DELETE /api/v1/tags/{id}` → `204 No Content`
pub async fn delete_tag(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, AppError> {
    let deleted = db::delete_tag(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/v1/tags/{id}/cards` → `{ "cards": [...] }`
pub async fn get_tag_cards(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Value>, AppError> {
    let _ = db::get_tag(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;

    let cards = db::get_tag_cards(&state.pool, id).await?;
    Ok(Json(json!({ "cards": cards })))
}
