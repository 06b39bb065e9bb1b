//! # 카드 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/v1/cards | `list_cards` | 카드 목록 (쿼리스트링 필터) |
//! | POST | /api/v1/cards | `create_card` | 새 카드 생성 |
//! | GET | /api/v1/cards/{id} | `get_card` | 카드 조회 |
//! | PATCH | /api/v1/cards/{id} | `update_card` | 카드 수정 |
//! | DELETE | /api/v1/cards/{id} | `delete_card` | 카드 삭제 |
//! | GET | /api/v1/cards/{id}/tags | `get_card_tags` | 카드의 태그 목록 |
//! | POST | /api/v1/cards/{id}/tags | `add_tag_to_card` | 카드에 태그 연결 |
//! | DELETE | /api/v1/cards/{id}/tags/{tag_id} | `remove_tag_from_card` | 태그 연결 해제 |

use crate::{
    db,
    error::AppError,
    models::card::{Card, CardFilter, NewCard, UpdateCard},
    models::tag::{AddTagToCardRequest, CardTagRelationship},
    routes::{AppJson, AppPath, AppQuery, AppState},
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// `GET /cards?user_id=&card_type_id=&tag_id=&in_set=` → `{ "cards": [...] }`
pub async fn list_cards(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<CardFilter>,
) -> Result<Json<Value>, AppError> {
    let cards = db::list_cards(&state.pool, &filter).await?;
    Ok(Json(json!({ "cards": cards })))
}

pub async fn get_card(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Card>, AppError> {
    let card = db::get_card(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(card))
}

/// `POST /cards` → `201 Created`
///
/// 작성자나 종류가 존재하지 않으면 409 `foreign_key_violation`.
pub async fn create_card(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewCard>,
) -> Result<(StatusCode, Json<Card>), AppError> {
    let card = db::create_card(&state.pool, &req).await?;
    Ok((StatusCode::CREATED, Json(card)))
}

/// `PATCH /cards/{id}`
///
/// 선택 필드에 `null`을 보내면 값을 지웁니다. 예: `{ "in_set": false, "set_name": null }`
pub async fn update_card(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<UpdateCard>,
) -> Result<Json<Card>, AppError> {
    let card = db::update_card(&state.pool, id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(card))
}

pub async fn delete_card(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, AppError> {
    if !db::delete_card(&state.pool, id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /cards/{id}/tags` → `{ "tags": [...] }`
///
/// 카드가 없으면 빈 목록 대신 404를 반환합니다.
pub async fn get_card_tags(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Value>, AppError> {
    let _ = db::get_card(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;

    let tags = db::get_card_tags(&state.pool, id).await?;
    Ok(Json(json!({ "tags": tags })))
}

/// `POST /cards/{id}/tags` + `{ "tag_id": 1 }` → `201 Created`
///
/// 경로의 카드가 없으면 404. 태그 존재 여부와 중복 연결은 저장소 제약이 판단합니다
/// (각각 409 `foreign_key_violation`, 409 `duplicate`).
pub async fn add_tag_to_card(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<AddTagToCardRequest>,
) -> Result<(StatusCode, Json<CardTagRelationship>), AppError> {
    let _ = db::get_card(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;

    let link = db::add_tag_to_card(&state.pool, id, req.tag_id).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// `DELETE /cards/{id}/tags/{tag_id}` → `204 No Content`
///
/// 경로 변수가 2개이므로 튜플로 추출합니다 (URL에 나타나는 순서).
pub async fn remove_tag_from_card(
    State(state): State<AppState>,
    AppPath((card_id, tag_id)): AppPath<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    if !db::remove_tag_from_card(&state.pool, card_id, tag_id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
