use crate::{
    db,
    error::AppError,
    models::user::{NewUser, UpdateUser, User},
    routes::{AppJson, AppPath, AppState},
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let users = db::list_users(&state.pool).await?;
    Ok(Json(json!({ "users": users })))
}

pub async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<User>, AppError> {
    let user = db::get_user(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewUser>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = db::create_user(&state.pool, &req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<UpdateUser>,
) -> Result<Json<User>, AppError> {
    let user = db::update_user(&state.pool, id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(user))
}

/// 카드를 가진 작성자는 삭제할 수 없습니다 (409 `foreign_key_violation`).
pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, AppError> {
    if !db::delete_user(&state.pool, id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
