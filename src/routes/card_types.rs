use crate::{
    db,
    error::AppError,
    models::card_type::{CardType, NewCardType, UpdateCardType},
    routes::{AppJson, AppPath, AppState},
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

pub async fn list_card_types(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let card_types = db::list_card_types(&state.pool).await?;
    Ok(Json(json!({ "card_types": card_types })))
}

pub async fn get_card_type(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<CardType>, AppError> {
    let card_type = db::get_card_type(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(card_type))
}

pub async fn create_card_type(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewCardType>,
) -> Result<(StatusCode, Json<CardType>), AppError> {
    let card_type = db::create_card_type(&state.pool, &req).await?;
    Ok((StatusCode::CREATED, Json(card_type)))
}

pub async fn update_card_type(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<UpdateCardType>,
) -> Result<Json<CardType>, AppError> {
    let card_type = db::update_card_type(&state.pool, id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(card_type))
}

pub async fn delete_card_type(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, AppError> {
    if !db::delete_card_type(&state.pool, id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
