//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우터 구성을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `users`: 작성자 CRUD
//! - `card_types`: 카드 종류 CRUD
//! - `cards`: 카드 CRUD, 카드의 태그 조회/연결/해제
//! - `tags`: 태그 CRUD, 태그가 붙은 카드 조회
//! - `health`: 서버 상태 확인 (헬스체크)

pub mod card_types;
pub mod cards;
pub mod health;
pub mod tags;
pub mod users;

use crate::error::AppError;
use axum::{
    extract::{FromRequest, FromRequestParts},
    routing::{delete, get},
    Router,
};
use sqlx::SqlitePool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// `SqlitePool`은 내부적으로 Arc를 사용하므로 clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// `axum::Json`과 같지만 추출 실패를 `AppError`로 돌려주는 JSON 본문 추출자.
///
/// 필수 필드가 빠진 본문은 DB에 닿기 전에 `validation_error`(422)로 거부되고,
/// 다른 에러와 같은 `{ "error": { ... } }` 모양으로 응답합니다.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` 래퍼. 숫자가 아닌 ID는 400 `bad_request` 에러 본문으로 응답합니다.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// `axum::extract::Query` 래퍼. 필터 값 파싱 실패도 같은 에러 본문으로 응답합니다.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// `/api/v1` 아래의 모든 API 라우트.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        // 작성자(User)
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        // 카드 종류(CardType)
        .route(
            "/card-types",
            get(card_types::list_card_types).post(card_types::create_card_type),
        )
        .route(
            "/card-types/{id}",
            get(card_types::get_card_type)
                .patch(card_types::update_card_type)
                .delete(card_types::delete_card_type),
        )
        // 카드(Card)
        .route("/cards", get(cards::list_cards).post(cards::create_card))
        .route(
            "/cards/{id}",
            get(cards::get_card)
                .patch(cards::update_card)
                .delete(cards::delete_card),
        )
        // 카드-태그 관계
        .route(
            "/cards/{id}/tags",
            get(cards::get_card_tags).post(cards::add_tag_to_card),
        )
        .route(
            "/cards/{id}/tags/{tag_id}",
            delete(cards::remove_tag_from_card),
        )
        // 태그(Tag)
        .route("/tags", get(tags::list_tags).post(tags::create_tag))
        .route(
            "/tags/{id}",
            get(tags::get_tag)
                .patch(tags::update_tag)
                .delete(tags::delete_tag),
        )
        .route("/tags/{id}/cards", get(tags::get_tag_cards))
        .route("/health", get(health::health_check))
        .with_state(state)
}

/// 서버 전체 라우터: API를 `/api/v1`에 중첩하고 CORS와 요청 로깅 미들웨어를 붙입니다.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/v1", api_router(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
