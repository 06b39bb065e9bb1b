//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//!
//! 저장소(SQLite)가 보고하는 제약조건 위반은 세 가지로 분류됩니다:
//! - 검증 에러(`Validation`): 필수 필드 누락, 잘못된 타입 — 쓰기 전에 거부
//! - 참조 무결성 에러(`ForeignKey`): 존재하지 않는 행을 가리키는 외래키
//! - 유일성 에러(`Duplicate`): 연결 테이블의 복합키 중복
//!
//! 분류 외의 처리는 하지 않습니다. 에러는 그대로 호출자에게 전파되고,
//! `IntoResponse` 구현이 HTTP 응답으로 변환합니다.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 각 variant는 적절한 HTTP 상태 코드와 메시지로 변환됩니다.
/// 핸들러에서 `Result<T, AppError>`를 반환하면 Axum이 `IntoResponse`를 호출합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 리소스를 찾을 수 없음 (HTTP 404)
    #[error("Resource not found")]
    NotFound,

    /// 잘못된 요청 — 파싱할 수 없는 본문 등 (HTTP 400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 필수 필드 누락/타입 불일치 (HTTP 422)
    #[error("Validation error: {0}")]
    Validation(String),

    /// 외래키가 존재하지 않는 행을 가리키거나, 참조 중인 행을 삭제하려 함 (HTTP 409)
    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    /// 이미 존재하는 (card_id, tag_id) 쌍 (HTTP 409)
    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),

    /// 분류되지 않은 데이터베이스 오류 (HTTP 500)
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

/// `sqlx::Error` → `AppError` 변환.
///
/// `#[from]` 대신 직접 구현하여 제약조건 위반을 종류별로 나눕니다.
/// DB 함수에서 `?`를 쓰면 이 변환이 자동으로 적용됩니다.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let sqlx::Error::Database(db_err) = &err else {
            return AppError::Database(err);
        };

        let kind = db_err.kind();
        let message = db_err.message().to_string();
        match kind {
            ErrorKind::UniqueViolation => AppError::Duplicate(message),
            ErrorKind::ForeignKeyViolation => AppError::ForeignKey(message),
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                AppError::Validation(message)
            }
            // SQLite가 확장 결과 코드 없이 보고한 경우 메시지로 판별
            _ if message.starts_with("UNIQUE constraint failed") => AppError::Duplicate(message),
            _ if message.starts_with("FOREIGN KEY constraint failed") => {
                AppError::ForeignKey(message)
            }
            _ if message.starts_with("NOT NULL constraint failed") => {
                AppError::Validation(message)
            }
            _ => AppError::Database(err),
        }
    }
}

/// JSON 본문 추출 실패 → `AppError`.
///
/// 필드 누락/타입 불일치(`JsonDataError`)는 검증 에러,
/// 그 외(문법 오류, Content-Type 누락)는 잘못된 요청으로 처리합니다.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => AppError::Validation(e.body_text()),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

/// 경로 변수 파싱 실패 (예: `/cards/abc`) → 잘못된 요청.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// 쿼리스트링 파싱 실패 (예: `?user_id=abc`) → 잘못된 요청.
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::ForeignKey(_) => (StatusCode::CONFLICT, "foreign_key_violation"),
            AppError::Duplicate(_) => (StatusCode::CONFLICT, "duplicate"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
        }
    }
}

impl IntoResponse for AppError {
    /// 내부 에러(Database, Internal)는 실제 내용을 로그에만 기록하고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다.
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = match self {
            AppError::NotFound => AppError::NotFound.to_string(),
            AppError::BadRequest(msg)
            | AppError::Validation(msg)
            | AppError::ForeignKey(msg)
            | AppError::Duplicate(msg) => msg,
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "A database error occurred".to_string()
            }
        };

        // { "error": { "code": "not_found", "message": "Resource not found" } }
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
