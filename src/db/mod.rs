//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//!
//! 각 하위 모듈 (엔티티마다 하나):
//! - `users`: 작성자 CRUD
//! - `card_types`: 카드 종류 CRUD
//! - `cards`: 카드 CRUD 및 필터 조회
//! - `tags`: 태그 CRUD 및 카드-태그 연결/해제, 양방향 조회
//!
//! 제약조건(NOT NULL, 외래키, 복합키)은 `migrations/`의 DDL이 강제합니다.
//! 이 계층은 검증을 중복하지 않고, 저장소가 보고한 위반을 `AppError`로 전파합니다.

pub mod card_types;
pub mod cards;
pub mod tags;
pub mod users;

pub use card_types::*;
pub use cards::*;
pub use tags::*;
pub use users::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// SQLite 연결 풀을 생성합니다.
///
/// 외래키 검사는 연결마다 켜야 하는 설정이므로 연결 옵션에서 강제합니다.
pub async fn connect(
    options: SqliteConnectOptions,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options.foreign_keys(true))
        .await
}

/// `./migrations` 폴더의 SQL 파일 중 아직 적용되지 않은 것을 순서대로 실행합니다.
///
/// `sqlx::migrate!`는 컴파일 타임에 마이그레이션 파일을 바이너리에 포함시킵니다.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
