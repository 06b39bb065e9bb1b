use cardmaker::db;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// 실제 마이그레이션이 적용된 인메모리 SQLite 풀.
///
/// 인메모리 DB는 연결마다 따로 생기므로 연결 하나만 두고 닫히지 않게 합니다.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("in-memory url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("connect in-memory sqlite");

    db::migrate(&pool).await.expect("run migrations");
    pool
}
