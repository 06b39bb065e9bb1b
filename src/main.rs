//! # Cardmaker 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 데이터베이스 연결 풀 생성 (파일과 디렉토리가 없으면 생성)
//! 4. 데이터베이스 마이그레이션 실행
//! 5. API 라우터 설정 및 HTTP 서버 시작

use anyhow::Result;
use cardmaker::{
    config::Config,
    db,
    routes::{self, AppState},
};
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // RUST_LOG가 없으면 cardmaker, tower_http, axum 모듈을 debug 레벨로 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardmaker=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Starting Cardmaker server on {}:{}", config.host, config.port);

    // 데이터베이스 파일이 놓일 디렉토리를 먼저 만듭니다 (예: sqlite:data/cardmaker.db → data/).
    // 인메모리 DB는 부모 경로가 비어 있으므로 건너뜁니다.
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
            tracing::info!("Created database directory: {}", parent.display());
        }
    }

    let pool = db::connect(options, config.max_connections).await?;

    tracing::info!("Running database migrations...");
    db::migrate(&pool).await?;

    let app = routes::app(AppState { pool });

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
