//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수(또는 `.env` 파일)에서 서버 설정값을 읽어옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (필수)
//! - `DATABASE_MAX_CONNECTIONS`: 연결 풀 크기 (기본값: 5)
//! - `HOST`: 서버 바인딩 주소 (기본값: "0.0.0.0")
//! - `PORT`: 서버 포트 번호 (기본값: 3000)

use std::env;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어옵니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 URL (예: "sqlite:data/cardmaker.db")
    pub database_url: String,
    /// 연결 풀의 최대 연결 수
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// # 에러
    /// `DATABASE_URL`은 필수이며, 없으면 `VarError`를 반환합니다.
    /// 나머지 설정은 값이 없거나 파싱에 실패하면 기본값을 사용합니다.
    pub fn from_env() -> Result<Self, env::VarError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// 조회 함수를 주입받아 설정을 만듭니다. `from_env`와 테스트가 공유합니다.
    fn from_lookup<F>(lookup: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        Ok(Self {
            database_url: lookup("DATABASE_URL")?,
            max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            host: lookup("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        })
    }
}
