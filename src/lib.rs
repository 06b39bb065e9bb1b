//! # Cardmaker
//!
//! 카드 카탈로그 백엔드 라이브러리입니다.
//! 작성자(User), 카드 종류(CardType), 카드(Card), 태그(Tag)와
//! 카드-태그 다대다 연결(CardTagRelationship)을 SQLite에 저장하고 REST API로 제공합니다.
//!
//! - `models`: 레코드 타입 (저장된 행 / 저장 전 레코드 / 부분 수정 요청)
//! - `db`: 엔티티별 데이터 접근 함수와 연결 풀, 마이그레이션
//! - `routes`: Axum 핸들러와 라우터
//! - `error`: 에러 분류와 HTTP 응답 변환
//! - `config`: 환경변수 설정

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
