//! # 태그 모델 정의
//!
//! 태그는 어떤 카드에든 붙일 수 있는 분류 라벨입니다 (예: 제작 연도 "2023").
//! 카드와 태그는 `cards_tags_relationship` 연결 테이블을 통한 다대다(N:M) 관계입니다.
//!
//! ## 구조체 역할
//! - `Tag`: `tags` 테이블의 한 행 (응답용)
//! - `NewTag`: 새 태그 (`POST /api/v1/tags` 본문)
//! - `UpdateTag`: 태그 부분 수정 (`PATCH /api/v1/tags/{id}` 본문)
//! - `CardTagRelationship`: 연결 테이블의 한 행 — (card_id, tag_id) 쌍 외에 다른 속성은 없음
//! - `AddTagToCardRequest`: 카드에 태그를 연결할 때의 요청 본문

use serde::{Deserialize, Serialize};

/// 태그 엔티티 — DB의 `tags` 테이블 한 행에 대응합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,
    /// 태그 이름. UNIQUE 제약이 없어 같은 이름의 태그가 여러 개 있을 수 있습니다.
    pub name: String,
    pub description: Option<String>,
}

/// 새 태그. `description`은 생략 가능합니다.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewTag {
    pub name: String,
    pub description: Option<String>,
}

impl NewTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// 태그 수정 요청.
///
/// `description`에 `null`을 보내면 설명을 지우고, 생략하면 그대로 유지합니다.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTag {
    #[serde(default, deserialize_with = "super::non_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub description: Option<Option<String>>,
}

/// 카드-태그 연결 한 건. 복합 기본키 (card_id, tag_id) 그 자체가 레코드입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct CardTagRelationship {
    pub card_id: i64,
    pub tag_id: i64,
}

/// 카드에 태그 추가 요청 — `POST /api/v1/cards/{id}/tags`의 본문.
///
/// 카드 ID는 URL 경로에서, 태그 ID는 본문에서 가져옵니다.
#[derive(Debug, Deserialize)]
pub struct AddTagToCardRequest {
    pub tag_id: i64,
}
