//! # 카드 모델 정의
//!
//! 카드는 앱의 핵심 레코드입니다. 모든 카드는 작성자(`User`) 한 명과
//! 종류(`CardType`) 하나를 외래키로 참조합니다.
//!
//! ## 구조체 역할
//! - `Card`: `cards` 테이블의 한 행 (응답용)
//! - `NewCard`: 저장 전 카드. 생성자 + 빌더 메서드로 조립합니다
//! - `UpdateCard`: `PATCH /api/v1/cards/{id}` 본문
//! - `CardFilter`: `GET /api/v1/cards` 쿼리스트링 필터

use serde::{Deserialize, Serialize};

/// 저장된 카드.
///
/// `set_name`은 `in_set`이 true일 때만 의미가 있지만, 두 필드의 관계는
/// 강제하지 않습니다. 저장된 값을 그대로 돌려줍니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Card {
    pub id: i64,
    pub name: String,
    /// 서사적 설명 (flavor text)
    pub fluff: Option<String>,
    /// 게임 규칙상 효과
    pub effect: Option<String>,
    /// 작성자 (`users.id`)
    pub user_id: i64,
    /// 종류 (`card_types.id`)
    pub card_type_id: i64,
    /// 공개된 세트에 포함되었는지 여부
    pub in_set: bool,
    pub set_name: Option<String>,
}

/// 아직 저장되지 않은 카드.
///
/// 필수 필드는 `NewCard::new`의 인자로, 선택 필드는 `with_*` 메서드로 채웁니다.
/// JSON 본문에서 선택 필드를 생략하면 `None`이 됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCard {
    pub name: String,
    pub fluff: Option<String>,
    pub effect: Option<String>,
    pub user_id: i64,
    pub card_type_id: i64,
    pub in_set: bool,
    pub set_name: Option<String>,
}

impl NewCard {
    pub fn new(name: impl Into<String>, user_id: i64, card_type_id: i64, in_set: bool) -> Self {
        Self {
            name: name.into(),
            fluff: None,
            effect: None,
            user_id,
            card_type_id,
            in_set,
            set_name: None,
        }
    }

    pub fn with_fluff(mut self, fluff: impl Into<String>) -> Self {
        self.fluff = Some(fluff.into());
        self
    }

    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }

    pub fn with_set_name(mut self, set_name: impl Into<String>) -> Self {
        self.set_name = Some(set_name.into());
        self
    }
}

/// 카드 부분 수정 요청.
///
/// 선택 필드(`fluff`, `effect`, `set_name`)는 `Option<Option<String>>`입니다.
/// 필드를 생략하면 그대로 두고, `null`을 보내면 값을 지웁니다.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCard {
    #[serde(default, deserialize_with = "super::non_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub fluff: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub effect: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::non_null")]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "super::non_null")]
    pub card_type_id: Option<i64>,
    #[serde(default, deserialize_with = "super::non_null")]
    pub in_set: Option<bool>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub set_name: Option<Option<String>>,
}

impl UpdateCard {
    /// 기존 카드에 변경 사항을 덮어쓴 결과를 돌려줍니다. `id`는 바뀌지 않습니다.
    pub fn apply(&self, card: Card) -> Card {
        Card {
            id: card.id,
            name: self.name.clone().unwrap_or(card.name),
            fluff: self.fluff.clone().unwrap_or(card.fluff),
            effect: self.effect.clone().unwrap_or(card.effect),
            user_id: self.user_id.unwrap_or(card.user_id),
            card_type_id: self.card_type_id.unwrap_or(card.card_type_id),
            in_set: self.in_set.unwrap_or(card.in_set),
            set_name: self.set_name.clone().unwrap_or(card.set_name),
        }
    }
}

/// 카드 목록 필터. 모든 조건은 AND로 결합되고, `None`인 조건은 무시됩니다.
///
/// 예: `GET /api/v1/cards?user_id=1&tag_id=3`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CardFilter {
    pub user_id: Option<i64>,
    pub card_type_id: Option<i64>,
    pub tag_id: Option<i64>,
    pub in_set: Option<bool>,
}
