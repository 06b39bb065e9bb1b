//! # 데이터 모델 모듈
//!
//! 카드 카탈로그의 레코드 타입들을 정의합니다.
//! 각 하위 모듈은 하나의 테이블(엔티티)을 담당합니다:
//! - `user`: 카드 작성자(User) — `users`
//! - `card_type`: 카드 종류(CardType) — `card_types`
//! - `card`: 카드(Card) — `cards`
//! - `tag`: 태그(Tag)와 카드-태그 연결(CardTagRelationship) — `tags`, `cards_tags_relationship`
//!
//! 모든 엔티티는 같은 모양을 따릅니다:
//! - 저장된 행을 표현하는 구조체 (`User`, `Card` ...) — `id`가 항상 존재
//! - 아직 저장되지 않은 레코드 (`NewUser`, `NewCard` ...) — `id` 없음, DB가 INSERT 시 부여
//! - 부분 수정 요청 (`UpdateUser`, `UpdateCard` ...) — PATCH 본문
//!
//! 제약조건(필수 여부, 외래키)은 `migrations/`의 DDL이 단일 기준입니다.
//! 이 모듈은 메모리상의 모양만 정의합니다.

pub mod card;
pub mod card_type;
pub mod tag;
pub mod user;

pub use card::*;
pub use card_type::*;
pub use tag::*;
pub use user::*;

use serde::{Deserialize, Deserializer};

/// PATCH 본문에서 "필드 없음"과 "`null`로 지우기"를 구분하기 위한 역직렬화 함수.
///
/// `#[serde(default, deserialize_with = "...")]`와 함께 `Option<Option<T>>` 필드에 붙입니다.
/// - 필드 없음 → `None` (변경하지 않음)
/// - `null` → `Some(None)` (값을 지움)
/// - 값 → `Some(Some(v))`
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// PATCH 본문의 필수 컬럼용 역직렬화 함수.
///
/// `#[serde(default, deserialize_with = "...")]`와 함께 `Option<T>` 필드에 붙입니다.
/// - 필드 없음 → `None` (변경하지 않음)
/// - `null` → 역직렬화 에러 (NOT NULL 컬럼은 지울 수 없음, 422 `validation_error`)
/// - 값 → `Some(v)`
pub(crate) fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
