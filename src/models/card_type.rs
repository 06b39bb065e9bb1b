use serde::{Deserialize, Serialize};

/// 카드 종류 (예: "Location", "Magical item").
///
/// 이름에 UNIQUE 제약이 없으므로 같은 이름의 종류가 여러 개 있을 수 있습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CardType {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCardType {
    pub name: String,
}

impl NewCardType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCardType {
    #[serde(default, deserialize_with = "super::non_null")]
    pub name: Option<String>,
}
