use serde::{Deserialize, Serialize};

/// 카드 작성자. `users` 테이블의 한 행.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// 아직 저장되지 않은 작성자. `POST /api/v1/users` 본문으로도 쓰입니다.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub name: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUser {
    #[serde(default, deserialize_with = "super::non_null")]
    pub name: Option<String>,
}
