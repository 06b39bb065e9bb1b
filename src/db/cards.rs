//! # 카드 데이터베이스 쿼리 모듈
//!
//! `cards` 테이블의 CRUD와 필터 조회 함수들입니다.
//!
//! 작성자(`user_id`)와 종류(`card_type_id`)의 존재 여부는 여기서 미리 확인하지 않습니다.
//! 외래키 제약이 INSERT/UPDATE 시점에 검사하고, 위반하면 행이 남지 않은 채
//! `AppError::ForeignKey`가 반환됩니다.

use crate::error::AppError;
use crate::models::card::{Card, CardFilter, NewCard, UpdateCard};
use sqlx::SqlitePool;

/// 필터 조건에 맞는 카드를 ID 순으로 조회합니다.
///
/// 각 조건은 `(?N IS NULL OR ...)` 형태라서 바인딩 값이 NULL이면 무시됩니다.
/// 태그 조건은 연결 테이블에 (card, tag) 쌍이 있는지로 판단합니다.
pub async fn list_cards(pool: &SqlitePool, filter: &CardFilter) -> Result<Vec<Card>, AppError> {
    let cards = sqlx::query_as::<_, Card>(
        r#"
        SELECT c.id, c.name, c.fluff, c.effect, c.user_id, c.card_type_id, c.in_set, c.set_name
        FROM cards c
        WHERE (?1 IS NULL OR c.user_id = ?1)
          AND (?2 IS NULL OR c.card_type_id = ?2)
          AND (?3 IS NULL OR c.in_set = ?3)
          AND (?4 IS NULL OR EXISTS (
                SELECT 1 FROM cards_tags_relationship ct
                WHERE ct.card_id = c.id AND ct.tag_id = ?4
              ))
        ORDER BY c.id
        "#,
    )
    .bind(filter.user_id)
    .bind(filter.card_type_id)
    .bind(filter.in_set)
    .bind(filter.tag_id)
    .fetch_all(pool)
    .await?;

    Ok(cards)
}

pub async fn get_card(pool: &SqlitePool, id: i64) -> Result<Option<Card>, AppError> {
    let card = sqlx::query_as::<_, Card>(
        r#"
        SELECT id, name, fluff, effect, user_id, card_type_id, in_set, set_name
        FROM cards
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(card)
}

/// 새 카드를 저장하고 부여된 ID로 다시 조회하여 반환합니다.
pub async fn create_card(pool: &SqlitePool, new: &NewCard) -> Result<Card, AppError> {
    let id = sqlx::query(
        r#"
        INSERT INTO cards (name, fluff, effect, user_id, card_type_id, in_set, set_name)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&new.name)
    .bind(&new.fluff)
    .bind(&new.effect)
    .bind(new.user_id)
    .bind(new.card_type_id)
    .bind(new.in_set)
    .bind(&new.set_name)
    .execute(pool)
    .await?
    .last_insert_rowid();

    tracing::debug!(card_id = id, user_id = new.user_id, "created card");

    get_card(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created card".to_string()))
}

/// 카드를 부분 수정합니다.
///
/// 기존 행에 변경 사항을 합친 뒤 한 번의 UPDATE로 저장하므로,
/// 외래키 위반이 나면 어떤 필드도 바뀌지 않습니다.
///
/// ## 반환값
/// - `Ok(Some(Card))`: 수정된 카드
/// - `Ok(None)`: 해당 ID의 카드가 없음
pub async fn update_card(
    pool: &SqlitePool,
    id: i64,
    req: &UpdateCard,
) -> Result<Option<Card>, AppError> {
    let Some(card) = get_card(pool, id).await? else {
        return Ok(None);
    };
    let card = req.apply(card);

    sqlx::query(
        r#"
        UPDATE cards
        SET name = ?, fluff = ?, effect = ?, user_id = ?, card_type_id = ?, in_set = ?, set_name = ?
        WHERE id = ?
        "#,
    )
    .bind(&card.name)
    .bind(&card.fluff)
    .bind(&card.effect)
    .bind(card.user_id)
    .bind(card.card_type_id)
    .bind(card.in_set)
    .bind(&card.set_name)
    .bind(card.id)
    .execute(pool)
    .await?;

    get_card(pool, id).await
}

/// 카드를 삭제합니다.
///
/// 연결 테이블의 행은 (card, tag) 쌍 외에 아무 정보도 없으므로
/// 같은 트랜잭션 안에서 함께 지웁니다. 태그 자체는 남습니다.
pub async fn delete_card(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM cards_tags_relationship WHERE card_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM cards WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(result.rows_affected() > 0)
}
