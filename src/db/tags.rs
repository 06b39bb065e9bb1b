//! # 태그 데이터베이스 쿼리 모듈
//!
//! 태그 CRUD 및 카드-태그 관계를 관리하는 SQL 쿼리 함수들입니다.
//! 모든 함수는 `SqlitePool` 참조를 받아 비동기로 실행됩니다.
//!
//! ## 테이블 구조
//! - `tags`: 태그 엔티티 (id, name, description)
//! - `cards_tags_relationship`: 카드와 태그의 다대다(N:M) 연결 테이블, 복합키 (card_id, tag_id)
//!
//! 양방향 조회(`get_card_tags`, `get_tag_cards`)는 매번 연결 테이블을 JOIN하는
//! 쿼리입니다. 어느 쪽에도 컬렉션이 저장되지 않으며, 항상 현재 연결 상태를 반영합니다.
//!
//! ```sql
//! tags ←── cards_tags_relationship ──→ cards
//!  (1)              (N:M)                (1)
//! ```

use crate::error::AppError;
use crate::models::card::Card;
use crate::models::tag::{CardTagRelationship, NewTag, Tag, UpdateTag};
use sqlx::SqlitePool;

/// 모든 태그를 ID순으로 조회합니다.
pub async fn list_tags(pool: &SqlitePool) -> Result<Vec<Tag>, AppError> {
    let tags = sqlx::query_as::<_, Tag>("SELECT id, name, description FROM tags ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(tags)
}

/// ID로 태그 하나를 조회합니다. 없으면 `None`.
pub async fn get_tag(pool: &SqlitePool, id: i64) -> Result<Option<Tag>, AppError> {
    let tag = sqlx::query_as::<_, Tag>("SELECT id, name, description FROM tags WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(tag)
}

/// 새 태그를 생성하고 생성된 태그를 반환합니다.
///
/// ID는 SQLite가 부여합니다 (`last_insert_rowid`).
pub async fn create_tag(pool: &SqlitePool, new: &NewTag) -> Result<Tag, AppError> {
    let id = sqlx::query("INSERT INTO tags (name, description) VALUES (?, ?)")
        .bind(&new.name)
        .bind(&new.description) // None이면 SQL NULL
        .execute(pool)
        .await?
        .last_insert_rowid();

    tracing::debug!(tag_id = id, "created tag");

    get_tag(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created tag".to_string()))
}

/// 태그 정보를 부분 업데이트합니다.
///
/// ## 반환값
/// - `Ok(Some(Tag))`: 업데이트 성공, 변경된 태그 반환
/// - `Ok(None)`: 해당 ID의 태그가 존재하지 않음
pub async fn update_tag(
    pool: &SqlitePool,
    id: i64,
    req: &UpdateTag,
) -> Result<Option<Tag>, AppError> {
    let Some(tag) = get_tag(pool, id).await? else {
        return Ok(None); // 404 처리를 라우트 핸들러에 위임
    };

    let name = req.name.as_ref().unwrap_or(&tag.name);
    let description = req.description.as_ref().unwrap_or(&tag.description);

    sqlx::query("UPDATE tags SET name = ?, description = ? WHERE id = ?")
        .bind(name)
        .bind(description)
        .bind(id)
        .execute(pool)
        .await?;

    get_tag(pool, id).await
}

/// ID로 태그를 삭제합니다.
///
/// 연결 테이블에 ON DELETE 규칙이 없으므로, 이 태그의 연결을 같은 트랜잭션에서
/// 먼저 지웁니다. 카드들은 그대로 남습니다.
///
/// ## 반환값
/// - `true`: 삭제 성공
/// - `false`: 해당 ID의 태그가 존재하지 않음
pub async fn delete_tag(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM cards_tags_relationship WHERE tag_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM tags WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(result.rows_affected() > 0)
}

/// 카드에 태그를 연결합니다 (다대다 관계 추가).
///
/// 중복 연결은 조용히 무시하지 않습니다. 복합 기본키가 같은 쌍의 두 번째 INSERT를
/// 거부하면 `AppError::Duplicate`가 되고, 카드나 태그가 없으면 `AppError::ForeignKey`가 됩니다.
pub async fn add_tag_to_card(
    pool: &SqlitePool,
    card_id: i64,
    tag_id: i64,
) -> Result<CardTagRelationship, AppError> {
    sqlx::query("INSERT INTO cards_tags_relationship (card_id, tag_id) VALUES (?, ?)")
        .bind(card_id)
        .bind(tag_id)
        .execute(pool)
        .await?;

    tracing::debug!(card_id, tag_id, "attached tag to card");

    Ok(CardTagRelationship { card_id, tag_id })
}

/// 카드에서 태그 연결을 해제합니다. 연결 테이블에서 최대 한 행만 지워집니다.
///
/// ## 반환값
/// - `true`: 연결 해제 성공
/// - `false`: 해당 카드-태그 관계가 존재하지 않음
pub async fn remove_tag_from_card(
    pool: &SqlitePool,
    card_id: i64,
    tag_id: i64,
) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM cards_tags_relationship WHERE card_id = ? AND tag_id = ?")
        .bind(card_id)
        .bind(tag_id)
        .execute(pool)
        .await?;

    let removed = result.rows_affected() > 0;
    if removed {
        tracing::debug!(card_id, tag_id, "detached tag from card");
    }

    Ok(removed)
}

/// 특정 카드에 연결된 모든 태그를 조회합니다.
pub async fn get_card_tags(pool: &SqlitePool, card_id: i64) -> Result<Vec<Tag>, AppError> {
    let tags = sqlx::query_as::<_, Tag>(
        r#"
        SELECT t.id, t.name, t.description
        FROM tags t
        JOIN cards_tags_relationship ct ON ct.tag_id = t.id
        WHERE ct.card_id = ?
        ORDER BY t.id
        "#,
    )
    .bind(card_id)
    .fetch_all(pool)
    .await?;

    Ok(tags)
}

/// 특정 태그가 붙은 모든 카드를 조회합니다. `get_card_tags`의 반대 방향입니다.
pub async fn get_tag_cards(pool: &SqlitePool, tag_id: i64) -> Result<Vec<Card>, AppError> {
    let cards = sqlx::query_as::<_, Card>(
        r#"
        SELECT c.id, c.name, c.fluff, c.effect, c.user_id, c.card_type_id, c.in_set, c.set_name
        FROM cards c
        JOIN cards_tags_relationship ct ON ct.card_id = c.id
        WHERE ct.tag_id = ?
        ORDER BY c.id
        "#,
    )
    .bind(tag_id)
    .fetch_all(pool)
    .await?;

    Ok(cards)
}
