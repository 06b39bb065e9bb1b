use crate::error::AppError;
use crate::models::card_type::{CardType, NewCardType, UpdateCardType};
use sqlx::SqlitePool;

/// 모든 카드 종류를 ID순으로 조회합니다.
pub async fn list_card_types(pool: &SqlitePool) -> Result<Vec<CardType>, AppError> {
    let card_types = sqlx::query_as::<_, CardType>("SELECT id, name FROM card_types ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(card_types)
}

/// ID로 카드 종류 하나를 조회합니다. 없으면 `None`.
pub async fn get_card_type(pool: &SqlitePool, id: i64) -> Result<Option<CardType>, AppError> {
    let card_type = sqlx::query_as::<_, CardType>("SELECT id, name FROM card_types WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(card_type)
}

/// 새 카드 종류를 저장하고, 부여된 ID로 다시 읽어 반환합니다.
pub async fn create_card_type(pool: &SqlitePool, new: &NewCardType) -> Result<CardType, AppError> {
    let id = sqlx::query("INSERT INTO card_types (name) VALUES (?)")
        .bind(&new.name)
        .execute(pool)
        .await?
        .last_insert_rowid();

    tracing::debug!(card_type_id = id, "created card type");

    get_card_type(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created card type".to_string()))
}

/// 이름을 부분 수정합니다. 대상이 없으면 `Ok(None)`.
pub async fn update_card_type(
    pool: &SqlitePool,
    id: i64,
    req: &UpdateCardType,
) -> Result<Option<CardType>, AppError> {
    let Some(card_type) = get_card_type(pool, id).await? else {
        return Ok(None);
    };

    if let Some(name) = &req.name {
        sqlx::query("UPDATE card_types SET name = ? WHERE id = ?")
            .bind(name)
            .bind(card_type.id)
            .execute(pool)
            .await?;
    }

    get_card_type(pool, id).await
}

/// 참조 중인 카드가 있으면 외래키 위반으로 실패합니다.
pub async fn delete_card_type(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM card_types WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
