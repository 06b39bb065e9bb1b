use crate::error::AppError;
use crate::models::user::{NewUser, UpdateUser, User};
use sqlx::SqlitePool;

/// 모든 작성자를 ID순으로 조회합니다.
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>("SELECT id, name FROM users ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(users)
}

/// ID로 작성자 하나를 조회합니다. 없으면 `None`.
pub async fn get_user(pool: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>("SELECT id, name FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// 새 작성자를 저장하고, 부여된 ID로 다시 읽어 반환합니다.
pub async fn create_user(pool: &SqlitePool, new: &NewUser) -> Result<User, AppError> {
    let id = sqlx::query("INSERT INTO users (name) VALUES (?)")
        .bind(&new.name)
        .execute(pool)
        .await?
        .last_insert_rowid();

    tracing::debug!(user_id = id, "created user");

    get_user(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created user".to_string()))
}

/// 이름을 부분 수정합니다. 대상이 없으면 `Ok(None)`.
pub async fn update_user(
    pool: &SqlitePool,
    id: i64,
    req: &UpdateUser,
) -> Result<Option<User>, AppError> {
    let Some(user) = get_user(pool, id).await? else {
        return Ok(None);
    };

    if let Some(name) = &req.name {
        sqlx::query("UPDATE users SET name = ? WHERE id = ?")
            .bind(name)
            .bind(user.id)
            .execute(pool)
            .await?;
    }

    get_user(pool, id).await
}

/// 작성자를 삭제합니다.
///
/// 카드가 아직 이 작성자를 참조하고 있으면 외래키 위반(`AppError::ForeignKey`)이 됩니다.
pub async fn delete_user(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
