//! Todo storage. Row numbers come from the stable creation-time ordering,
//! never from the page a row happens to be displayed on.

use super::models::TodoEntry;
use serenity::model::id::UserId;
use sqlx::PgPool;

pub async fn add_todo(
    pool: &PgPool,
    user_id: UserId,
    task: &str,
    jump_url: &str,
) -> Result<(), sqlx::Error> {
    let user_id = user_id.get() as i64;
    sqlx::query("INSERT INTO todos (user_id, task, jump_url) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(task)
        .bind(jump_url)
        .execute(pool)
        .await?;
    Ok(())
}

/// All of a user's todos in creation order, each numbered with
/// `ROW_NUMBER()` so labels survive later deletions of other rows within
/// the same listing.
pub async fn list_todos(pool: &PgPool, user_id: UserId) -> Result<Vec<TodoEntry>, sqlx::Error> {
    let user_id = user_id.get() as i64;
    sqlx::query_as::<_, TodoEntry>(
        "SELECT todo_id, task, jump_url, created_at,
                ROW_NUMBER() OVER (ORDER BY created_at) AS row_number
         FROM todos WHERE user_id = $1 ORDER BY created_at",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Delete the given rows by id, scoped to the owner.
pub async fn remove_todos(
    pool: &PgPool,
    user_id: UserId,
    todo_ids: &[i64],
) -> Result<u64, sqlx::Error> {
    let user_id = user_id.get() as i64;
    let result = sqlx::query("DELETE FROM todos WHERE user_id = $1 AND todo_id = ANY($2)")
        .bind(user_id)
        .bind(todo_ids.to_vec())
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
