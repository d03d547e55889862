//! The stock position ledger.

use super::models::StockPosition;
use serenity::model::id::UserId;
use sqlx::{PgPool, Postgres, Transaction};

pub async fn get_position(
    pool: &PgPool,
    user_id: UserId,
    ticker: &str,
) -> Result<Option<StockPosition>, sqlx::Error> {
    let user_id = user_id.get() as i64;
    sqlx::query_as::<_, StockPosition>(
        "SELECT ticker, amount FROM stocks WHERE user_id = $1 AND ticker = $2 AND amount > 0",
    )
    .bind(user_id)
    .bind(ticker)
    .fetch_optional(pool)
    .await
}

pub async fn list_positions(
    pool: &PgPool,
    user_id: UserId,
) -> Result<Vec<StockPosition>, sqlx::Error> {
    let user_id = user_id.get() as i64;
    sqlx::query_as::<_, StockPosition>(
        "SELECT ticker, amount FROM stocks WHERE user_id = $1 AND amount > 0 ORDER BY ticker",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Add shares to a position, creating the row on first purchase.
pub async fn add_shares(
    tx: &mut Transaction<'_, Postgres>,
    user_id: UserId,
    ticker: &str,
    amount: i64,
) -> Result<(), sqlx::Error> {
    let user_id = user_id.get() as i64;
    sqlx::query(
        "INSERT INTO stocks (user_id, ticker, amount) VALUES ($1, $2, $3)
         ON CONFLICT (user_id, ticker) DO UPDATE SET amount = stocks.amount + EXCLUDED.amount",
    )
    .bind(user_id)
    .bind(ticker)
    .bind(amount)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

/// Remove shares from a position. The guard keeps quantities non-negative;
/// overselling surfaces as `RowNotFound`.
pub async fn remove_shares(
    tx: &mut Transaction<'_, Postgres>,
    user_id: UserId,
    ticker: &str,
    amount: i64,
) -> Result<(), sqlx::Error> {
    let user_id = user_id.get() as i64;
    let result = sqlx::query(
        "UPDATE stocks SET amount = amount - $3
         WHERE user_id = $1 AND ticker = $2 AND amount - $3 >= 0",
    )
    .bind(user_id)
    .bind(ticker)
    .bind(amount)
    .execute(&mut **tx)
    .await?;
    if result.rows_affected() == 1 {
        Ok(())
    } else {
        Err(sqlx::Error::RowNotFound)
    }
}

/// Delete rows whose position was sold down to zero. Run periodically by the
/// background sweeper.
pub async fn prune_empty_positions(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM stocks WHERE amount = 0")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
