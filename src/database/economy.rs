//! Wallet balance access for the trading commands.

use super::models::Wallet;
use serenity::model::id::UserId;
use sqlx::{PgPool, Postgres, Transaction};

/// Fetch a user's wallet, creating it with the starting balance on first
/// contact.
pub async fn get_or_create_wallet(pool: &PgPool, user_id: UserId) -> Result<Wallet, sqlx::Error> {
    let user_id = user_id.get() as i64;
    sqlx::query_as::<_, Wallet>(
        "INSERT INTO wallets (user_id) VALUES ($1)
         ON CONFLICT (user_id) DO UPDATE SET balance = wallets.balance
         RETURNING balance",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Adds (or subtracts) from a wallet within an existing transaction.
/// The guard keeps balances non-negative; an overdraw surfaces as
/// `RowNotFound` and rolls the caller's transaction back.
pub async fn add_balance(
    tx: &mut Transaction<'_, Postgres>,
    user_id: UserId,
    delta: i64,
) -> Result<(), sqlx::Error> {
    let user_id = user_id.get() as i64;
    let result = sqlx::query(
        "UPDATE wallets SET balance = balance + $2 WHERE user_id = $1 AND balance + $2 >= 0",
    )
    .bind(user_id)
    .bind(delta)
    .execute(&mut **tx)
    .await?;
    if result.rows_affected() == 1 {
        Ok(())
    } else {
        Err(sqlx::Error::RowNotFound)
    }
}
