//! Connection pool setup and schema bootstrap.

use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

/// A type alias for the database connection pool (`Pool<Postgres>`).
/// This is used throughout the application to provide a consistent, clear
/// name for the shared database connection state.
pub type DbPool = Pool<Postgres>;

pub async fn connect(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Create the tables the bot needs if they are missing. Idempotent, run once
/// at startup.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS wallets (
            user_id BIGINT PRIMARY KEY,
            balance BIGINT NOT NULL DEFAULT 1000
        )",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS stocks (
            user_id BIGINT NOT NULL,
            ticker TEXT NOT NULL,
            amount BIGINT NOT NULL DEFAULT 0,
            PRIMARY KEY (user_id, ticker)
        )",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS todos (
            todo_id BIGSERIAL PRIMARY KEY,
            user_id BIGINT NOT NULL,
            task TEXT NOT NULL,
            jump_url TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}
