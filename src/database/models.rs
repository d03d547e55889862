//! Contains the data structures that map to database tables or query results.

use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Wallet {
    pub balance: i64,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct StockPosition {
    pub ticker: String,
    pub amount: i64,
}

/// One todo row plus its stable position in the creation-time ordering.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct TodoEntry {
    pub todo_id: i64,
    pub task: String,
    pub jump_url: String,
    pub created_at: DateTime<Utc>,
    pub row_number: i64,
}
