//! Shared data structures stored in Serenity's global context.
//! These structs are used as `TypeMapKey`s so any command or event handler
//! can reach them through the `Context`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serenity::gateway::ShardManager;
use serenity::prelude::TypeMapKey;

use crate::database::init::DbPool;
use crate::services::quotes::QuoteClient;

/// A container for the ShardManager, allowing it to be stored in the global
/// context. This provides access to shard-specific information, like gateway
/// latency.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// The central, shared state of the application, passed to every command at
/// invocation time. Lifecycle is tied to process start and shutdown; nothing
/// here is a module-level singleton.
pub struct AppState {
    /// The connection pool for the PostgreSQL ledger.
    pub db: DbPool,
    /// Client for the stock quote API.
    pub quotes: QuoteClient,
    /// The command prefix, fixed at startup.
    pub prefix: String,
    /// Process start time, for uptime reporting.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
