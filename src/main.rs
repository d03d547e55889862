use std::env;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use bursar_bot::constants::POSITION_SWEEP_INTERVAL_SECS;
use bursar_bot::services::quotes::QuoteClient;
use bursar_bot::{database, handler, AppState, ShardManagerContainer};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment.");
    let database_url = env::var("DATABASE_URL").expect("Expected DATABASE_URL in the environment.");
    let finnhub_token =
        env::var("FINNHUB_TOKEN").expect("Expected FINNHUB_TOKEN in the environment.");
    let prefix = env::var("BOT_PREFIX").unwrap_or_else(|_| "!".to_string());

    let db = database::init::connect(&database_url)
        .await
        .expect("Error connecting to Postgres.");
    database::init::ensure_schema(&db)
        .await
        .expect("Error preparing the database schema.");

    let app_state = Arc::new(AppState {
        db: db.clone(),
        quotes: QuoteClient::new(finnhub_token),
        prefix,
        started_at: Utc::now(),
    });

    // Positions sold down to zero shares are dead rows; sweep them out on a
    // slow cadence.
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(POSITION_SWEEP_INTERVAL_SECS));
        loop {
            ticker.tick().await;
            if let Err(err) = database::stocks::prune_empty_positions(&db).await {
                warn!(error = %err, "failed to sweep empty stock positions");
            }
        }
    });

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let mut client = Client::builder(&token, intents)
        .event_handler(handler::Handler)
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerContainer>(client.shard_manager.clone());
        data.insert::<AppState>(app_state);
    }

    if let Err(why) = client.start().await {
        error!("Client error: {why:?}");
    }
}
