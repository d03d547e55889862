//! Latency diagnostics: REST round-trip, gateway heartbeat, and SQL.

use std::time::Instant;

use serenity::builder::{CreateEmbed, EditMessage};
use serenity::model::channel::Message;
use serenity::prelude::*;

use crate::ui::style;
use crate::{AppState, ShardManagerContainer};

pub async fn run(ctx: &Context, msg: &Message) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };

    let rest_start = Instant::now();
    let Ok(mut message) = msg.channel_id.say(&ctx.http, "Pinging ...").await else {
        return;
    };
    let rest_ms = rest_start.elapsed().as_millis();

    let gateway = gateway_latency(ctx).await;

    let sql_start = Instant::now();
    let sql = match sqlx::query("SELECT 1").execute(&app_state.db).await {
        Ok(_) => format!("`{} ms`", sql_start.elapsed().as_millis()),
        Err(_) => "`N/A`".to_string(),
    };

    let embed = style::stamp(
        CreateEmbed::new()
            .title("Ping")
            .color(style::COLOR_EMBED)
            .field("REST Latency", format!("`{rest_ms} ms`"), false)
            .field("Gateway Latency", gateway, false)
            .field("SQL Latency", sql, false),
        &msg.author,
    );
    message
        .edit(&ctx.http, EditMessage::new().content("").embed(embed))
        .await
        .ok();
}

async fn gateway_latency(ctx: &Context) -> String {
    let data = ctx.data.read().await;
    let Some(shard_manager) = data.get::<ShardManagerContainer>() else {
        return "`N/A`".to_string();
    };
    let runners = shard_manager.runners.lock().await;
    runners
        .get(&ctx.shard_id)
        .and_then(|runner| runner.latency)
        .map_or_else(
            || "`N/A`".to_string(),
            |latency| format!("`{:.2} ms`", latency.as_secs_f64() * 1000.0),
        )
}
