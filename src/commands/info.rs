//! Bot information and uptime.

use chrono::Utc;
use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::*;

use crate::ui::style;
use crate::AppState;

/// Render whole seconds of uptime as `1d 2h 3m`, dropping leading zero
/// units.
pub fn format_uptime(total_secs: i64) -> String {
    let total_secs = total_secs.max(0);
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

pub async fn run(ctx: &Context, msg: &Message) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let guild_count = ctx.cache.guilds().len();
    let uptime_secs = (Utc::now() - app_state.started_at).num_seconds();

    let embed = style::stamp(
        CreateEmbed::new()
            .title("Bot information")
            .description("A utility bot: stock ledger, todo lists, and reaction-driven menus.")
            .color(style::COLOR_EMBED)
            .field("Version", format!("`{}`", env!("CARGO_PKG_VERSION")), true)
            .field("Guilds", format!("`{guild_count}`"), true)
            .field("Uptime", format!("`{}`", format_uptime(uptime_secs)), true),
        &msg.author,
    );
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
