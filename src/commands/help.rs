//! The command reference, sent as a dismissable message.

use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::*;

use crate::ui::{dismiss, style};
use crate::AppState;

pub async fn run(ctx: &Context, msg: &Message) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let p = &app_state.prefix;

    let embed = CreateEmbed::new()
        .title("Commands")
        .color(style::COLOR_EMBED)
        .field(
            "Stocks",
            format!(
                "`{p}buy <ticker> [amount|max]` - buy shares (asks to confirm)\n\
                 `{p}sell <ticker> [amount|max]` - sell shares (asks to confirm)\n\
                 `{p}portfolio [@user]` - list held positions\n\
                 `{p}lookup <ticker>` - current price stats\n\
                 `{p}check <query>` - does that ticker exist?\n\
                 `{p}dividend <yield%> <price> <shares>` - payout calculator"
            ),
            false,
        )
        .field(
            "Todo",
            format!(
                "`{p}todo add <task>`\n\
                 `{p}todo list` - paginated, navigate with reactions\n\
                 `{p}todo remove <n> [n ...]`"
            ),
            false,
        )
        .field(
            "Misc",
            format!("`{p}ping` - latency breakdown\n`{p}info` - bot info and uptime"),
            false,
        )
        .footer(serenity::builder::CreateEmbedFooter::new(
            "React ❌ to dismiss this message.",
        ));

    dismiss::send_dismissable(
        ctx,
        msg.channel_id,
        msg.author.id,
        CreateMessage::new().embed(embed),
    )
    .await
    .ok();
}
