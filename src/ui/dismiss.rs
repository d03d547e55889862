//! Fire-and-forget replies the sender can clear away with a reaction.

use std::time::Duration;

use serenity::builder::CreateMessage;
use serenity::model::channel::ReactionType;
use serenity::model::id::{ChannelId, UserId};
use serenity::prelude::Context;
use tracing::debug;

use crate::constants::DISMISS_TIMEOUT_SECS;
use crate::ui::style::{self, EMOJI_DISMISS};

/// Send a message with a dismiss affordance attached.
///
/// If `sender` reacts with the dismiss emoji within the window, the message
/// is deleted; a failed deletion is swallowed. On timeout the message stays
/// as-is.
pub async fn send_dismissable(
    ctx: &Context,
    channel_id: ChannelId,
    sender: UserId,
    builder: CreateMessage,
) -> serenity::Result<()> {
    let message = channel_id.send_message(&ctx.http, builder).await?;
    message
        .react(&ctx.http, style::unicode(EMOJI_DISMISS))
        .await?;

    let dismissed = message
        .await_reaction(&ctx.shard)
        .author_id(sender)
        .filter(|reaction| {
            matches!(&reaction.emoji, ReactionType::Unicode(emoji) if emoji == EMOJI_DISMISS)
        })
        .timeout(Duration::from_secs(DISMISS_TIMEOUT_SECS))
        .await
        .is_some();

    if dismissed {
        if let Err(err) = message.delete(&ctx.http).await {
            debug!(error = ?err, "dismissable message already gone");
        }
    }
    Ok(())
}
