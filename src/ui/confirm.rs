//! Reaction-based yes/no confirmation prompts.

use std::time::Duration;

use serenity::model::channel::{Message, ReactionType};
use serenity::model::id::{ChannelId, UserId};
use serenity::prelude::Context;

use crate::constants::CONFIRM_TIMEOUT_SECS;
use crate::ui::style::{self, EMOJI_ACCEPT, EMOJI_DECLINE};

/// Send `prompt` and wait for the requester to accept or decline it.
///
/// Resolves to `(accepted, message)`. Declining and letting the prompt time
/// out both resolve to `false`; a timeout is a normal outcome, not an
/// error. Reactions from anyone other than `requester`, or with any other
/// emoji, never resolve the prompt; the single-shot collector is detached as
/// soon as it yields. The message is left in place with its accumulated
/// reactions, so the caller can edit it into a receipt or delete it.
pub async fn confirm(
    ctx: &Context,
    channel_id: ChannelId,
    requester: UserId,
    prompt: impl Into<String>,
) -> serenity::Result<(bool, Message)> {
    let timeout = Duration::from_secs(CONFIRM_TIMEOUT_SECS);
    confirm_within(ctx, channel_id, requester, prompt, timeout).await
}

/// [`confirm`] with an explicit timeout.
pub async fn confirm_within(
    ctx: &Context,
    channel_id: ChannelId,
    requester: UserId,
    prompt: impl Into<String>,
    timeout: Duration,
) -> serenity::Result<(bool, Message)> {
    let message = channel_id.say(&ctx.http, prompt.into()).await?;
    message.react(&ctx.http, style::unicode(EMOJI_ACCEPT)).await?;
    message.react(&ctx.http, style::unicode(EMOJI_DECLINE)).await?;

    let reaction = message
        .await_reaction(&ctx.shard)
        .author_id(requester)
        .filter(|reaction| {
            matches!(
                &reaction.emoji,
                ReactionType::Unicode(emoji)
                    if emoji == EMOJI_ACCEPT || emoji == EMOJI_DECLINE
            )
        })
        .timeout(timeout)
        .await;

    let accepted = matches!(
        reaction,
        Some(reaction) if reaction.emoji == style::unicode(EMOJI_ACCEPT)
    );
    Ok((accepted, message))
}
