//! Central UI style constants and helpers.
use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use serenity::model::channel::ReactionType;
use serenity::model::user::User;
use serenity::model::Timestamp;

pub const COLOR_EMBED: u32 = 0x3498DB; // Blue
pub const COLOR_SUCCESS: u32 = 0x2ECC71; // Green
pub const COLOR_MENU: u32 = 0x9B59B6; // Purple

// Reaction affordances. Accept/decline double as check-mark feedback on the
// `check` command; dismiss intentionally shares the decline glyph.
pub const EMOJI_ACCEPT: &str = "✅";
pub const EMOJI_DECLINE: &str = "❌";
pub const EMOJI_DISMISS: &str = "❌";

pub const EMOJI_FIRST: &str = "⏮️";
pub const EMOJI_PREVIOUS: &str = "◀️";
pub const EMOJI_NEXT: &str = "▶️";
pub const EMOJI_LAST: &str = "⏭️";
pub const EMOJI_STOP: &str = "⏹️";

pub fn unicode(emoji: &str) -> ReactionType {
    ReactionType::Unicode(emoji.to_string())
}

/// Stamp an embed with the requesting user, the way every reply embed is
/// attributed.
pub fn stamp(embed: CreateEmbed, author: &User) -> CreateEmbed {
    embed
        .footer(CreateEmbedFooter::new(format!(
            "Requested by {}",
            author.name
        )))
        .timestamp(Timestamp::now())
}
