//! Reaction-driven paginated list menus.
//!
//! The page-turning rules live in [`ListMenu`], a plain state machine with no
//! gateway dependency, so they can be tested without a connection. [`run`]
//! is the driver: it owns the backing message, consumes the invoker's
//! reaction events, and applies transitions until the menu stops or the
//! session times out.

use std::time::Duration;

use serenity::builder::{CreateEmbed, CreateEmbedFooter, CreateMessage, EditMessage};
use serenity::futures::StreamExt;
use serenity::model::channel::ReactionType;
use serenity::model::id::{ChannelId, UserId};
use serenity::prelude::Context;
use thiserror::Error;
use tracing::debug;

use crate::constants::MENU_TIMEOUT_SECS;
use crate::ui::style;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("cannot paginate an empty list")]
    EmptyList,
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// A menu is either showing a page or has been stopped. `Stopped` is
/// terminal: no action leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Active { page: usize },
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    First,
    Previous,
    Next,
    Last,
    Stop,
}

/// Fixed ordered list of entries shown a page at a time.
///
/// Row labels are 1-indexed positions in the backing list, so an entry keeps
/// its number no matter which page it is rendered on.
#[derive(Debug)]
pub struct ListMenu {
    items: Vec<String>,
    page_size: usize,
    state: MenuState,
}

impl ListMenu {
    /// Rejects empty lists and zero page sizes before anything is sent.
    pub fn new(items: Vec<String>, page_size: usize) -> Result<Self, MenuError> {
        if page_size == 0 {
            return Err(MenuError::ZeroPageSize);
        }
        if items.is_empty() {
            return Err(MenuError::EmptyList);
        }
        Ok(Self {
            items,
            page_size,
            state: MenuState::Active { page: 0 },
        })
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Current page index, `None` once stopped.
    pub fn page(&self) -> Option<usize> {
        match self.state {
            MenuState::Active { page } => Some(page),
            MenuState::Stopped => None,
        }
    }

    /// Highest valid page index: `ceil(len / page_size) - 1`.
    pub fn max_page(&self) -> usize {
        (self.items.len() - 1) / self.page_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Apply one transition. Returns whether anything render-worthy changed:
    /// boundary no-ops (Next on the last page, Previous on the first) and
    /// any action after Stop report `false`.
    pub fn apply(&mut self, action: MenuAction) -> bool {
        let MenuState::Active { page } = self.state else {
            return false;
        };
        match action {
            MenuAction::First => self.go_to(page, 0),
            MenuAction::Previous => self.go_to(page, page.saturating_sub(1)),
            MenuAction::Next => self.go_to(page, (page + 1).min(self.max_page())),
            MenuAction::Last => self.go_to(page, self.max_page()),
            MenuAction::Stop => {
                self.state = MenuState::Stopped;
                true
            }
        }
    }

    fn go_to(&mut self, current: usize, target: usize) -> bool {
        if current == target {
            return false;
        }
        self.state = MenuState::Active { page: target };
        true
    }

    /// Item-index window `[start, end)` of the current page.
    pub fn page_window(&self) -> (usize, usize) {
        let page = self.page().unwrap_or(0);
        let start = page * self.page_size;
        let end = (start + self.page_size).min(self.items.len());
        (start, end)
    }

    /// Rendered rows of the current page, each prefixed with its stable
    /// 1-indexed label.
    pub fn page_rows(&self) -> Vec<String> {
        let (start, end) = self.page_window();
        self.items[start..end]
            .iter()
            .enumerate()
            .map(|(offset, item)| format!("`[{}]` {}", start + offset + 1, item))
            .collect()
    }
}

/// Map a reaction emoji to a navigation action. Anything that is not a
/// known navigation affordance is ignored by the driver.
pub fn action_for(emoji: &ReactionType) -> Option<MenuAction> {
    let ReactionType::Unicode(emoji) = emoji else {
        return None;
    };
    match emoji.as_str() {
        style::EMOJI_FIRST => Some(MenuAction::First),
        style::EMOJI_PREVIOUS => Some(MenuAction::Previous),
        style::EMOJI_NEXT => Some(MenuAction::Next),
        style::EMOJI_LAST => Some(MenuAction::Last),
        style::EMOJI_STOP => Some(MenuAction::Stop),
        _ => None,
    }
}

/// Navigation affordances worth attaching for a given page count. First/last
/// jumps only earn their space once there are at least three pages.
fn nav_emojis(max_page: usize) -> &'static [&'static str] {
    match max_page {
        0 => &[style::EMOJI_STOP],
        1 => &[style::EMOJI_PREVIOUS, style::EMOJI_NEXT, style::EMOJI_STOP],
        _ => &[
            style::EMOJI_FIRST,
            style::EMOJI_PREVIOUS,
            style::EMOJI_NEXT,
            style::EMOJI_LAST,
            style::EMOJI_STOP,
        ],
    }
}

fn render(menu: &ListMenu, title: &str) -> CreateEmbed {
    let page = menu.page().unwrap_or(0);
    CreateEmbed::new()
        .title(title)
        .description(menu.page_rows().join("\n"))
        .color(style::COLOR_MENU)
        .footer(CreateEmbedFooter::new(format!(
            "Page {}/{} • {} entries",
            page + 1,
            menu.max_page() + 1,
            menu.len()
        )))
}

/// Drive a menu on a fresh message until it is stopped or times out.
///
/// Only reactions from `invoker` are consumed; every handled reaction is
/// removed again so the affordance can be pressed repeatedly. Stopping
/// deletes the backing message, which may already be gone, so the deletion
/// result is inspected but never surfaced. A timeout leaves the message in
/// place.
pub async fn run(
    ctx: &Context,
    channel_id: ChannelId,
    invoker: UserId,
    mut menu: ListMenu,
    title: &str,
) -> serenity::Result<()> {
    let embed = render(&menu, title);
    let mut message = channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await?;
    for &emoji in nav_emojis(menu.max_page()) {
        message.react(&ctx.http, style::unicode(emoji)).await?;
    }

    let mut reactions = message
        .await_reactions(&ctx.shard)
        .author_id(invoker)
        .timeout(Duration::from_secs(MENU_TIMEOUT_SECS))
        .stream();

    while let Some(reaction) = reactions.next().await {
        let Some(action) = action_for(&reaction.emoji) else {
            continue;
        };
        reaction.delete(&ctx.http).await.ok();
        if !menu.apply(action) {
            continue;
        }
        match menu.state() {
            MenuState::Stopped => {
                if let Err(err) = message.delete(&ctx.http).await {
                    debug!(error = ?err, "menu message already gone on stop");
                }
                return Ok(());
            }
            MenuState::Active { .. } => {
                let embed = render(&menu, title);
                message
                    .edit(&ctx.http, EditMessage::new().embed(embed))
                    .await
                    .ok();
            }
        }
    }
    Ok(())
}
