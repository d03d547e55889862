//! Gateway event handler: prefix parsing and command dispatch.

use std::str::FromStr;

use serenity::async_trait;
use serenity::client::Context;
use serenity::model::{channel::Message, gateway::Ready};
use serenity::prelude::EventHandler;
use tracing::info;

use crate::{commands, AppState};

/// Every command the bot answers to, resolved from the first word after the
/// prefix. An explicit enum keeps dispatch exhaustive; there is no
/// string-keyed lookup at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    Info,
    Help,
    Todo,
    Buy,
    Sell,
    Portfolio,
    Lookup,
    Check,
    Dividend,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ping" => Ok(Command::Ping),
            "info" | "botinfo" | "information" => Ok(Command::Info),
            "help" | "h" => Ok(Command::Help),
            "todo" | "todos" => Ok(Command::Todo),
            "buy" => Ok(Command::Buy),
            "sell" => Ok(Command::Sell),
            "portfolio" | "port" | "stocks" => Ok(Command::Portfolio),
            "lookup" | "stock_lookup" => Ok(Command::Lookup),
            "check" => Ok(Command::Check),
            "dividend" | "div" => Ok(Command::Dividend),
            _ => Ok(Command::Unknown),
        }
    }
}

pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        let Some(command_body) = msg.content.strip_prefix(&app_state.prefix) else {
            return;
        };
        let mut args = command_body.split_whitespace();
        let Some(command_str) = args.next() else {
            return;
        };
        let command = Command::from_str(command_str).unwrap_or(Command::Unknown);
        let args_vec: Vec<&str> = args.collect();
        match command {
            Command::Ping => commands::ping::run(&ctx, &msg).await,
            Command::Info => commands::info::run(&ctx, &msg).await,
            Command::Help => commands::help::run(&ctx, &msg).await,
            Command::Todo => commands::todo::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::Buy => commands::stocks::run::buy(&ctx, &msg, args_vec).await,
            Command::Sell => commands::stocks::run::sell(&ctx, &msg, args_vec).await,
            Command::Portfolio => commands::stocks::run::portfolio(&ctx, &msg, args_vec).await,
            Command::Lookup => commands::stocks::run::lookup(&ctx, &msg, args_vec).await,
            Command::Check => commands::stocks::run::check(&ctx, &msg, args_vec).await,
            Command::Dividend => commands::stocks::run::dividend(&ctx, &msg, args_vec).await,
            Command::Unknown => {}
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected and ready!", ready.user.name);
    }
}
