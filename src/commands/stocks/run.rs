//! Implements the stock trading commands: buy, sell, portfolio, lookup,
//! check, dividend.
//!
//! Buying and selling are gated behind a reaction confirmation prompt; the
//! prompt message is edited into a receipt (or a cancellation notice)
//! afterwards.

use serenity::builder::{CreateEmbed, CreateMessage, EditMessage};
use serenity::model::channel::Message;
use serenity::model::id::UserId;
use serenity::prelude::*;
use tracing::warn;

use super::logic::{self, AmountError};
use super::ui;
use crate::database::init::DbPool;
use crate::services::quotes::{Quote, QuoteError};
use crate::ui::{confirm, dismiss, style};
use crate::{database, AppState};

const DEFAULT_TICKER: &str = "MSFT";

pub async fn buy(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let ticker = args.first().copied().unwrap_or(DEFAULT_TICKER).to_uppercase();
    let amount_arg = args.get(1).copied().unwrap_or("1");

    let wallet = match database::economy::get_or_create_wallet(&app_state.db, msg.author.id).await {
        Ok(wallet) => wallet,
        Err(err) => {
            warn!(error = %err, "wallet lookup failed");
            return;
        }
    };
    let Some(quote) = fetch_quote(ctx, msg, &app_state, &ticker).await else {
        return;
    };
    let unit_price = quote.unit_price();

    let amount = match logic::resolve_buy_amount(amount_arg, wallet.balance, unit_price) {
        Ok(amount) => amount,
        Err(AmountError::CannotAffordAny) => {
            msg.reply(
                &ctx.http,
                format!(
                    "You don't have enough money to buy a share of {ticker}. You need **${}** more in order to purchase a share of {ticker}.",
                    logic::intcomma(unit_price - wallet.balance)
                ),
            )
            .await
            .ok();
            return;
        }
        Err(_) => {
            msg.reply(&ctx.http, "Invalid amount provided.").await.ok();
            return;
        }
    };

    let total = amount * unit_price;
    let noun = logic::share_noun(amount);
    if total > wallet.balance {
        msg.reply(
            &ctx.http,
            format!(
                "You need **${}** more in order to purchase **{amount}** {noun} of **{ticker}**.",
                logic::intcomma(total - wallet.balance)
            ),
        )
        .await
        .ok();
        return;
    }

    let prompt = format!(
        "Confirm to buy **{amount}** {noun} of **{ticker}** at **${}** per share for a total of **${}**.",
        logic::intcomma(unit_price),
        logic::intcomma(total)
    );
    let Ok((accepted, mut message)) =
        confirm::confirm(ctx, msg.channel_id, msg.author.id, prompt).await
    else {
        return;
    };

    let content = if accepted {
        match execute_buy(&app_state.db, msg.author.id, &ticker, amount, total).await {
            Ok(()) => format!(
                "Purchased **{amount}** {noun} of **{ticker}** for **${}**.",
                logic::intcomma(total)
            ),
            Err(err) => {
                warn!(error = %err, %ticker, "buy transaction failed");
                "The purchase could not be completed.".to_string()
            }
        }
    } else {
        "Cancelled the transaction.".to_string()
    };
    message
        .edit(&ctx.http, EditMessage::new().content(content))
        .await
        .ok();
}

pub async fn sell(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let ticker = args.first().copied().unwrap_or(DEFAULT_TICKER).to_uppercase();
    let amount_arg = args.get(1).copied().unwrap_or("1");

    let position = match database::stocks::get_position(&app_state.db, msg.author.id, &ticker).await
    {
        Ok(position) => position,
        Err(err) => {
            warn!(error = %err, "position lookup failed");
            return;
        }
    };
    let Some(position) = position else {
        msg.reply(
            &ctx.http,
            format!("You don't have any shares of **{ticker}**."),
        )
        .await
        .ok();
        return;
    };

    let amount = match logic::resolve_sell_amount(amount_arg, position.amount) {
        Ok(amount) => amount,
        Err(_) => {
            msg.reply(&ctx.http, "Invalid amount provided.").await.ok();
            return;
        }
    };
    if amount > position.amount {
        msg.reply(
            &ctx.http,
            format!(
                "You only have {} {} of {ticker}.",
                position.amount,
                logic::share_noun(position.amount)
            ),
        )
        .await
        .ok();
        return;
    }

    let Some(quote) = fetch_quote(ctx, msg, &app_state, &ticker).await else {
        return;
    };
    let unit_price = quote.unit_price();
    let total = amount * unit_price;
    let noun = logic::share_noun(amount);

    let prompt = format!(
        "Confirm to sell **{amount}** {noun} of **{ticker}** at **${}** per share for a total of **${}**.",
        logic::intcomma(unit_price),
        logic::intcomma(total)
    );
    let Ok((accepted, mut message)) =
        confirm::confirm(ctx, msg.channel_id, msg.author.id, prompt).await
    else {
        return;
    };

    let content = if accepted {
        match execute_sell(&app_state.db, msg.author.id, &ticker, amount, total).await {
            Ok(()) => format!(
                "Sold **{amount}** {noun} of **{ticker}** for **${}**.",
                logic::intcomma(total)
            ),
            Err(err) => {
                warn!(error = %err, %ticker, "sell transaction failed");
                "The sale could not be completed.".to_string()
            }
        }
    } else {
        "Cancelled the transaction.".to_string()
    };
    message
        .edit(&ctx.http, EditMessage::new().content(content))
        .await
        .ok();
}

pub async fn portfolio(ctx: &Context, msg: &Message, _args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let target = msg.mentions.first().unwrap_or(&msg.author);

    let positions = match database::stocks::list_positions(&app_state.db, target.id).await {
        Ok(positions) => positions,
        Err(err) => {
            warn!(error = %err, "portfolio lookup failed");
            return;
        }
    };
    if positions.is_empty() {
        msg.reply(&ctx.http, format!("{} has no stocks.", target.name))
            .await
            .ok();
        return;
    }

    let embed = style::stamp(
        CreateEmbed::new()
            .title(format!("{}'s stocks:", target.name))
            .description(format!("```\n{}```", ui::portfolio_table(&positions)))
            .color(style::COLOR_EMBED),
        &msg.author,
    );
    dismiss::send_dismissable(
        ctx,
        msg.channel_id,
        msg.author.id,
        CreateMessage::new().embed(embed),
    )
    .await
    .ok();
}

pub async fn lookup(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(ticker) = args.first().map(|raw| raw.to_uppercase()) else {
        msg.reply(&ctx.http, "Usage: `lookup <ticker>`").await.ok();
        return;
    };
    let Some(quote) = fetch_quote(ctx, msg, &app_state, &ticker).await else {
        return;
    };
    dismiss::send_dismissable(
        ctx,
        msg.channel_id,
        msg.author.id,
        CreateMessage::new().content(ui::quote_block(&quote)),
    )
    .await
    .ok();
}

/// React ✅/❌ on the invoking message depending on whether the query is a
/// known ticker; an exact match also shows the lookup.
pub async fn check(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(query) = args.first().map(|raw| raw.to_uppercase()) else {
        msg.reply(&ctx.http, "Usage: `check <query>`").await.ok();
        return;
    };

    let matches = match app_state.quotes.search(&query).await {
        Ok(matches) => matches,
        Err(err) => {
            warn!(error = %err, "symbol search failed");
            return;
        }
    };

    let exact = matches
        .first()
        .is_some_and(|symbol_match| symbol_match.symbol == query);
    if exact {
        msg.react(&ctx.http, style::unicode(style::EMOJI_ACCEPT))
            .await
            .ok();
        lookup(ctx, msg, vec![query.as_str()]).await;
    } else {
        msg.react(&ctx.http, style::unicode(style::EMOJI_DECLINE))
            .await
            .ok();
    }
}

pub async fn dividend(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let parsed = match (args.first(), args.get(1), args.get(2)) {
        (Some(y), Some(p), Some(s)) => match (y.parse::<f64>(), p.parse::<f64>(), s.parse::<i64>())
        {
            (Ok(yield_pct), Ok(price), Ok(shares)) => Some((yield_pct, price, shares)),
            _ => None,
        },
        _ => None,
    };
    let Some((yield_pct, price, shares)) = parsed else {
        msg.reply(&ctx.http, "Usage: `dividend <yield%> <price> <shares>`")
            .await
            .ok();
        return;
    };
    let payout = logic::dividend_payout(yield_pct, price, shares);
    msg.reply(&ctx.http, format!("${payout:.2}")).await.ok();
}

/// Fetch a quote, translating an unknown ticker into the stock reply every
/// command uses and anything else into a service-unavailable notice.
async fn fetch_quote(
    ctx: &Context,
    msg: &Message,
    app_state: &AppState,
    ticker: &str,
) -> Option<Quote> {
    match app_state.quotes.quote(ticker).await {
        Ok(quote) => Some(quote),
        Err(QuoteError::UnknownTicker(_)) => {
            msg.reply(&ctx.http, "Invalid stock provided.").await.ok();
            None
        }
        Err(err) => {
            warn!(error = %err, %ticker, "quote fetch failed");
            msg.reply(&ctx.http, "The quote service is unavailable right now.")
                .await
                .ok();
            None
        }
    }
}

async fn execute_buy(
    pool: &DbPool,
    user_id: UserId,
    ticker: &str,
    amount: i64,
    total: i64,
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    database::economy::add_balance(&mut tx, user_id, -total).await?;
    database::stocks::add_shares(&mut tx, user_id, ticker, amount).await?;
    tx.commit().await
}

async fn execute_sell(
    pool: &DbPool,
    user_id: UserId,
    ticker: &str,
    amount: i64,
    total: i64,
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    database::stocks::remove_shares(&mut tx, user_id, ticker, amount).await?;
    database::economy::add_balance(&mut tx, user_id, total).await?;
    tx.commit().await
}
