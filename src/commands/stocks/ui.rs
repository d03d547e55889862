//! Formatting helpers for the stock commands.

use crate::database::models::StockPosition;
use crate::services::quotes::Quote;

/// Render held positions as a GitHub-style table for a code block.
pub fn portfolio_table(positions: &[StockPosition]) -> String {
    let ticker_width = positions
        .iter()
        .map(|position| position.ticker.len())
        .chain(std::iter::once("ticker".len()))
        .max()
        .unwrap_or(0);
    let amount_width = positions
        .iter()
        .map(|position| position.amount.to_string().len())
        .chain(std::iter::once("amount".len()))
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        format!(
            "| {:<ticker_width$} | {:>amount_width$} |",
            "ticker", "amount"
        ),
        format!(
            "|{:-<width_t$}|{:-<width_a$}|",
            "",
            "",
            width_t = ticker_width + 2,
            width_a = amount_width + 2
        ),
    ];
    for position in positions {
        lines.push(format!(
            "| {:<ticker_width$} | {:>amount_width$} |",
            position.ticker, position.amount
        ));
    }
    lines.join("\n")
}

/// Render a quote the way the lookup command prints it.
pub fn quote_block(quote: &Quote) -> String {
    format!(
        "```yaml\nCurrent: {}\nDaily High: {}\nDaily Low: {}\nOpening: {}\nPrevious Close: {}```",
        quote.current, quote.high, quote.low, quote.open, quote.previous_close
    )
}
