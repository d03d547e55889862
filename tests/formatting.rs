//! Tests for display formatting helpers.

use bursar_bot::commands::info::format_uptime;
use bursar_bot::commands::stocks::ui::{portfolio_table, quote_block};
use bursar_bot::database::models::StockPosition;
use bursar_bot::services::quotes::Quote;

fn position(ticker: &str, amount: i64) -> StockPosition {
    StockPosition {
        ticker: ticker.to_string(),
        amount,
    }
}

#[test]
fn portfolio_table_aligns_columns() {
    let table = portfolio_table(&[position("MSFT", 12), position("GOOG", 5)]);
    let expected = "\
| ticker | amount |
|--------|--------|
| MSFT   |     12 |
| GOOG   |      5 |";
    assert_eq!(table, expected);
}

#[test]
fn portfolio_table_widens_for_long_tickers() {
    let table = portfolio_table(&[position("BRK.A.LONG", 1_000_000)]);
    let lines: Vec<&str> = table.lines().collect();
    assert!(lines[0].contains("ticker"));
    assert!(lines[2].contains("BRK.A.LONG"));
    // All rows share one width.
    assert!(lines.iter().all(|line| line.len() == lines[0].len()));
}

#[test]
fn quote_block_lists_the_five_fields() {
    let quote = Quote {
        current: 123.45,
        high: 130.0,
        low: 120.5,
        open: 125.0,
        previous_close: 124.0,
    };
    let block = quote_block(&quote);
    assert!(block.starts_with("```yaml\n"));
    assert!(block.contains("Current: 123.45"));
    assert!(block.contains("Daily High: 130"));
    assert!(block.contains("Daily Low: 120.5"));
    assert!(block.contains("Opening: 125"));
    assert!(block.contains("Previous Close: 124"));
}

#[test]
fn unit_price_rounds_to_whole_dollars() {
    let mut quote = Quote {
        current: 123.45,
        high: 0.0,
        low: 0.0,
        open: 0.0,
        previous_close: 0.0,
    };
    assert_eq!(quote.unit_price(), 123);
    quote.current = 123.5;
    assert_eq!(quote.unit_price(), 124);
}

#[test]
fn uptime_drops_leading_zero_units() {
    assert_eq!(format_uptime(0), "0m");
    assert_eq!(format_uptime(59), "0m");
    assert_eq!(format_uptime(60), "1m");
    assert_eq!(format_uptime(3_700), "1h 1m");
    assert_eq!(format_uptime(90_061), "1d 1h 1m");
    assert_eq!(format_uptime(-5), "0m");
}
