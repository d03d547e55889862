//! Pure argument parsing and arithmetic for the stock commands.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("invalid amount provided")]
    Invalid,
    #[error("amount must be at least 1")]
    NotPositive,
    #[error("cannot afford a single share")]
    CannotAffordAny,
}

/// Resolve a requested purchase amount. `max` buys as many whole shares as
/// the wallet covers at the quoted unit price.
pub fn resolve_buy_amount(raw: &str, wallet: i64, unit_price: i64) -> Result<i64, AmountError> {
    if raw.eq_ignore_ascii_case("max") {
        let affordable = wallet / unit_price.max(1);
        if affordable == 0 {
            return Err(AmountError::CannotAffordAny);
        }
        return Ok(affordable);
    }
    let amount: i64 = raw.parse().map_err(|_| AmountError::Invalid)?;
    if amount < 1 {
        return Err(AmountError::NotPositive);
    }
    Ok(amount)
}

/// Resolve a requested sale amount. `max` sells the entire held position;
/// the caller has already established that shares are held.
pub fn resolve_sell_amount(raw: &str, held: i64) -> Result<i64, AmountError> {
    if raw.eq_ignore_ascii_case("max") {
        return Ok(held);
    }
    let amount: i64 = raw.parse().map_err(|_| AmountError::Invalid)?;
    if amount < 1 {
        return Err(AmountError::NotPositive);
    }
    Ok(amount)
}

/// Annual dividend payout for a position; `yield_pct` is a percentage, e.g.
/// `5.79` for 5.79%.
pub fn dividend_payout(yield_pct: f64, unit_price: f64, shares: i64) -> f64 {
    unit_price * shares as f64 * (yield_pct / 100.0)
}

/// Format an integer with thousands separators: `1234567` → `1,234,567`.
pub fn intcomma(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut groups: Vec<&str> = Vec::new();
    let mut end = digits.len();
    while end > 3 {
        groups.push(&digits[end - 3..end]);
        end -= 3;
    }
    groups.push(&digits[..end]);
    groups.reverse();
    let joined = groups.join(",");
    if value < 0 {
        format!("-{joined}")
    } else {
        joined
    }
}

pub fn share_noun(count: i64) -> &'static str {
    if count == 1 {
        "share"
    } else {
        "shares"
    }
}
