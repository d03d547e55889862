//! Tests for the pure stock-command logic.

use bursar_bot::commands::stocks::logic::{
    dividend_payout, intcomma, resolve_buy_amount, resolve_sell_amount, share_noun, AmountError,
};

#[test]
fn numeric_buy_amounts_pass_through() {
    assert_eq!(resolve_buy_amount("3", 1_000, 100), Ok(3));
    assert_eq!(resolve_buy_amount("1", 50, 100), Ok(1));
}

#[test]
fn max_buys_what_the_wallet_covers() {
    assert_eq!(resolve_buy_amount("max", 1_050, 100), Ok(10));
    assert_eq!(resolve_buy_amount("MAX", 99, 33), Ok(3));
}

#[test]
fn max_with_no_affordable_share_is_an_error() {
    assert_eq!(
        resolve_buy_amount("max", 99, 100),
        Err(AmountError::CannotAffordAny)
    );
}

#[test]
fn garbage_buy_amounts_are_rejected() {
    assert_eq!(resolve_buy_amount("lots", 1_000, 100), Err(AmountError::Invalid));
    assert_eq!(resolve_buy_amount("0", 1_000, 100), Err(AmountError::NotPositive));
    assert_eq!(resolve_buy_amount("-4", 1_000, 100), Err(AmountError::NotPositive));
}

#[test]
fn sell_amounts_resolve_against_the_position() {
    assert_eq!(resolve_sell_amount("max", 7), Ok(7));
    assert_eq!(resolve_sell_amount("2", 7), Ok(2));
    assert_eq!(resolve_sell_amount("two", 7), Err(AmountError::Invalid));
    assert_eq!(resolve_sell_amount("0", 7), Err(AmountError::NotPositive));
}

#[test]
fn dividend_payout_is_yield_of_position_value() {
    let payout = dividend_payout(5.79, 100.0, 10);
    assert!((payout - 57.9).abs() < 1e-9);
    assert_eq!(dividend_payout(0.0, 100.0, 10), 0.0);
}

#[test]
fn intcomma_groups_thousands() {
    assert_eq!(intcomma(0), "0");
    assert_eq!(intcomma(1), "1");
    assert_eq!(intcomma(999), "999");
    assert_eq!(intcomma(1_000), "1,000");
    assert_eq!(intcomma(1_234_567), "1,234,567");
    assert_eq!(intcomma(-1_234_567), "-1,234,567");
}

#[test]
fn share_noun_pluralizes() {
    assert_eq!(share_noun(1), "share");
    assert_eq!(share_noun(0), "shares");
    assert_eq!(share_noun(12), "shares");
}
