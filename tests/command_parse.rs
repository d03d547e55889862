//! Tests for prefix command-name resolution.

use std::str::FromStr;

use bursar_bot::handler::Command;

#[test]
fn canonical_names_resolve() {
    assert_eq!(Command::from_str("ping"), Ok(Command::Ping));
    assert_eq!(Command::from_str("info"), Ok(Command::Info));
    assert_eq!(Command::from_str("help"), Ok(Command::Help));
    assert_eq!(Command::from_str("todo"), Ok(Command::Todo));
    assert_eq!(Command::from_str("buy"), Ok(Command::Buy));
    assert_eq!(Command::from_str("sell"), Ok(Command::Sell));
    assert_eq!(Command::from_str("portfolio"), Ok(Command::Portfolio));
    assert_eq!(Command::from_str("lookup"), Ok(Command::Lookup));
    assert_eq!(Command::from_str("check"), Ok(Command::Check));
    assert_eq!(Command::from_str("dividend"), Ok(Command::Dividend));
}

#[test]
fn aliases_resolve_to_the_same_command() {
    assert_eq!(Command::from_str("botinfo"), Ok(Command::Info));
    assert_eq!(Command::from_str("information"), Ok(Command::Info));
    assert_eq!(Command::from_str("h"), Ok(Command::Help));
    assert_eq!(Command::from_str("todos"), Ok(Command::Todo));
    assert_eq!(Command::from_str("port"), Ok(Command::Portfolio));
    assert_eq!(Command::from_str("stocks"), Ok(Command::Portfolio));
    assert_eq!(Command::from_str("stock_lookup"), Ok(Command::Lookup));
    assert_eq!(Command::from_str("div"), Ok(Command::Dividend));
}

#[test]
fn anything_else_is_unknown() {
    assert_eq!(Command::from_str(""), Ok(Command::Unknown));
    assert_eq!(Command::from_str("PING"), Ok(Command::Unknown));
    assert_eq!(Command::from_str("frobnicate"), Ok(Command::Unknown));
}
