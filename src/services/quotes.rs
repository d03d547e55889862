//! Thin client for the Finnhub quote API.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("quote request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unknown ticker: {0}")]
    UnknownTicker(String),
}

/// A single quote snapshot as the API reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    #[serde(rename = "c")]
    pub current: f64,
    #[serde(rename = "h")]
    pub high: f64,
    #[serde(rename = "l")]
    pub low: f64,
    #[serde(rename = "o")]
    pub open: f64,
    #[serde(rename = "pc")]
    pub previous_close: f64,
}

impl Quote {
    /// Whole-dollar unit price used by the ledger. The API reports
    /// fractional prices; positions are traded at the rounded value.
    pub fn unit_price(&self) -> i64 {
        self.current.round() as i64
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymbolMatch {
    pub symbol: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    result: Vec<SymbolMatch>,
}

/// Shared HTTP client plus API credentials. Cheap to clone.
#[derive(Clone)]
pub struct QuoteClient {
    http: Client,
    token: String,
    base_url: String,
}

impl QuoteClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            token,
            base_url,
        }
    }

    /// Fetch the current quote for a ticker.
    ///
    /// The API answers unknown tickers with a zeroed quote rather than an
    /// error status, so that case is turned into a typed error here.
    pub async fn quote(&self, ticker: &str) -> Result<Quote, QuoteError> {
        let quote: Quote = self
            .http
            .get(format!("{}/quote", self.base_url))
            .query(&[("symbol", ticker), ("token", self.token.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        if quote.current == 0.0 {
            return Err(QuoteError::UnknownTicker(ticker.to_string()));
        }
        Ok(quote)
    }

    /// Symbol search; an empty result list is not an error.
    pub async fn search(&self, query: &str) -> Result<Vec<SymbolMatch>, QuoteError> {
        let response: SearchResponse = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&[("q", query), ("token", self.token.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.result)
    }
}
