use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, instrument};

use crate::core::currency::{BASE_CURRENCY, QuoteCurrency, RateSet};
use crate::core::quote::QuoteProvider;

/// Quotes from the AwesomeAPI `json/last` endpoint.
pub struct AwesomeApiProvider {
    base_url: String,
    client: reqwest::Client,
}

impl AwesomeApiProvider {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("cambio/1.0")
            .build()
            .context("Failed to build HTTP client")?;
        Ok(AwesomeApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self) -> String {
        let pairs: Vec<String> = QuoteCurrency::ALL
            .iter()
            .map(|c| format!("{}-{}", c.code(), BASE_CURRENCY))
            .collect();
        format!("{}/json/last/{}", self.base_url, pairs.join(","))
    }
}

#[derive(Debug, Deserialize)]
struct PairQuote {
    bid: String,
}

fn parse_bid(quotes: &HashMap<String, PairQuote>, currency: QuoteCurrency) -> Result<f64> {
    let key = currency.pair_key();
    let quote = quotes
        .get(&key)
        .ok_or_else(|| anyhow!("No quote found for currency pair: {}", key))?;
    quote
        .bid
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid bid for {}: {:?}", key, quote.bid))
}

#[async_trait]
impl QuoteProvider for AwesomeApiProvider {
    #[instrument(name = "AwesomeApiFetch", skip(self))]
    async fn fetch_rates(&self) -> Result<RateSet> {
        let url = self.url();
        debug!("Requesting quotes from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {} URL: {}", response.status(), url));
        }

        let text = response.text().await?;
        let quotes: HashMap<String, PairQuote> = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response: {}", e))?;

        let mut rates = BTreeMap::new();
        for currency in QuoteCurrency::ALL {
            rates.insert(currency, parse_bid(&quotes, currency)?);
        }
        RateSet::from_rates(rates)
    }
}
