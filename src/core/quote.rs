//! Quote provider abstraction

use super::currency::RateSet;
use anyhow::Result;
use async_trait::async_trait;

/// Fetches a complete [`RateSet`] for the fixed quote currencies in one request.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_rates(&self) -> Result<RateSet>;
}
