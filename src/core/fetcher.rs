use super::cache::RateCache;
use super::clock::{Clock, SystemClock};
use super::currency::RateSet;
use super::error::ConversionError;
use super::quote::QuoteProvider;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Serves rates from the cache while fresh, otherwise fetches from the provider.
///
/// The cache lock is released before the provider is called, so overlapping
/// calls on a stale cache each issue their own request.
pub struct RateFetcher {
    provider: Box<dyn QuoteProvider>,
    cache: Arc<RateCache>,
    clock: Arc<dyn Clock>,
}

impl RateFetcher {
    pub fn new(provider: Box<dyn QuoteProvider>, cache: Arc<RateCache>) -> Self {
        Self::with_clock(provider, cache, Arc::new(SystemClock))
    }

    pub fn with_clock(
        provider: Box<dyn QuoteProvider>,
        cache: Arc<RateCache>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            provider,
            cache,
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    #[instrument(name = "GetRates", skip(self))]
    pub async fn get_rates(&self) -> Result<Arc<RateSet>, ConversionError> {
        if let Some(rates) = self.cache.get_fresh(self.clock.now_millis()).await {
            return Ok(rates);
        }

        debug!("Fetching rates from quote provider");
        let rates = match self.provider.fetch_rates().await {
            Ok(rates) => Arc::new(rates),
            Err(e) => {
                warn!(error = %e, "Failed to fetch rates");
                return Err(ConversionError::Network(e));
            }
        };

        self.cache
            .store(Arc::clone(&rates), self.clock.now_millis())
            .await;
        Ok(rates)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::clock::testing::ManualClock;
    use crate::core::error::NETWORK_MESSAGE;
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    /// Provider returning fixed rates, optionally failing, and counting calls.
    pub struct MockQuoteProvider {
        pub calls: Arc<AtomicUsize>,
        pub fail: Arc<AtomicBool>,
        rates: RateSet,
        delay: Option<Duration>,
    }

    impl MockQuoteProvider {
        pub fn new(usd: f64, eur: f64) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                fail: Arc::new(AtomicBool::new(false)),
                rates: RateSet::new(usd, eur).unwrap(),
                delay: None,
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }
    }

    #[async_trait]
    impl QuoteProvider for MockQuoteProvider {
        async fn fetch_rates(&self) -> Result<RateSet> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail.load(Ordering::SeqCst) {
                return Err(anyhow!("connection refused"));
            }
            Ok(self.rates.clone())
        }
    }

    fn fetcher_with(provider: MockQuoteProvider, clock: Arc<ManualClock>) -> RateFetcher {
        RateFetcher::with_clock(Box::new(provider), Arc::new(RateCache::new()), clock)
    }

    #[tokio::test]
    async fn test_second_call_within_duration_hits_cache() {
        let provider = MockQuoteProvider::new(5.0, 6.0);
        let calls = Arc::clone(&provider.calls);
        let clock = Arc::new(ManualClock::at(1_000_000));
        let fetcher = fetcher_with(provider, Arc::clone(&clock));

        let first = fetcher.get_rates().await.unwrap();
        clock.advance(59_999);
        let second = fetcher.get_rates().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_expired_cache_refetches_once() {
        let provider = MockQuoteProvider::new(5.0, 6.0);
        let calls = Arc::clone(&provider.calls);
        let clock = Arc::new(ManualClock::at(1_000_000));
        let fetcher = fetcher_with(provider, Arc::clone(&clock));

        let first = fetcher.get_rates().await.unwrap();
        clock.advance(60_000);
        let second = fetcher.get_rates().await.unwrap();
        let third = fetcher.get_rates().await.unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&second, &third));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_cache_untouched() {
        let provider = MockQuoteProvider::new(5.0, 6.0);
        let fail = Arc::clone(&provider.fail);
        let calls = Arc::clone(&provider.calls);
        let clock = Arc::new(ManualClock::at(1_000_000));
        let cache = Arc::new(RateCache::new());
        let fetcher = RateFetcher::with_clock(
            Box::new(provider),
            Arc::clone(&cache),
            Arc::clone(&clock) as Arc<dyn Clock>,
        );

        let cached = fetcher.get_rates().await.unwrap();
        clock.advance(61_000);
        fail.store(true, Ordering::SeqCst);

        let err = fetcher.get_rates().await.unwrap_err();
        assert!(matches!(err, ConversionError::Network(_)));
        assert_eq!(err.to_string(), NETWORK_MESSAGE);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let entry = cache.entry().await.unwrap();
        assert!(Arc::ptr_eq(&entry.rates, &cached));
        assert_eq!(entry.fetched_at_epoch_millis, 1_000_000);
    }

    #[tokio::test]
    async fn test_failure_without_cache_is_not_retried() {
        let provider = MockQuoteProvider::new(5.0, 6.0);
        provider.fail.store(true, Ordering::SeqCst);
        let calls = Arc::clone(&provider.calls);
        let fetcher = fetcher_with(provider, Arc::new(ManualClock::at(0)));

        assert!(fetcher.get_rates().await.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_calls_on_stale_cache_each_fetch() {
        let provider = MockQuoteProvider::new(5.0, 6.0).with_delay(Duration::from_millis(20));
        let calls = Arc::clone(&provider.calls);
        let fetcher = fetcher_with(provider, Arc::new(ManualClock::at(0)));

        let (a, b) = tokio::join!(fetcher.get_rates(), fetcher.get_rates());

        assert!(a.is_ok() && b.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
