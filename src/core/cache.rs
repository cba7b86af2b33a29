use super::currency::RateSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

pub const CACHE_DURATION: Duration = Duration::from_millis(60_000);

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub rates: Arc<RateSet>,
    pub fetched_at_epoch_millis: i64,
}

impl CacheEntry {
    pub fn is_fresh(&self, now_millis: i64, duration: Duration) -> bool {
        let age = now_millis - self.fetched_at_epoch_millis;
        i128::from(age) < duration.as_millis() as i128
    }
}

/// Single-slot cache for the last fetched rates.
///
/// The slot is all-or-nothing: a lookup either returns the whole cached
/// [`RateSet`] or nothing, and a store replaces the previous entry wholesale.
pub struct RateCache {
    slot: Mutex<Option<CacheEntry>>,
    duration: Duration,
}

impl RateCache {
    pub fn new() -> Self {
        Self::with_duration(CACHE_DURATION)
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            slot: Mutex::new(None),
            duration,
        }
    }

    /// Returns the cached rates if they were fetched less than `duration` before `now_millis`.
    pub async fn get_fresh(&self, now_millis: i64) -> Option<Arc<RateSet>> {
        let slot = self.slot.lock().await;
        match slot.as_ref() {
            Some(entry) if entry.is_fresh(now_millis, self.duration) => {
                debug!(
                    fetched_at = entry.fetched_at_epoch_millis,
                    "Cache HIT for rates"
                );
                Some(Arc::clone(&entry.rates))
            }
            Some(_) => {
                debug!("Cache entry expired for rates");
                None
            }
            None => {
                debug!("Cache MISS for rates");
                None
            }
        }
    }

    pub async fn store(&self, rates: Arc<RateSet>, fetched_at_epoch_millis: i64) {
        let mut slot = self.slot.lock().await;
        debug!(fetched_at = fetched_at_epoch_millis, "Cache PUT for rates");
        *slot = Some(CacheEntry {
            rates,
            fetched_at_epoch_millis,
        });
    }

    pub async fn entry(&self) -> Option<CacheEntry> {
        self.slot.lock().await.clone()
    }
}

impl Default for RateCache {
    fn default() -> Self {
        Self::new()
    }
}
