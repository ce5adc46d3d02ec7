//! Read-through cache with a fixed time-to-live.
//!
//! The cache owns no fetching logic: callers pass the fetch as a closure,
//! and the clock is injectable, so expiry behavior is testable without
//! real network calls or real waiting. There is no in-flight
//! deduplication; concurrent misses may fetch independently and the last
//! successful result wins.

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use log::{debug, warn};

use crate::errors::SheetDataError;

/// Source of the current instant. Production uses [`SystemClock`]; tests
/// inject a manual clock to step through expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation of [`Clock`].
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

struct CacheEntry<V> {
    value: V,
    fetched_at: DateTime<Utc>,
}

/// Keyed read-through cache with a single TTL for all entries.
pub struct TtlCache<V> {
    entries: DashMap<String, CacheEntry<V>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> TtlCache<V> {
    /// Creates a cache using the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates a cache with an injected clock.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            clock,
        }
    }

    /// Returns the cached value for `key`, running `fetch` when the entry
    /// is absent or older than the TTL.
    ///
    /// A failed refresh falls back to the expired entry when one exists,
    /// so a transient fetch problem never empties an already-rendered
    /// dashboard; the error is only surfaced when there is nothing to
    /// serve at all.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> Result<V, SheetDataError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, SheetDataError>>,
    {
        let now = self.clock.now();

        // Drop the map guard before awaiting the fetch.
        let stale = match self.entries.get(key) {
            Some(entry) if now - entry.fetched_at < self.ttl => {
                debug!("Cache hit for '{}'", key);
                return Ok(entry.value.clone());
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        };

        debug!("Cache miss for '{}', fetching", key);
        match fetch().await {
            Ok(value) => {
                self.entries.insert(
                    key.to_string(),
                    CacheEntry {
                        value: value.clone(),
                        fetched_at: now,
                    },
                );
                Ok(value)
            }
            Err(err) => match stale {
                Some(value) => {
                    warn!("Refresh of '{}' failed ({}), serving stale entry", key, err);
                    Ok(value)
                }
                None => Err(err),
            },
        }
    }

    /// Removes an entry, forcing the next read to fetch.
    pub fn invalidate(&self, key: &str) {
        self.entries.remove(key);
    }
}
