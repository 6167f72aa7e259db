//! Result Cache: process-wide (subject, category) -> value store with
//! per-entry TTL.
//!
//! The cache exists to make repeated external model calls unnecessary, so its
//! operations never fail and never block on I/O. Entries expire lazily at
//! read time and in a sweep that runs when a write pushes the entry count
//! past the configured threshold. Live entries are never evicted under size
//! pressure, only expired ones.

pub mod clock;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

pub use clock::{Clock, SystemClock};

// ────────────────────────────────────────────────────────────────────────────
// Keys and entries
// ────────────────────────────────────────────────────────────────────────────

/// Default time-to-live for stored results (24 hours).
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60 * 24);

/// Entry count that triggers an expired-entry sweep on write.
pub const DEFAULT_SWEEP_THRESHOLD: usize = 100;

/// Namespaced cache key: `subject` identifies the analyzed input, `category`
/// the analysis kind computed from it. Both are opaque to the cache; key
/// derivation is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub subject: String,
    pub category: String,
}

impl CacheKey {
    pub fn new(subject: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            category: category.into(),
        }
    }
}

struct Entry<V> {
    value: V,
    stored_at: Instant,
    ttl: Duration,
}

impl<V> Entry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.stored_at) > self.ttl
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cache
// ────────────────────────────────────────────────────────────────────────────

/// In-process result cache with per-entry TTL.
///
/// A single mutex guards the whole map. The workload this shields is a model
/// call measured in seconds, so lock contention on microsecond operations is
/// not a practical concern. Holding the lock across the expiry check and the
/// eviction also means a sweep can never delete an entry written after a
/// concurrent read observed the old one expired.
pub struct ResultCache<V> {
    entries: Mutex<HashMap<CacheKey, Entry<V>>>,
    default_ttl: Duration,
    sweep_threshold: usize,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> ResultCache<V> {
    pub fn new(default_ttl: Duration, sweep_threshold: usize) -> Self {
        Self::with_clock(default_ttl, sweep_threshold, Arc::new(SystemClock))
    }

    /// Builds a cache with an explicit clock. Production code uses `new`;
    /// tests inject a manually advanced clock.
    pub fn with_clock(
        default_ttl: Duration,
        sweep_threshold: usize,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            default_ttl,
            sweep_threshold,
            clock,
        }
    }

    /// Returns the stored value if present and not expired. An entry observed
    /// to be expired is removed, not merely hidden, so `len` stays accurate.
    pub fn get(&self, key: &CacheKey) -> Option<V> {
        let now = self.clock.now();
        let mut entries = self.entries.lock();

        match entries.get(key) {
            Some(entry) if !entry.is_expired(now) => return Some(entry.value.clone()),
            Some(_) => {}
            None => return None,
        }

        entries.remove(key);
        debug!(
            subject = %key.subject,
            category = %key.category,
            "evicted expired cache entry on read"
        );
        None
    }

    /// Stores a value under the default TTL, overwriting unconditionally.
    pub fn set(&self, key: CacheKey, value: V) {
        self.set_with_ttl(key, value, self.default_ttl);
    }

    /// Stores a value with an explicit TTL, restarting the expiry window for
    /// that exact (subject, category) pair. Last writer wins.
    pub fn set_with_ttl(&self, key: CacheKey, value: V, ttl: Duration) {
        let now = self.clock.now();
        let mut entries = self.entries.lock();

        entries.insert(
            key,
            Entry {
                value,
                stored_at: now,
                ttl,
            },
        );

        if entries.len() > self.sweep_threshold {
            let before = entries.len();
            entries.retain(|_, entry| !entry.is_expired(now));
            let removed = before - entries.len();
            if removed > 0 {
                debug!(removed, remaining = entries.len(), "swept expired cache entries");
            }
        }
    }

    /// Drops all entries immediately. Test/reset paths only.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
