use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info};

use crate::modules::matching::domain::entities::ResolvedProfile;
use crate::shared::errors::{AppError, AppResult};

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries_count: usize,
    pub capacity: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

/// Entries plus their recency. Each touch stamps the key with a fresh tick;
/// the smallest tick in `order` is the least recently used key.
struct LruState<V> {
    entries: HashMap<String, (V, u64)>,
    order: BTreeMap<u64, String>,
    tick: u64,
}

impl<V> LruState<V> {
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }
}

/// Fixed-capacity result cache with strict least-recently-used eviction
///
/// Keys are the exact raw strings callers pass in; "J. Smith" and "J Smith"
/// are different entries. There is no expiry. All access goes through one
/// mutex so a lookup and its recency update happen together.
pub struct ResultCache<V = ResolvedProfile> {
    state: Mutex<LruState<V>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl<V: Clone> ResultCache<V> {
    pub fn new(capacity: usize) -> AppResult<Self> {
        if capacity == 0 {
            return Err(AppError::ValidationError(
                "Cache capacity must be > 0".to_string(),
            ));
        }

        Ok(Self {
            state: Mutex::new(LruState {
                entries: HashMap::with_capacity(capacity),
                order: BTreeMap::new(),
                tick: 0,
            }),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        })
    }

    /// Cached value for `key`; a hit makes it the most recently used entry
    pub fn get(&self, key: &str) -> Option<V> {
        let mut state = self.lock();
        let tick = state.next_tick();

        let (value, old_tick) = match state.entries.get_mut(key) {
            Some((value, stamp)) => {
                let old = *stamp;
                *stamp = tick;
                (value.clone(), old)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!("Cache miss for key: {}", key);
                return None;
            }
        };

        state.order.remove(&old_tick);
        state.order.insert(tick, key.to_string());
        self.hits.fetch_add(1, Ordering::Relaxed);
        debug!("Cache hit for key: {}", key);
        Some(value)
    }

    /// Insert or overwrite `key` as the most recently used entry, evicting the
    /// least recently used one first when a new key would exceed capacity
    pub fn set(&self, key: &str, value: V) {
        let mut state = self.lock();
        let tick = state.next_tick();

        if let Some((_, old_tick)) = state.entries.remove(key) {
            state.order.remove(&old_tick);
        } else if state.entries.len() >= self.capacity {
            if let Some((_, evicted)) = state.order.pop_first() {
                state.entries.remove(&evicted);
                self.evictions.fetch_add(1, Ordering::Relaxed);
                debug!("Evicted least recently used key: {}", evicted);
            }
        }

        state.entries.insert(key.to_string(), (value, tick));
        state.order.insert(tick, key.to_string());
    }

    /// Presence check that leaves recency untouched
    pub fn contains(&self, key: &str) -> bool {
        self.lock().entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Keys from least to most recently used
    pub fn keys_by_recency(&self) -> Vec<String> {
        self.lock().order.values().cloned().collect()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            entries_count: self.len(),
            capacity: self.capacity,
        }
    }

    /// Clear all cached entries and counters
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.order.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
        info!("Result cache cleared");
    }

    fn lock(&self) -> MutexGuard<'_, LruState<V>> {
        // A panic while holding the lock cannot leave the maps half-updated in
        // a way that breaks lookups, so keep serving
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
