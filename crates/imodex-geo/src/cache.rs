//! Capacity-bounded LRU cache for geocoding results.
//!
//! Keys are normalized query strings; values cache both hits and explicit
//! misses, so an address the service does not know costs one outbound call
//! per process rather than one per listing.

use std::collections::HashMap;

use imodex_core::ResolvedLocation;

struct Slot {
    last_used: u64,
    value: Option<ResolvedLocation>,
}

/// LRU cache keyed by normalized query text.
///
/// No pack-wide cache crate is in use; eviction scans for the least recently
/// used slot, which is fine at the capacities involved (thousands, not
/// millions).
pub struct GeocodeCache {
    capacity: usize,
    tick: u64,
    slots: HashMap<String, Slot>,
}

impl GeocodeCache {
    /// Creates a cache holding at most `capacity` entries (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            tick: 0,
            slots: HashMap::new(),
        }
    }

    /// Looks up a cached result, refreshing its recency.
    ///
    /// Returns `None` when the key was never cached; `Some(None)` is a
    /// cached geocoding miss and must be treated as an answer.
    pub fn get(&mut self, key: &str) -> Option<Option<ResolvedLocation>> {
        self.tick += 1;
        let slot = self.slots.get_mut(key)?;
        slot.last_used = self.tick;
        Some(slot.value.clone())
    }

    /// Stores a result (or explicit miss), evicting the least recently used
    /// entry when at capacity.
    pub fn insert(&mut self, key: String, value: Option<ResolvedLocation>) {
        self.tick += 1;
        if !self.slots.contains_key(&key) && self.slots.len() >= self.capacity {
            let evict = self
                .slots
                .iter()
                .min_by_key(|(_, slot)| slot.last_used)
                .map(|(k, _)| k.clone());
            if let Some(evict) = evict {
                self.slots.remove(&evict);
            }
        }
        self.slots.insert(
            key,
            Slot {
                last_used: self.tick,
                value,
            },
        );
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
