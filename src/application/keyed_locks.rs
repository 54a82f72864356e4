//! Per-key async mutual exclusion.
//!
//! Serializes read-then-write sequences that must not interleave for the
//! same key: the resubmission check plus insert for one user, and version
//! allocation plus insert for one (manager, developer) pair.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::foundation::UserId;

/// Lock key for a (manager, developer) feedback pair.
pub type PairKey = (UserId, UserId);

/// Held while the critical section for one key runs.
pub type KeyGuard = OwnedMutexGuard<()>;

/// A table of async mutexes, one per key, created on demand.
///
/// Slots nobody holds or waits on are pruned on the next `lock` call.
pub struct KeyedLocks<K> {
    slots: Mutex<HashMap<K, Arc<AsyncMutex<()>>>>,
}

impl<K> KeyedLocks<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Waits until no other task holds `key`, then holds it until the guard drops.
    pub async fn lock(&self, key: K) -> KeyGuard {
        let slot = self.slot(key);
        slot.lock_owned().await
    }

    /// Number of keys currently tracked.
    pub fn tracked(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn slot(&self, key: K) -> Arc<AsyncMutex<()>> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.retain(|_, slot| Arc::strong_count(slot) > 1);
        Arc::clone(slots.entry(key).or_default())
    }
}

impl<K> Default for KeyedLocks<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
