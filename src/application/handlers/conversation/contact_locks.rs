//! Per-contact serialisation of dialogue updates.
//!
//! Each contact gets its own async mutex. The guard is held for the whole
//! read-modify-write of that contact's state, including the repository call
//! at the terminal step, so two messages from the same contact never act on
//! the same snapshot. Different contacts only share the short map access.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::ContactId;

/// Number of tracked contacts above which idle entries are dropped.
const PRUNE_THRESHOLD: usize = 1024;

/// Keyed async locks, one per contact.
#[derive(Debug, Default)]
pub struct ContactLocks {
    locks: Mutex<HashMap<ContactId, Arc<Mutex<()>>>>,
}

impl ContactLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `contact`.
    ///
    /// The returned guard releases the lock when dropped.
    pub async fn acquire(&self, contact: &ContactId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            if locks.len() >= PRUNE_THRESHOLD {
                Self::retain_in_use(&mut locks);
            }
            Arc::clone(locks.entry(contact.clone()).or_default())
        };
        lock.lock_owned().await
    }

    /// Drops entries nobody holds or waits on.
    #[cfg(test)]
    async fn prune(&self) {
        let mut locks = self.locks.lock().await;
        Self::retain_in_use(&mut locks);
    }

    /// Number of contacts currently tracked.
    #[cfg(test)]
    async fn tracked(&self) -> usize {
        self.locks.lock().await.len()
    }

    // The map's own reference is the only one left once every guard and
    // waiter for that contact is gone.
    fn retain_in_use(locks: &mut HashMap<ContactId, Arc<Mutex<()>>>) {
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
    }
}
