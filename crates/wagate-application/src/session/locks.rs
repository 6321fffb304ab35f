use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

/// Per-session mutual exclusion for read-modify-write sequences.
///
/// Each session ID maps to its own mutex, so updates to different sessions
/// never wait on each other. Entries nobody holds are pruned on the next
/// acquisition.
pub struct SessionLocks {
    locks: Arc<RwLock<HashMap<String, Arc<Mutex<()>>>>>,
}

impl SessionLocks {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            locks: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Waits for exclusive access to `session_id`.
    ///
    /// The returned guard releases the session when dropped.
    pub async fn acquire(&self, session_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.write().await;
            locks.retain(|id, lock| id == session_id || Arc::strong_count(lock) > 1);
            locks
                .entry(session_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    /// Number of session IDs currently tracked.
    pub async fn len(&self) -> usize {
        self.locks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.locks.read().await.is_empty()
    }
}

impl Default for SessionLocks {
    fn default() -> Self {
        Self::new()
    }
}
