//! Singleton Store - one value instead of a collection (profile)

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use tokio::sync::watch;

use super::entity_store::Revision;

struct SingletonInner<T> {
    value: RwLock<Arc<T>>,
    revision: watch::Sender<Revision>,
}

/// Holder of a single record with the same get / replace / subscribe
/// contract as [`super::EntityStore`]
pub struct SingletonStore<T> {
    inner: Arc<SingletonInner<T>>,
}

impl<T> Clone for SingletonStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SingletonStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SingletonStore")
            .field("value", &self.inner.value.read())
            .field("revision", &self.inner.revision.borrow().revision)
            .finish()
    }
}

impl<T: Send + Sync + 'static> SingletonStore<T> {
    pub fn new(value: T) -> Self {
        let (revision, _) = watch::channel(Revision::default());
        Self {
            inner: Arc::new(SingletonInner {
                value: RwLock::new(Arc::new(value)),
                revision,
            }),
        }
    }

    /// Current value
    pub fn get(&self) -> Arc<T> {
        Arc::clone(&self.inner.value.read())
    }

    /// Replace the value and notify subscribers
    pub fn replace(&self, value: T) {
        *self.inner.value.write() = Arc::new(value);
        self.inner.revision.send_modify(|rev| {
            rev.revision += 1;
            rev.updated_at = Utc::now();
        });
    }

    pub fn revision(&self) -> u64 {
        self.inner.revision.borrow().revision
    }

    pub fn subscribe(&self) -> watch::Receiver<Revision> {
        self.inner.revision.subscribe()
    }
}
