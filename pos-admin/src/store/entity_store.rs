//! Entity Store - in-memory collection with replace-all semantics
//!
//! The store never edits a record in place. Callers compute a new full
//! collection (map / filter / push) and hand it to [`EntityStore::replace`],
//! which swaps the snapshot and bumps the revision that views watch.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use shared::models::{Category, DiningTable, Item, Outlet, User};
use tokio::sync::watch;

/// A record that can live in an [`EntityStore`]
pub trait Record: Clone + Send + Sync + 'static {
    /// Resource name used in logs ("category", "item", ...)
    const RESOURCE: &'static str;

    fn id(&self) -> &str;

    /// Display name, also the key of the uniqueness checks
    fn name(&self) -> &str;
}

macro_rules! impl_record {
    ($ty:ty, $resource:literal) => {
        impl Record for $ty {
            const RESOURCE: &'static str = $resource;

            fn id(&self) -> &str {
                &self.id
            }

            fn name(&self) -> &str {
                &self.name
            }
        }
    };
}

impl_record!(Category, "category");
impl_record!(Item, "item");
impl_record!(DiningTable, "dining_table");
impl_record!(Outlet, "outlet");
impl_record!(User, "user");

/// Store revision published to subscribers after every replace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revision {
    /// Monotonic counter, 0 before the first replace
    pub revision: u64,
    pub updated_at: DateTime<Utc>,
}

impl Default for Revision {
    fn default() -> Self {
        Self {
            revision: 0,
            updated_at: Utc::now(),
        }
    }
}

struct StoreInner<T> {
    records: RwLock<Arc<Vec<T>>>,
    /// Every id this store has ever held or handed out
    issued: Mutex<HashSet<String>>,
    revision: watch::Sender<Revision>,
}

/// In-memory entity collection
///
/// Cheap to clone; clones share the same collection.
pub struct EntityStore<T> {
    inner: Arc<StoreInner<T>>,
}

impl<T> Clone for EntityStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Record> std::fmt::Debug for EntityStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityStore")
            .field("resource", &T::RESOURCE)
            .field("len", &self.len())
            .field("revision", &self.revision())
            .finish()
    }
}

impl<T: Record> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> EntityStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store seeded with `records` (revision stays 0)
    pub fn with_records(records: Vec<T>) -> Self {
        let issued = records.iter().map(|r| r.id().to_string()).collect();
        let (revision, _) = watch::channel(Revision::default());
        Self {
            inner: Arc::new(StoreInner {
                records: RwLock::new(Arc::new(records)),
                issued: Mutex::new(issued),
                revision,
            }),
        }
    }

    /// Current snapshot
    pub fn get(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.inner.records.read())
    }

    /// Find a record by id in the current snapshot
    pub fn find(&self, id: &str) -> Option<T> {
        self.inner.records.read().iter().find(|r| r.id() == id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.records.read().iter().any(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.inner.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the whole collection and notify subscribers
    ///
    /// Last write wins; there is no merge with a concurrent replace.
    pub fn replace(&self, records: Vec<T>) {
        {
            let mut issued = self.inner.issued.lock();
            issued.extend(records.iter().map(|r| r.id().to_string()));
        }
        let len = records.len();
        *self.inner.records.write() = Arc::new(records);

        self.inner.revision.send_modify(|rev| {
            rev.revision += 1;
            rev.updated_at = Utc::now();
        });
        tracing::trace!(resource = T::RESOURCE, len, revision = self.revision(), "Store replaced");
    }

    /// Current revision counter
    pub fn revision(&self) -> u64 {
        self.inner.revision.borrow().revision
    }

    /// Watch the store; the receiver sees a change after every replace
    pub fn subscribe(&self) -> watch::Receiver<Revision> {
        self.inner.revision.subscribe()
    }

    /// Generate an id this store has never held, and reserve it
    pub fn next_id(&self) -> String {
        let mut issued = self.inner.issued.lock();
        loop {
            let id = shared::util::generate_id();
            if issued.insert(id.clone()) {
                return id;
            }
        }
    }

    /// Whether `id` was ever held or handed out by this store
    pub fn was_issued(&self, id: &str) -> bool {
        self.inner.issued.lock().contains(id)
    }
}
