//! Observer pattern for snapshot delivery.
//!
//! Presentation layers subscribe to a session instead of polling it; every
//! reduced input and every recovery is pushed to all registered observers.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::snapshot::Snapshot;

/// Observer trait for receiving snapshots.
pub trait SnapshotObserver: Send + Sync {
    /// Receive the snapshot produced by an input or a recovery.
    fn on_snapshot(&self, snapshot: &Snapshot);
}

/// Subject that manages a collection of observers.
pub struct SnapshotSubject {
    observers: RwLock<Vec<Arc<dyn SnapshotObserver>>>,
}

impl SnapshotSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn SnapshotObserver>) {
        self.observers.write().push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Notify all observers of a snapshot.
    pub fn notify(&self, snapshot: &Snapshot) {
        let observers = self.observers.read();
        for observer in observers.iter() {
            observer.on_snapshot(snapshot);
        }
    }

    /// Get the number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.read().len()
    }
}

impl Default for SnapshotSubject {
    fn default() -> Self {
        Self::new()
    }
}
