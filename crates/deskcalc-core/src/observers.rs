//! Concrete observer implementations.

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::Sender;
use tracing::{debug, info};

use crate::observer::SnapshotObserver;
use crate::snapshot::Snapshot;

/// Observer that forwards snapshots through a channel (non-blocking).
pub struct ChannelObserver {
    sender: Sender<Snapshot>,
}

impl ChannelObserver {
    #[must_use]
    pub fn new(sender: Sender<Snapshot>) -> Self {
        Self { sender }
    }
}

impl SnapshotObserver for ChannelObserver {
    fn on_snapshot(&self, snapshot: &Snapshot) {
        // A full or disconnected channel drops the snapshot.
        let _ = self.sender.try_send(snapshot.clone());
    }
}

/// Observer that logs every snapshot through `tracing`.
pub struct LoggingObserver {
    seen: AtomicU64,
}

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            seen: AtomicU64::new(0),
        }
    }

    /// Number of snapshots logged so far.
    #[must_use]
    pub fn seen(&self) -> u64 {
        self.seen.load(Ordering::Relaxed)
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotObserver for LoggingObserver {
    fn on_snapshot(&self, snapshot: &Snapshot) {
        let seq = self.seen.fetch_add(1, Ordering::Relaxed) + 1;
        if snapshot.is_error {
            info!(seq, message = %snapshot.secondary_text, "error displayed");
        } else {
            debug!(
                seq,
                primary = %snapshot.primary_text,
                secondary = %snapshot.secondary_text,
                operator = ?snapshot.active_operator,
                "snapshot"
            );
        }
    }
}

/// Observer that does nothing.
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotObserver for NoOpObserver {
    fn on_snapshot(&self, _snapshot: &Snapshot) {}
}
