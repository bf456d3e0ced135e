//! Bridge between session snapshots and TUI messages.

use crossbeam_channel::Sender;

use deskcalc_core::{Snapshot, SnapshotObserver};

use crate::messages::TuiMessage;

/// Session observer that forwards every snapshot to the TUI channel.
pub struct TuiBridgeObserver {
    tx: Sender<TuiMessage>,
}

impl TuiBridgeObserver {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl SnapshotObserver for TuiBridgeObserver {
    fn on_snapshot(&self, snapshot: &Snapshot) {
        let _ = self.tx.try_send(TuiMessage::Snapshot(snapshot.clone()));
    }
}
