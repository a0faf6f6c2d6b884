use crate::traits::PersistenceAdapter;
use notecycle_domain::Snapshot;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Counters reported when the worker exits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SaveStats {
    pub written: usize,
    pub failed: usize,
    /// Snapshots skipped because a newer one was already queued.
    pub coalesced: usize,
}

/// Drains queued snapshots into the adapter until the sending side closes.
///
/// Only the newest queued snapshot is written; older ones are dropped since
/// every snapshot is a full copy. Failed writes are logged and do not stop
/// the worker.
pub struct SaveWorker {
    adapter: Arc<dyn PersistenceAdapter>,
    rx: mpsc::UnboundedReceiver<Snapshot>,
}

impl SaveWorker {
    pub(crate) fn new(
        adapter: Arc<dyn PersistenceAdapter>,
        rx: mpsc::UnboundedReceiver<Snapshot>,
    ) -> Self {
        Self { adapter, rx }
    }

    pub fn spawn(self) -> JoinHandle<SaveStats> {
        tokio::spawn(self.run())
    }

    pub async fn run(mut self) -> SaveStats {
        let mut stats = SaveStats::default();

        while let Some(mut snapshot) = self.rx.recv().await {
            while let Ok(newer) = self.rx.try_recv() {
                stats.coalesced += 1;
                snapshot = newer;
            }

            match self.adapter.save(&snapshot).await {
                Ok(()) => {
                    stats.written += 1;
                    tracing::debug!("Snapshot written to {}", self.adapter.describe());
                }
                Err(e) => {
                    stats.failed += 1;
                    tracing::warn!(
                        "Failed to save snapshot to {}: {}",
                        self.adapter.describe(),
                        e
                    );
                }
            }
        }

        tracing::debug!(
            "Save worker finished: {} written, {} failed, {} coalesced",
            stats.written,
            stats.failed,
            stats.coalesced
        );
        stats
    }
}
