use std::sync::{Mutex, MutexGuard, PoisonError};

use shared::{Catalog, Result, Tally, VoteTally};
use tracing::{debug, info, warn};

use crate::store::SnapshotStore;

/// Owns the live tallies and the guard serializing every change to them.
#[derive(Debug)]
pub struct VoteLedger {
    tally: Mutex<Tally>,
    store: SnapshotStore,
}

impl VoteLedger {
    pub fn open(catalog: Catalog, store: SnapshotStore) -> Self {
        let tally = store.load(&catalog);
        Self {
            tally: Mutex::new(tally),
            store,
        }
    }

    pub fn tallies(&self) -> VoteTally {
        self.lock().summary()
    }

    /// Counts one vote for `editor` and persists the result.
    ///
    /// Lookup, increment, write and summary all happen under one lock, so the
    /// file never holds a half-applied vote. A failed write is logged and dropped.
    pub fn record(&self, editor: &str) -> Result<VoteTally> {
        let mut tally = self.lock();

        if let Err(e) = tally.cast(editor) {
            debug!("Rejected vote: {}", e);
            return Err(e);
        }

        if let Err(e) = self.store.save(&tally) {
            warn!("Vote for {} kept in memory only: {}", editor, e);
        }

        let summary = tally.summary();
        info!("🗳️ Vote for {} recorded ({} total)", editor, summary.total);
        Ok(summary)
    }

    fn lock(&self) -> MutexGuard<'_, Tally> {
        self.tally.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
