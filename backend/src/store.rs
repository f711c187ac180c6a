use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;

use shared::{models::Snapshot, Catalog, Tally};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
}

/// JSON file holding the last written tallies.
///
/// The file is a best-effort export: it seeds the ledger once at startup and is
/// rewritten after every recorded vote. Nothing reads it back while the process
/// runs. The store does no locking of its own; the ledger calls [`save`] while
/// holding its guard.
///
/// [`save`]: SnapshotStore::save
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the tally for `catalog`. A missing or unparsable file yields zeros.
    pub fn load(&self, catalog: &Catalog) -> Tally {
        match self.read() {
            Some(snapshot) => {
                let tally = Tally::seeded(catalog.clone(), &snapshot);
                info!(
                    "📂 Loaded {} votes from {}",
                    tally.total(),
                    self.path.display()
                );
                tally
            }
            None => Tally::new(catalog.clone()),
        }
    }

    pub fn read(&self) -> Option<Snapshot> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) => {
                debug!("No snapshot at {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_slice(&data) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("Ignoring unreadable snapshot {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Overwrites the file with every count in `tally`.
    pub fn save(&self, tally: &Tally) -> Result<(), StoreError> {
        let data = serde_json::to_vec(&tally.snapshot())?;
        let tmp_path = self.tmp_path();

        fs::write(&tmp_path, data)
            .and_then(|_| fs::rename(&tmp_path, &self.path))
            .map_err(|source| StoreError::Write {
                path: self.path.display().to_string(),
                source,
            })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}
