use crate::catalog::Catalog;
use crate::error::{Result, VotingError};
use crate::models::{Snapshot, VoteTally};

/// Vote counts aligned index-for-index with a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    catalog: Catalog,
    counts: Vec<u64>,
}

impl Tally {
    pub fn new(catalog: Catalog) -> Self {
        let counts = vec![0; catalog.len()];
        Self { catalog, counts }
    }

    /// Builds a tally from a stored snapshot. Keys outside the catalog are dropped.
    pub fn seeded(catalog: Catalog, snapshot: &Snapshot) -> Self {
        let mut tally = Self::new(catalog);
        tally.seed(snapshot);
        tally
    }

    pub fn seed(&mut self, snapshot: &Snapshot) {
        for (name, count) in self.catalog.names().iter().zip(self.counts.iter_mut()) {
            if let Some(&stored) = snapshot.get(name) {
                *count = stored;
            }
        }
    }

    /// Adds one vote for `option` and returns its slot.
    pub fn cast(&mut self, option: &str) -> Result<usize> {
        let idx = self
            .catalog
            .position(option)
            .ok_or_else(|| VotingError::UnknownOption(option.to_string()))?;
        self.counts[idx] = self.counts[idx].saturating_add(1);
        Ok(idx)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn count(&self, option: &str) -> Option<u64> {
        self.catalog.position(option).map(|idx| self.counts[idx])
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().fold(0, |acc, &n| acc.saturating_add(n))
    }

    pub fn snapshot(&self) -> Snapshot {
        self.catalog
            .names()
            .iter()
            .cloned()
            .zip(self.counts.iter().copied())
            .collect()
    }

    pub fn summary(&self) -> VoteTally {
        VoteTally {
            editors: self.catalog.names().to_vec(),
            votes: self.counts.clone(),
            total: self.total(),
        }
    }
}
