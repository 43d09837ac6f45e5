//! Bounded history of generated artifacts, most recent first

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use serde::Serialize;
use tracing::debug;

use crate::model::{ArtifactId, GeneratedArtifact};

/// Summary counters for a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerStats {
    pub total: usize,
    pub limit: usize,
}

/// Ordered, bounded collection of generated artifacts
///
/// New artifacts go to the front. When the configured maximum would be
/// exceeded the oldest artifact is evicted.
#[derive(Debug, Clone)]
pub struct HistoryLedger {
    entries: VecDeque<GeneratedArtifact>,
    max_entries: NonZeroUsize,
}

impl HistoryLedger {
    pub fn new(max_entries: NonZeroUsize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.get()),
            max_entries,
        }
    }

    /// Insert an artifact at the head, returning the evicted oldest entry if any
    pub fn append(&mut self, artifact: GeneratedArtifact) -> Option<GeneratedArtifact> {
        self.entries.push_front(artifact);
        if self.entries.len() > self.max_entries.get() {
            let evicted = self.entries.pop_back();
            if let Some(old) = &evicted {
                debug!(id = %old.id(), "evicted oldest artifact from history");
            }
            evicted
        } else {
            None
        }
    }

    /// Snapshot of all artifacts, most recent first
    pub fn all(&self) -> Vec<GeneratedArtifact> {
        self.entries.iter().cloned().collect()
    }

    /// Snapshot of a window of artifacts, most recent first
    pub fn page(&self, skip: usize, limit: usize) -> Vec<GeneratedArtifact> {
        self.entries.iter().skip(skip).take(limit).cloned().collect()
    }

    pub fn get(&self, id: &ArtifactId) -> Option<&GeneratedArtifact> {
        self.entries.iter().find(|a| a.id() == *id)
    }

    /// Remove a single artifact by id
    pub fn remove(&mut self, id: &ArtifactId) -> Option<GeneratedArtifact> {
        let index = self.entries.iter().position(|a| a.id() == *id)?;
        self.entries.remove(index)
    }

    /// Remove every artifact, returning how many were dropped
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> NonZeroUsize {
        self.max_entries
    }

    pub fn stats(&self) -> LedgerStats {
        LedgerStats {
            total: self.entries.len(),
            limit: self.max_entries.get(),
        }
    }
}
