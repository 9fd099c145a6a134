use std::collections::HashSet;
use std::path::Path;

use super::domain::BlacklistEntry;
use crate::intake;

/// Immutable membership index over denylisted identity numbers.
///
/// Built once before a batch run and shared read-only across workers. A
/// refresh means building a new index and swapping it in between runs.
#[derive(Debug, Clone, Default)]
pub struct BlacklistIndex {
    members: HashSet<String>,
}

impl BlacklistIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = BlacklistEntry>) -> Self {
        let members = entries
            .into_iter()
            .map(|entry| entry.identity_number)
            .collect();
        Self { members }
    }

    /// Build the index from a blacklist CSV, failing soft: an unreadable or
    /// malformed source yields an empty index and a logged warning so the
    /// admission checks still run rather than aborting the whole batch.
    pub fn load(path: &Path) -> Self {
        match intake::read_blacklist(path) {
            Ok(entries) => {
                let index = Self::from_entries(entries);
                tracing::info!(path = %path.display(), members = index.len(), "blacklist loaded");
                index
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "blacklist unavailable, continuing with an empty index"
                );
                Self::empty()
            }
        }
    }

    pub fn contains(&self, identity_number: &str) -> bool {
        self.members.contains(identity_number)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
