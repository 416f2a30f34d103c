use std::collections::{BTreeMap, BTreeSet};

use crate::document::tree::Document;

/// Deterministic `<prefix>-<n>` identifier source.
///
/// Seeded with every `id` already present in a document. Each prefix keeps its own counter,
/// starting at 1, which only moves forward; candidates that are taken are skipped.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    used: BTreeSet<String>,
    counters: BTreeMap<String, u64>,
}

impl IdAllocator {
    /// Seed from the ids of every attached element.
    pub fn from_document(doc: &Document) -> Self {
        let used = doc
            .descendants()
            .filter_map(|n| doc.attr(n, "id"))
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
            .collect();
        Self {
            used,
            counters: BTreeMap::new(),
        }
    }

    /// Return `true` when `id` is already taken.
    pub fn is_used(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    /// Mark `id` as taken. Returns `false` if it already was.
    pub fn reserve(&mut self, id: impl Into<String>) -> bool {
        self.used.insert(id.into())
    }

    /// Next free identifier for `prefix`, recorded as used.
    pub fn next(&mut self, prefix: &str) -> String {
        let counter = self.counters.entry(prefix.to_owned()).or_insert(1);
        loop {
            let id = format!("{prefix}-{counter}");
            *counter += 1;
            if !self.used.contains(&id) {
                self.used.insert(id.clone());
                return id;
            }
        }
    }
}

/// First free `<prefix>-<n>` in `doc`, counting from 1.
pub fn next_id(doc: &Document, prefix: &str) -> String {
    IdAllocator::from_document(doc).next(prefix)
}

#[cfg(test)]
#[path = "../../tests/unit/document/ids.rs"]
mod tests;
