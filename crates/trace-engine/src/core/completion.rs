use std::collections::BTreeSet;

use crate::catalog::Section;

/// Per-section set of completed item indices. Indices are only ever added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSet {
    done: [BTreeSet<usize>; 3],
}

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `index` as completed. Returns true the first time only.
    pub fn insert(&mut self, section: Section, index: usize) -> bool {
        self.done[section.slot()].insert(index)
    }

    pub fn contains(&self, section: Section, index: usize) -> bool {
        self.done[section.slot()].contains(&index)
    }

    pub fn count(&self, section: Section) -> usize {
        self.done[section.slot()].len()
    }
}
