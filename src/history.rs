// history.rs

use crate::operation::Operation;

/// A successfully evaluated operation and the value it produced.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HistoryEntry {
    pub operation: Operation,
    pub result: f64,
}

/// Executed operations, oldest first. Undo pops the newest.
#[derive(Default, Debug)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }
    pub fn get(&self, n: usize) -> Option<&HistoryEntry> {
        self.entries.get(n)
    }
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }
    pub fn clear(&mut self) {
        self.entries.clear();
    }
    pub fn all(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
