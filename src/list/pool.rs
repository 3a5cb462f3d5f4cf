//! Cell reuse pool keyed by reuse identifier.

use std::collections::HashMap;

/// Idle cells waiting to be bound to a row.
#[derive(Debug)]
pub struct CellPool<C> {
    idle: HashMap<String, Vec<C>>,
}

impl<C> Default for CellPool<C> {
    fn default() -> Self {
        Self {
            idle: HashMap::new(),
        }
    }
}

impl<C> CellPool<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take an idle cell registered under `identifier`.
    pub fn dequeue(&mut self, identifier: &str) -> Option<C> {
        self.idle.get_mut(identifier).and_then(Vec::pop)
    }

    /// Return a cell to the pool.
    pub fn enqueue(&mut self, identifier: &str, cell: C) {
        self.idle.entry(identifier.to_string()).or_default().push(cell);
    }

    /// Number of idle cells across all identifiers.
    pub fn len(&self) -> usize {
        self.idle.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate idle cells.
    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.idle.values().flatten()
    }
}
