//! Generic append-only container
//!
//! One container type serves all three rosters. Insertion order is the only
//! ordering; there is no removal, search, or uniqueness constraint, so the
//! length only ever grows and `first()` is always the earliest insert.

use std::fmt::Display;

/// Ordered, append-only collection of `T`.
#[derive(Debug, Clone, Default)]
pub struct Container<T> {
    items: Vec<T>,
}

impl<T: Display> Container<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append `item`. Always succeeds; the only side effect is the log line.
    pub fn add(&mut self, item: T) {
        tracing::info!(%item, "added");
        self.items.push(item);
    }

    /// The earliest-inserted item, or `None` when empty.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Mutable access to the earliest item.
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.items.first_mut()
    }

    /// The full ordered sequence. Idempotent read.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Rendered lines for the full sequence, in insertion order.
    pub fn display_lines(&self) -> Vec<String> {
        self.items.iter().map(|item| item.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_container_first_is_none() {
        let container: Container<String> = Container::new();
        assert!(container.first().is_none());
        assert!(container.is_empty());
    }

    #[test]
    fn test_first_is_earliest_insert() {
        let mut container = Container::new();
        container.add("alpha".to_string());
        container.add("beta".to_string());
        container.add("gamma".to_string());
        assert_eq!(container.first(), Some(&"alpha".to_string()));
        assert_eq!(container.len(), 3);
    }

    #[test]
    fn test_items_preserve_insertion_order() {
        let mut container = Container::new();
        for n in [3, 1, 2] {
            container.add(n);
        }
        assert_eq!(container.items(), &[3, 1, 2]);
        // repeated reads are idempotent
        assert_eq!(container.items(), &[3, 1, 2]);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut container = Container::new();
        container.add("dup".to_string());
        container.add("dup".to_string());
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn test_display_lines_match_items() {
        let mut container = Container::new();
        container.add(10);
        container.add(20);
        assert_eq!(container.display_lines(), ["10", "20"]);
    }
}
