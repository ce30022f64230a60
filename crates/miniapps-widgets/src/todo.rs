#![forbid(unsafe_code)]

//! To-do list state.
//!
//! An in-memory ordered list of opaque text items. No uniqueness, no
//! persistence, no undo; identity is position.

/// Ordered list of to-do items.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    items: Vec<String>,
}

impl TodoList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item. Whitespace-only text is a no-op.
    ///
    /// Returns `true` when an item was added (the caller clears its input
    /// field only then).
    pub fn add(&mut self, text: &str) -> bool {
        let task = text.trim();
        if task.is_empty() {
            return false;
        }
        self.items.push(task.to_string());
        true
    }

    /// Remove the item at `index`, preserving the order of the rest.
    ///
    /// Out-of-range indices are a no-op.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// The items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_a_noop() {
        let mut list = TodoList::new();
        assert!(!list.add("  "));
        assert!(!list.add(""));
        assert!(list.is_empty());
    }

    #[test]
    fn add_then_remove_returns_to_empty() {
        let mut list = TodoList::new();
        assert!(list.add("buy milk"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.remove(0).as_deref(), Some("buy milk"));
        assert!(list.is_empty());
    }

    #[test]
    fn add_trims_surrounding_whitespace() {
        let mut list = TodoList::new();
        assert!(list.add("  lavar o carro  "));
        assert_eq!(list.items(), ["lavar o carro"]);
    }

    #[test]
    fn remove_preserves_order_of_rest() {
        let mut list = TodoList::new();
        list.add("a");
        list.add("b");
        list.add("c");
        list.remove(1);
        assert_eq!(list.items(), ["a", "c"]);
    }

    #[test]
    fn out_of_range_remove_is_a_noop() {
        let mut list = TodoList::new();
        list.add("a");
        assert_eq!(list.remove(5), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut list = TodoList::new();
        list.add("x");
        list.add("x");
        assert_eq!(list.len(), 2);
    }
}
