//! Recent-history window for raw codes
//!
//! Fixed-capacity circular buffer: the last HISTORY_CAPACITY raw codes,
//! oldest evicted on overflow. Insertion order only matters for bounding;
//! the stability gate evaluates membership counts.

use crate::types::RawCode;
use crate::HISTORY_CAPACITY;

/// Bounded window of the most recent raw codes
#[derive(Debug, Clone, Default)]
pub struct RecentHistory {
    slots: [RawCode; HISTORY_CAPACITY],
    /// Index of the oldest entry
    head: usize,
    len: usize,
}

impl RecentHistory {
    /// Create an empty window
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a code, evicting the oldest entry when the window is full
    pub fn push(&mut self, code: RawCode) {
        let tail = (self.head + self.len) % HISTORY_CAPACITY;
        self.slots[tail] = code;
        if self.len < HISTORY_CAPACITY {
            self.len += 1;
        } else {
            self.head = (self.head + 1) % HISTORY_CAPACITY;
        }
    }

    /// Count occurrences of a code in the window
    pub fn count_of(&self, code: RawCode) -> usize {
        self.iter().filter(|&c| c == code).count()
    }

    /// Count occurrences of `code` as the window would stand after pushing
    /// it - the candidate itself counts, and the oldest entry falls out of
    /// a full window
    pub fn count_with(&self, code: RawCode) -> usize {
        let mut scratch = self.clone();
        scratch.push(code);
        scratch.count_of(code)
    }

    /// Number of codes currently held
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate oldest first
    pub fn iter(&self) -> impl Iterator<Item = RawCode> + '_ {
        (0..self.len).map(move |i| self.slots[(self.head + i) % HISTORY_CAPACITY])
    }

    /// Snapshot of the window, oldest first
    pub fn to_vec(&self) -> Vec<RawCode> {
        self.iter().collect()
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_window() {
        let history = RecentHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.count_of(5), 0);
    }

    #[test]
    fn test_push_and_count() {
        let mut history = RecentHistory::new();
        history.push(5);
        history.push(5);
        history.push(7);

        assert_eq!(history.len(), 3);
        assert_eq!(history.count_of(5), 2);
        assert_eq!(history.count_of(7), 1);
        assert_eq!(history.count_of(9), 0);
    }

    #[test]
    fn test_eviction_at_capacity() {
        let mut history = RecentHistory::new();
        for code in [1, 2, 3, 4] {
            history.push(code);
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);

        // Fifth push evicts the oldest (1)
        history.push(5);
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.count_of(1), 0);
        assert_eq!(history.to_vec(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_count_with_includes_candidate() {
        let mut history = RecentHistory::new();
        assert_eq!(history.count_with(5), 1);

        history.push(5);
        history.push(5);
        assert_eq!(history.count_with(5), 3);
        // Does not mutate
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_count_with_evicts_oldest_of_full_window() {
        let mut history = RecentHistory::new();
        for code in [5, 7, 5, 7] {
            history.push(code);
        }
        // Post-push window would be [7, 5, 7, 5]: two 5s, not three
        assert_eq!(history.count_with(5), 2);
    }

    #[test]
    fn test_order_preserved_through_wrap() {
        let mut history = RecentHistory::new();
        for code in [1, 2, 3, 4, 5, 6] {
            history.push(code);
        }
        assert_eq!(history.to_vec(), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_clear() {
        let mut history = RecentHistory::new();
        history.push(5);
        history.push(5);
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.count_of(5), 0);
    }
}
