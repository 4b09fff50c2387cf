//! Fixed-capacity, insertion-ordered list of entries.

use super::Entry;
use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Default number of entries kept in the list.
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(n) => n,
    None => unreachable!(),
};

/// Ordered entries, oldest first. Never longer than its capacity.
///
/// Pushing onto a full list evicts exactly one entry from the front.
/// Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryList {
    entries: VecDeque<Entry>,
    capacity: NonZeroUsize,
}

impl EntryList {
    /// Create an empty list holding at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Append `entry` at the end.
    ///
    /// Returns the evicted oldest entry when the list was already full.
    pub fn push(&mut self, entry: Entry) -> Option<Entry> {
        self.entries.push_back(entry);
        if self.entries.len() > self.capacity.get() {
            self.entries.pop_front()
        } else {
            None
        }
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True before the first accepted submission.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept.
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Entry texts from oldest to newest.
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(Entry::as_str).collect()
    }
}

impl Default for EntryList {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a Entry;
    type IntoIter = std::collections::vec_deque::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
