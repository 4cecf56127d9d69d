//! Command history ring.
//!
//! Keeps the last [`HISTORY_CAPACITY`] committed lines oldest-first, with a
//! navigation index that Up/Down recall walks independently of where new
//! lines are appended.

use crate::config::HISTORY_CAPACITY;
use crate::line::Line;

/// Bounded, oldest-evicted-first store of committed lines.
///
/// Invariant: `0 <= nav_index <= count <= HISTORY_CAPACITY`.
pub struct HistoryStore {
    entries: [Line; HISTORY_CAPACITY],
    count: usize,
    nav_index: usize,
}

impl HistoryStore {
    /// An empty store.
    pub const fn new() -> Self {
        Self {
            entries: [Line::EMPTY; HISTORY_CAPACITY],
            count: 0,
            nav_index: 0,
        }
    }

    /// Records a committed line.
    ///
    /// Empty lines are ignored, and a repeat of the newest entry is not stored
    /// again. Either way navigation restarts past the newest entry.
    pub fn commit(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }

        let line = Line::new(line);
        if self.count > 0 && self.entries[self.count - 1] == line {
            self.nav_index = self.count;
            return;
        }

        if self.count == HISTORY_CAPACITY {
            self.entries.copy_within(1.., 0);
            self.entries[HISTORY_CAPACITY - 1] = line;
        } else {
            self.entries[self.count] = line;
            self.count += 1;
        }
        self.nav_index = self.count;
        log::debug!("history: stored {:?} ({} entries)", line.as_str(), self.count);
    }

    /// Steps to the next older entry.
    ///
    /// Returns `None` when already at the oldest entry or the store is empty.
    pub fn recall_older(&mut self) -> Option<&str> {
        if self.nav_index == 0 {
            return None;
        }
        self.nav_index -= 1;
        Some(self.entries[self.nav_index].as_str())
    }

    /// Steps to the next newer entry.
    ///
    /// Past the newest entry this yields an empty line, which discards
    /// whatever was being typed. Returns `None` only when the store is empty.
    pub fn recall_newer(&mut self) -> Option<&str> {
        if self.count == 0 {
            return None;
        }
        if self.nav_index + 1 < self.count {
            self.nav_index += 1;
            Some(self.entries[self.nav_index].as_str())
        } else {
            self.nav_index = self.count;
            Some("")
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current navigation index in `[0, len]`.
    pub fn nav_index(&self) -> usize {
        self.nav_index
    }

    /// Entry `index`, oldest first.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries[..self.count].get(index).map(Line::as_str)
    }

    /// Stored entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries[..self.count].iter().map(Line::as_str)
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
