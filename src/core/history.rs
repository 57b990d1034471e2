use crate::core::HistoryEntry;

/// Move log with an undo cursor.
///
/// `cursor` counts how many of the newest entries have been rewound. Entries past
/// the cursor stay in `entries` until the next `record` truncates them.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        let live = self.entries.len() - self.cursor;
        self.entries.truncate(live);
        self.entries.push(entry);
        self.cursor = 0;
    }

    pub fn undo_one(&mut self) -> Option<HistoryEntry> {
        if self.cursor >= self.entries.len() {
            return None;
        }
        let entry = self.entries[self.entries.len() - 1 - self.cursor];
        self.cursor += 1;
        Some(entry)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    /// Total stored entries, including any rewound tail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.cursor
    }

    pub fn can_undo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Entries that have not been undone, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries[..self.entries.len() - self.cursor]
    }
}
