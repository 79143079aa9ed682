use std::collections::VecDeque;

/// Maximum number of prompts kept in the ledger.
pub const HISTORY_CAPACITY: usize = 5;

/// Bounded ledger of submitted prompts, most recent first.
///
/// Duplicates are kept: submitting the same prompt twice records it twice.
/// Entries are only added by a successful generation (see
/// `Session::complete_generation`), which is why `record` is crate-private.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `prompt`, dropping the oldest entry once the ledger is full.
    pub(crate) fn record(&mut self, prompt: String) {
        self.entries.push_front(prompt);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}
