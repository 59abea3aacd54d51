//! Single Responsibility: a journal that only keeps entries.
//!
//! Saving a journal is someone else's job; see
//! `application::services::JournalPersistence`.

use std::fmt;

use crate::domain::error::DomainError;

/// An ordered list of numbered entries.
///
/// Entry numbers keep increasing after removals, so a number is never reused
/// within one journal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
    count: usize,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its 1-based number.
    pub fn add_entry(&mut self, text: impl AsRef<str>) -> usize {
        self.count += 1;
        self.entries.push(format!("{}: {}", self.count, text.as_ref()));
        self.count
    }

    /// Remove the entry at a 0-based position.
    pub fn remove_entry(&mut self, index: usize) -> Result<String, DomainError> {
        if index >= self.entries.len() {
            return Err(DomainError::EntryNotFound {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries.join("\n"))
    }
}
