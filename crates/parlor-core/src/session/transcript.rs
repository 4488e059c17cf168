//! The ordered sequence of messages shown to the user.

use serde::{Deserialize, Serialize};

use super::message::ChatMessage;

/// Ordered sequence of transcript entries.
///
/// An empty transcript means the welcome view is shown. Entries are only
/// ever appended; a conversation reset clears the whole list at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<ChatMessage>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the end of the transcript.
    pub fn push(&mut self, message: ChatMessage) {
        self.entries.push(message);
    }

    /// Removes all entries, returning the transcript to the welcome view.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when there are no entries (welcome view).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in order.
    pub fn entries(&self) -> &[ChatMessage] {
        &self.entries
    }

    /// Returns the most recent entry, if any.
    pub fn last(&self) -> Option<&ChatMessage> {
        self.entries.last()
    }
}
