use chrono::Utc;

/// In-memory audit trail of stock mutations.
///
/// Owned by the caller, append-only, never persisted. Each entry is a
/// timestamped human-readable message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, prefixed with the current UTC timestamp.
    pub fn record(&mut self, message: &str) {
        self.entries.push(format!("{}: {message}", Utc::now()));
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
