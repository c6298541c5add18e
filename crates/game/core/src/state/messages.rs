use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Most recent status messages, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageLog {
    entries: ArrayVec<String, { GameConfig::MAX_MESSAGES }>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message, evicting the oldest past capacity. Empty strings are ignored.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            return;
        }
        if self.entries.is_full() {
            self.entries.remove(0);
        }
        self.entries.push(message);
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_newest_messages() {
        let mut log = MessageLog::new();
        for i in 0..GameConfig::MAX_MESSAGES + 3 {
            log.push(format!("message {i}"));
        }
        assert_eq!(log.len(), GameConfig::MAX_MESSAGES);
        assert_eq!(log.iter().next(), Some("message 3"));
        assert_eq!(log.latest(), Some("message 10"));
    }

    #[test]
    fn ignores_empty_messages() {
        let mut log = MessageLog::new();
        log.push("");
        assert!(log.is_empty());
    }
}
