//! Ordered key to message store handed over by the host.

use crate::error::{Error, Result};

/// A single flash entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashEntry {
    /// Flash key (`success`, `notice`, `error`, `alert`, or any other word).
    pub key: String,
    /// Message text.
    pub message: String,
}

/// Flash messages for one request, in insertion order.
///
/// Assigning to an existing key replaces its message in place, so the entry
/// keeps the position it was first inserted at.
///
/// # Example
///
/// ```rust
/// use view_helpers::flash::FlashStore;
///
/// let mut flash = FlashStore::new();
/// flash.insert("notice", "Saved").unwrap();
/// flash.insert("alert", "Check the form").unwrap();
/// flash.insert("notice", "Saved twice").unwrap();
///
/// let keys: Vec<_> = flash.iter().map(|e| e.key.as_str()).collect();
/// assert_eq!(keys, ["notice", "alert"]);
/// assert_eq!(flash.get("notice"), Some("Saved twice"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashStore {
    entries: Vec<FlashEntry>,
}

impl FlashStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFlashKey`] if the key is empty or contains
    /// whitespace; keys end up in class names and element ids.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) -> Result<()> {
        let key = key.into();
        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(Error::InvalidFlashKey(key));
        }

        let message = message.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.message = message,
            None => self.entries.push(FlashEntry { key, message }),
        }
        Ok(())
    }

    /// Message stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.message.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FlashEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a store from ordered `(key, message)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFlashKey`] on the first invalid key.
    pub fn try_from_pairs<K, M>(pairs: impl IntoIterator<Item = (K, M)>) -> Result<Self>
    where
        K: Into<String>,
        M: Into<String>,
    {
        let mut store = Self::new();
        for (key, message) in pairs {
            store.insert(key, message)?;
        }
        Ok(store)
    }
}

impl<'a> IntoIterator for &'a FlashStore {
    type Item = &'a FlashEntry;
    type IntoIter = std::slice::Iter<'a, FlashEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        let store =
            FlashStore::try_from_pairs([("success", "1"), ("error", "2"), ("custom", "3")]).unwrap();
        let keys: Vec<_> = store.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["success", "error", "custom"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut store = FlashStore::new();
        store.insert("notice", "first").unwrap();
        store.insert("error", "bad").unwrap();
        store.insert("notice", "second").unwrap();

        assert_eq!(store.len(), 2);
        let entries: Vec<_> = store.iter().collect();
        assert_eq!(entries[0].key, "notice");
        assert_eq!(entries[0].message, "second");
    }

    #[test]
    fn test_rejects_invalid_keys() {
        let mut store = FlashStore::new();
        assert!(matches!(store.insert("", "m"), Err(Error::InvalidFlashKey(_))));
        assert!(matches!(store.insert("two words", "m"), Err(Error::InvalidFlashKey(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_iteration_is_restartable() {
        let store = FlashStore::try_from_pairs([("a", "1"), ("b", "2")]).unwrap();
        let first: Vec<_> = (&store).into_iter().collect();
        let second: Vec<_> = store.iter().collect();
        assert_eq!(first, second);
    }
}
