//! Key-value persistence surface

use crate::error::Result;
use std::collections::HashMap;

/// String-keyed slots, each holding one whole serialized value
pub trait SlotStorage {
    /// Read a slot; `None` when nothing was ever written
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace a slot's contents
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory slots, used where no filesystem is wanted
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Storage with one slot already filled
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut storage = MemoryStorage::new();
        storage.slots.insert(key.to_string(), value.to_string());
        storage
    }
}

impl SlotStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").unwrap(), None);

        storage.set_item("k", "v1").unwrap();
        storage.set_item("k", "v2").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.get_item("other").unwrap(), None);
    }

    #[test]
    fn test_with_item() {
        let storage = MemoryStorage::with_item("k", "[]");
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("[]"));
    }
}
