//! In-memory store, for tests and throwaway sessions

use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::Result;

use super::Store;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_many(&self, entries: &[(&str, String)]) -> Result<()> {
        let mut map = self.entries.borrow_mut();
        for (key, value) in entries {
            map.insert(key.to_string(), value.clone());
        }
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> Result<()> {
        let mut map = self.entries.borrow_mut();
        for key in keys {
            map.remove(*key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        store.set("streak_data", "{}").unwrap();
        assert_eq!(store.get("streak_data").unwrap().as_deref(), Some("{}"));
        store.remove_many(&["streak_data"]).unwrap();
        assert!(store.is_empty());
    }
}
