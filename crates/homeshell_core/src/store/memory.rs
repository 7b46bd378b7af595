use super::{RecordStore, StoreResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// Process-local record store. Contents are lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RefCell<HashMap<String, String>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, bypassing any repository encoding.
    pub fn with_record(self, key: &str, value: &str) -> Self {
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl RecordStore for MemoryRecordStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.records.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
