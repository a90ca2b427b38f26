//! In-memory store, used by unit tests and dry runs.

use crate::db::store::{Collection, Store};
use crate::errors::AppResult;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RefCell<HashMap<Collection, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, collection: Collection) -> AppResult<Option<String>> {
        Ok(self.data.borrow().get(&collection).cloned())
    }

    fn put(&self, collection: Collection, data: &str) -> AppResult<()> {
        self.data.borrow_mut().insert(collection, data.to_string());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        self.data.borrow_mut().clear();
        Ok(())
    }
}
