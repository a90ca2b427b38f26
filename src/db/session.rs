//! Session slot: the "currently logged in" identity, kept apart from the
//! durable record store. Logging out clears the slot and nothing else.

use crate::errors::AppResult;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

pub trait SessionSlot {
    fn load(&self) -> AppResult<Option<String>>;
    fn save(&self, data: &str) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

/// Session persisted to a small JSON file next to the configuration.
#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionSlot for FileSession {
    fn load(&self) -> AppResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn save(&self, data: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, data)?;
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemorySession {
    slot: RefCell<Option<String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionSlot for MemorySession {
    fn load(&self) -> AppResult<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, data: &str) -> AppResult<()> {
        *self.slot.borrow_mut() = Some(data.to_string());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}
