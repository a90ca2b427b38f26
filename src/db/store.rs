//! Storage port: named collections persisted as one JSON array each.
//!
//! Every write replaces the whole collection (read-modify-write), so the
//! last writer wins when two processes touch the same collection.

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Employees,
    TimeEntries,
    Projects,
    Absences,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Employees,
        Collection::TimeEntries,
        Collection::Projects,
        Collection::Absences,
    ];

    /// Storage key of the collection.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Employees => "employees",
            Collection::TimeEntries => "timeEntries",
            Collection::Projects => "projects",
            Collection::Absences => "absences",
        }
    }
}

pub trait Store {
    /// Raw serialized collection, `None` when it was never written.
    fn get(&self, collection: Collection) -> AppResult<Option<String>>;

    fn put(&self, collection: Collection, data: &str) -> AppResult<()>;

    /// Drop every collection.
    fn clear(&self) -> AppResult<()>;

    /// Approximate footprint of the stored data, keys included.
    fn size_bytes(&self) -> AppResult<usize> {
        let mut total = 0;
        for c in Collection::ALL {
            if let Some(data) = self.get(c)? {
                total += c.key().len() + data.len();
            }
        }
        Ok(total)
    }
}

/// Read and decode a whole collection. A missing collection is empty.
pub fn load<T: DeserializeOwned>(store: &dyn Store, collection: Collection) -> AppResult<Vec<T>> {
    match store.get(collection)? {
        Some(data) => Ok(serde_json::from_str(&data)?),
        None => Ok(Vec::new()),
    }
}

/// Encode and write back a whole collection.
///
/// serde_json writes NaN and infinities as `null`, which would make the
/// collection unreadable; such a payload is refused and nothing is written.
pub fn save<T: Serialize + DeserializeOwned>(
    store: &dyn Store,
    collection: Collection,
    records: &[T],
) -> AppResult<()> {
    let data = serde_json::to_string(records)?;
    if serde_json::from_str::<Vec<T>>(&data).is_err() {
        return Err(AppError::Validation(format!(
            "refusing to store {}: a number is not finite",
            collection.key()
        )));
    }
    store.put(collection, &data)
}
