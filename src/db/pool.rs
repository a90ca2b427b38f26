//! SQLite connection wrapper (lightweight for CLI usage).
//! Collections live as JSON blobs in the `collections` table.

use crate::db::initialize::init_db;
use crate::db::store::{Collection, Store};
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database and bring its schema up to date.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}

impl Store for DbPool {
    fn get(&self, collection: Collection) -> AppResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT data FROM collections WHERE name = ?1")?;
        let data = stmt
            .query_row([collection.key()], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(data)
    }

    fn put(&self, collection: Collection, data: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO collections (name, data, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(name) DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at",
        )?;
        stmt.execute(params![collection.key(), data, now])?;
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        self.conn.execute("DELETE FROM collections", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_overwrites_previous_blob() {
        let pool = DbPool::in_memory().unwrap();
        assert!(pool.get(Collection::Projects).unwrap().is_none());

        pool.put(Collection::Projects, "[1]").unwrap();
        pool.put(Collection::Projects, "[2]").unwrap();
        assert_eq!(pool.get(Collection::Projects).unwrap().as_deref(), Some("[2]"));

        pool.clear().unwrap();
        assert!(pool.get(Collection::Projects).unwrap().is_none());
    }
}
