//! Schema migrations, tracked through `PRAGMA user_version`.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use tracing::{debug, info};

/// Ordered list of schema steps. Index + 1 is the version they produce.
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "create collections table",
        r#"
        CREATE TABLE IF NOT EXISTS collections (
            name       TEXT PRIMARY KEY,
            data       TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    ),
];

fn current_version(conn: &Connection) -> AppResult<usize> {
    let v: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    usize::try_from(v).map_err(|_| AppError::Migration(format!("negative schema version {v}")))
}

/// Apply every migration newer than the stored schema version.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let version = current_version(conn)?;

    if version > MIGRATIONS.len() {
        return Err(AppError::Migration(format!(
            "database schema v{version} is newer than this build (v{})",
            MIGRATIONS.len()
        )));
    }

    for (idx, (label, sql)) in MIGRATIONS.iter().enumerate().skip(version) {
        let target = idx + 1;
        conn.execute_batch(&format!(
            "BEGIN;\n{sql}\nPRAGMA user_version = {target};\nCOMMIT;"
        ))
        .map_err(|e| AppError::Migration(format!("{label}: {e}")))?;
        info!(version = target, "applied migration: {label}");
    }

    debug!(version = MIGRATIONS.len(), "schema up to date");
    Ok(())
}
