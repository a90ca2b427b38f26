// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ExportBook, Sheet};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Export JSON pretty-printed: `{ "<sheet key>": [ { "<header>": "<value>" } ] }`.
pub(crate) fn export_json(book: &ExportBook, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let mut root = Map::new();
    for sheet in &book.sheets {
        let rows: Vec<Value> = sheet
            .rows
            .iter()
            .map(|cells| {
                let obj: Map<String, Value> = sheet
                    .headers
                    .iter()
                    .zip(cells)
                    .map(|(h, c)| (h.to_string(), Value::String(c.display())))
                    .collect();
                Value::Object(obj)
            })
            .collect();
        root.insert(sheet.key.to_string(), Value::Array(rows));
    }

    fs::write(path, serde_json::to_string_pretty(&Value::Object(root))?)?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: one file per sheet, `<stem>_<sheet key>.csv` next to `path`.
pub(crate) fn export_csv(book: &ExportBook, path: &Path) -> AppResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(book.sheets.len());
    for sheet in &book.sheets {
        let target = sheet_path(path, sheet);
        info(format!("Exporting to CSV: {}", target.display()));
        write_csv(sheet, &target)?;
        notify_export_success("CSV", &target);
        written.push(target);
    }
    Ok(written)
}

pub(crate) fn sheet_path(path: &Path, sheet: &Sheet) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "export".to_string());
    path.with_file_name(format!("{stem}_{}.csv", sheet.key))
}

fn write_csv(sheet: &Sheet, path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(&sheet.headers)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    for cells in &sheet.rows {
        wtr.write_record(cells.iter().map(|c| c.display()))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
