// src/export/logic.rs

use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json, sheet_path};
use crate::export::model::ExportBook;
use crate::export::xlsx::export_xlsx;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write every collection to `file`.
    ///
    /// - `xlsx`: one workbook, one worksheet per collection plus credentials
    /// - `json`: one document keyed by sheet
    /// - `csv`: one file per sheet, named after `file`
    ///
    /// Returns the written paths.
    pub fn export(
        store: &dyn Store,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<Vec<PathBuf>> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let book = ExportBook::from_store(store)?;

        match format {
            ExportFormat::Xlsx => {
                ensure_writable(&path, force)?;
                export_xlsx(&book, &path)?;
                Ok(vec![path])
            }
            ExportFormat::Json => {
                ensure_writable(&path, force)?;
                export_json(&book, &path)?;
                Ok(vec![path])
            }
            ExportFormat::Csv => {
                for sheet in &book.sheets {
                    ensure_writable(&sheet_path(&path, sheet), force)?;
                }
                export_csv(&book, &path)
            }
        }
    }
}
