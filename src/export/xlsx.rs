// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::date_to_excel_serial;
use crate::export::model::{Cell, ExportBook};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX: one styled worksheet per sheet, auto-sized columns.
pub(crate) fn export_xlsx(book: &ExportBook, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for sheet in &book.sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.title).map_err(to_export_error)?;

        for (col, header) in sheet.headers.iter().enumerate() {
            worksheet
                .write_with_format(0, col as u16, *header, &header_format)
                .map_err(to_export_error)?;
        }
        worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

        let mut col_widths: Vec<usize> = sheet.headers.iter().map(|h| h.width()).collect();

        for (row_index, cells) in sheet.rows.iter().enumerate() {
            let row = (row_index + 1) as u32;
            let band = if row_index % 2 == 0 {
                Color::RGB(0xEAF3FB)
            } else {
                Color::RGB(0xFFFFFF)
            };

            for (col, cell) in cells.iter().enumerate() {
                write_cell(worksheet, row, col as u16, cell, band)?;
                if let Some(w) = col_widths.get_mut(col) {
                    *w = (*w).max(cell.display().width());
                }
            }
        }

        for (c, w) in col_widths.iter().enumerate() {
            worksheet
                .set_column_width(c as u16, *w as f64 + 2.0)
                .map_err(to_export_error)?;
        }
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &Cell, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let written = match cell {
        Cell::Text(s) => worksheet.write_with_format(row, col, s.as_str(), &base),
        Cell::Number(n) => {
            let fmt = base.set_align(FormatAlign::Right);
            worksheet.write_with_format(row, col, *n, &fmt)
        }
        Cell::Hours(h) => {
            let fmt = base.set_align(FormatAlign::Right).set_num_format("0.00");
            worksheet.write_with_format(row, col, *h, &fmt)
        }
        Cell::Date(d) => {
            let fmt = base.set_num_format("dd.mm.yyyy");
            worksheet.write_with_format(row, col, date_to_excel_serial(*d), &fmt)
        }
    };
    written.map_err(to_export_error)?;

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
