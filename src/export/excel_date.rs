// src/export/excel_date.rs

use chrono::NaiveDate;

/// Excel day serial (1900 date system) of a calendar date.
pub(crate) fn date_to_excel_serial(d: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN);
    (d - epoch).num_days() as f64
}
