//! Overtime accrual from daily worked hours.

use crate::models::time_entry::TimeEntry;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Sum of the daily surplus over `daily_hours`.
///
/// Entries are grouped by calendar date; days at or under target contribute
/// nothing (shortfalls are never subtracted).
pub fn accrued_overtime<'a, I>(entries: I, daily_hours: f64) -> f64
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    let mut per_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for e in entries {
        *per_day.entry(e.date).or_insert(0.0) += e.total_hours;
    }

    per_day
        .values()
        .map(|worked| (worked - daily_hours).max(0.0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn entry(date: &str, hours: f64) -> TimeEntry {
        TimeEntry {
            id: format!("{date}-{hours}"),
            employee_id: "e".into(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            clock_in: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            clock_out: None,
            break_minutes: 0,
            project_id: None,
            total_hours: hours,
            is_manual: true,
        }
    }

    #[test]
    fn surplus_days_only() {
        let entries = vec![
            entry("2025-04-01", 6.0),
            entry("2025-04-01", 4.0),
            entry("2025-04-02", 6.0),
        ];
        assert_eq!(accrued_overtime(&entries, 8.0), 2.0);
    }

    #[test]
    fn no_entries_no_overtime() {
        let none: Vec<TimeEntry> = Vec::new();
        assert_eq!(accrued_overtime(&none, 7.7), 0.0);
    }
}
