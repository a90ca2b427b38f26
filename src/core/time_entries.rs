//! Time entry ledger: work periods and overtime recomputation.

use crate::core::employees::EmployeeLedger;
use crate::core::overtime::accrued_overtime;
use crate::db::store::{self, Collection, Store};
use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tracing::debug;
use uuid::Uuid;

pub struct TimeEntryLedger<'a> {
    store: &'a dyn Store,
}

impl<'a> TimeEntryLedger<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    pub fn all(&self) -> AppResult<Vec<TimeEntry>> {
        store::load(self.store, Collection::TimeEntries)
    }

    /// Entries of one employee, newest date first.
    pub fn by_employee(&self, employee_id: &str) -> AppResult<Vec<TimeEntry>> {
        let mut entries: Vec<TimeEntry> = self
            .all()?
            .into_iter()
            .filter(|e| e.employee_id == employee_id)
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    pub fn get(&self, entry_id: &str) -> AppResult<Option<TimeEntry>> {
        Ok(self.all()?.into_iter().find(|e| e.id == entry_id))
    }

    /// Record a closed work period typed in by hand.
    pub fn create_manual(
        &self,
        employee_id: &str,
        date: NaiveDate,
        clock_in: NaiveTime,
        clock_out: NaiveTime,
        break_minutes: u32,
        project_id: Option<String>,
    ) -> AppResult<TimeEntry> {
        let entry = TimeEntry {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            date,
            clock_in,
            clock_out: Some(clock_out),
            break_minutes,
            project_id,
            total_hours: TimeEntry::worked_hours(clock_in, clock_out, break_minutes),
            is_manual: true,
        };

        let mut entries = self.all()?;
        entries.push(entry.clone());
        store::save(self.store, Collection::TimeEntries, &entries)?;

        self.calculate_overtime(employee_id)?;

        debug!(id = %entry.id, hours = entry.total_hours, "manual entry created");
        Ok(entry)
    }

    /// Start a live entry at the current local time.
    pub fn clock_in(&self, employee_id: &str, project_id: Option<String>) -> AppResult<TimeEntry> {
        self.clock_in_at(employee_id, project_id, Local::now().naive_local())
    }

    /// Start a live entry at `now`. Several active entries per employee are
    /// not prevented here; callers check `active_entry` first.
    pub fn clock_in_at(
        &self,
        employee_id: &str,
        project_id: Option<String>,
        now: NaiveDateTime,
    ) -> AppResult<TimeEntry> {
        let entry = TimeEntry {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            date: now.date(),
            clock_in: truncate_to_seconds(now.time()),
            clock_out: None,
            break_minutes: 0,
            project_id,
            total_hours: 0.0,
            is_manual: false,
        };

        let mut entries = self.all()?;
        entries.push(entry.clone());
        store::save(self.store, Collection::TimeEntries, &entries)?;

        debug!(id = %entry.id, employee_id, "clocked in");
        Ok(entry)
    }

    /// Close an active entry at the current local time.
    pub fn clock_out(&self, entry_id: &str, break_minutes: u32) -> AppResult<Option<TimeEntry>> {
        self.clock_out_at(entry_id, break_minutes, Local::now().naive_local())
    }

    /// Close an active entry. `None` if it does not exist or is already closed.
    pub fn clock_out_at(
        &self,
        entry_id: &str,
        break_minutes: u32,
        now: NaiveDateTime,
    ) -> AppResult<Option<TimeEntry>> {
        let mut entries = self.all()?;
        let Some(entry) = entries
            .iter_mut()
            .find(|e| e.id == entry_id && e.is_active())
        else {
            return Ok(None);
        };

        entry.clock_out = Some(truncate_to_seconds(now.time()));
        entry.break_minutes = break_minutes;
        entry.refresh_total();
        let closed = entry.clone();

        store::save(self.store, Collection::TimeEntries, &entries)?;
        self.calculate_overtime(&closed.employee_id)?;

        debug!(id = %closed.id, hours = closed.total_hours, "clocked out");
        Ok(Some(closed))
    }

    /// Replace an entry (hours are recomputed). Unknown ids are ignored.
    pub fn update(&self, entry: &TimeEntry) -> AppResult<bool> {
        let mut entries = self.all()?;
        let Some(slot) = entries.iter_mut().find(|e| e.id == entry.id) else {
            return Ok(false);
        };

        let previous_owner = std::mem::replace(slot, entry.clone()).employee_id;
        slot.refresh_total();
        store::save(self.store, Collection::TimeEntries, &entries)?;

        self.calculate_overtime(&entry.employee_id)?;
        if previous_owner != entry.employee_id {
            self.calculate_overtime(&previous_owner)?;
        }

        debug!(id = %entry.id, "entry updated");
        Ok(true)
    }

    /// Remove an entry and recompute its former owner's overtime.
    pub fn delete(&self, entry_id: &str) -> AppResult<bool> {
        let mut entries = self.all()?;
        let Some(pos) = entries.iter().position(|e| e.id == entry_id) else {
            return Ok(false);
        };
        let removed = entries.remove(pos);
        store::save(self.store, Collection::TimeEntries, &entries)?;

        self.calculate_overtime(&removed.employee_id)?;

        debug!(id = entry_id, "entry deleted");
        Ok(true)
    }

    /// Recompute the employee's accrued overtime from every entry they own.
    ///
    /// Only the accrued part is overwritten; hours consumed by time off in
    /// lieu are kept separately and survive the recomputation.
    pub fn calculate_overtime(&self, employee_id: &str) -> AppResult<Option<f64>> {
        let employees = EmployeeLedger::new(self.store);
        let Some(employee) = employees.get(employee_id)? else {
            return Ok(None);
        };

        let entries = self.by_employee(employee_id)?;
        let accrued = accrued_overtime(&entries, employee.daily_hours);
        employees.set_overtime_hours(employee_id, accrued)?;

        debug!(employee_id, accrued, "overtime recomputed");
        Ok(Some(accrued))
    }

    /// The employee's open entry, if any.
    pub fn active_entry(&self, employee_id: &str) -> AppResult<Option<TimeEntry>> {
        Ok(self
            .by_employee(employee_id)?
            .into_iter()
            .find(TimeEntry::is_active))
    }

    pub fn total_hours_for_month(&self, employee_id: &str, year: i32, month: u32) -> AppResult<f64> {
        Ok(self
            .by_employee(employee_id)?
            .iter()
            .filter(|e| e.date.year() == year && e.date.month() == month)
            .map(|e| e.total_hours)
            .sum())
    }
}

fn truncate_to_seconds(t: NaiveTime) -> NaiveTime {
    t.with_nanosecond(0).unwrap_or(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::employment_type::EmploymentType;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn employee_with_target(store: &MemoryStore, daily: f64) -> String {
        let employees = EmployeeLedger::new(store);
        let mut e = employees.create("Dora", "pw", EmploymentType::FullTime).unwrap();
        e.daily_hours = daily;
        employees.update(&e).unwrap();
        e.id
    }

    fn overtime(store: &MemoryStore, id: &str) -> f64 {
        EmployeeLedger::new(store).get(id).unwrap().unwrap().overtime_hours()
    }

    #[test]
    fn manual_entry_deducts_break() {
        let store = MemoryStore::new();
        let ledger = TimeEntryLedger::new(&store);
        let id = employee_with_target(&store, 8.0);

        let e = ledger
            .create_manual(&id, d("2025-05-05"), t("08:00"), t("16:00"), 30, None)
            .unwrap();
        assert_eq!(e.total_hours, 7.5);
        assert!(e.is_manual);
        assert_eq!(ledger.all().unwrap().len(), 1);
    }

    #[test]
    fn overtime_counts_surplus_days_only() {
        let store = MemoryStore::new();
        let ledger = TimeEntryLedger::new(&store);
        let id = employee_with_target(&store, 8.0);

        ledger
            .create_manual(&id, d("2025-05-05"), t("07:00"), t("13:00"), 0, None)
            .unwrap();
        ledger
            .create_manual(&id, d("2025-05-05"), t("14:00"), t("18:00"), 0, None)
            .unwrap();
        assert_eq!(overtime(&store, &id), 2.0);

        ledger
            .create_manual(&id, d("2025-05-06"), t("08:00"), t("14:00"), 0, None)
            .unwrap();
        assert_eq!(overtime(&store, &id), 2.0);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let store = MemoryStore::new();
        let ledger = TimeEntryLedger::new(&store);
        let id = employee_with_target(&store, 8.0);
        ledger
            .create_manual(&id, d("2025-05-05"), t("07:00"), t("18:00"), 60, None)
            .unwrap();

        let first = ledger.calculate_overtime(&id).unwrap();
        let second = ledger.calculate_overtime(&id).unwrap();
        assert_eq!(first, Some(2.0));
        assert_eq!(first, second);
    }

    #[test]
    fn deleting_a_day_reduces_overtime() {
        let store = MemoryStore::new();
        let ledger = TimeEntryLedger::new(&store);
        let id = employee_with_target(&store, 8.0);
        let long = ledger
            .create_manual(&id, d("2025-05-05"), t("06:00"), t("18:00"), 0, None)
            .unwrap();
        assert_eq!(overtime(&store, &id), 4.0);

        assert!(ledger.delete(&long.id).unwrap());
        assert_eq!(overtime(&store, &id), 0.0);
        assert!(!ledger.delete(&long.id).unwrap());
    }

    #[test]
    fn clock_in_then_out() {
        let store = MemoryStore::new();
        let ledger = TimeEntryLedger::new(&store);
        let id = employee_with_target(&store, 8.0);

        let start = d("2025-05-07").and_time(t("07:00"));
        let open = ledger
            .clock_in_at(&id, Some("1".into()), start)
            .unwrap();
        assert!(open.is_active());
        assert!(!open.is_manual);
        assert_eq!(open.total_hours, 0.0);
        assert_eq!(ledger.active_entry(&id).unwrap().map(|e| e.id), Some(open.id.clone()));

        let end = d("2025-05-07").and_time(t("17:30"));
        let closed = ledger.clock_out_at(&open.id, 30, end).unwrap().unwrap();
        assert_eq!(closed.total_hours, 10.0);
        assert_eq!(closed.break_minutes, 30);
        assert!(ledger.active_entry(&id).unwrap().is_none());
        assert_eq!(overtime(&store, &id), 2.0);

        // already closed
        assert!(ledger.clock_out_at(&open.id, 0, end).unwrap().is_none());
        // unknown
        assert!(ledger.clock_out_at("missing", 0, end).unwrap().is_none());
    }

    #[test]
    fn recomputation_keeps_time_off_in_lieu() {
        let store = MemoryStore::new();
        let ledger = TimeEntryLedger::new(&store);
        let id = employee_with_target(&store, 8.0);
        ledger
            .create_manual(&id, d("2025-05-05"), t("06:00"), t("18:00"), 0, None)
            .unwrap();
        EmployeeLedger::new(&store).consume_overtime(&id, 3.0).unwrap();
        assert_eq!(overtime(&store, &id), 1.0);

        ledger
            .create_manual(&id, d("2025-05-06"), t("08:00"), t("17:00"), 0, None)
            .unwrap();
        assert_eq!(overtime(&store, &id), 2.0);
    }

    #[test]
    fn update_recomputes_hours() {
        let store = MemoryStore::new();
        let ledger = TimeEntryLedger::new(&store);
        let id = employee_with_target(&store, 8.0);
        let mut e = ledger
            .create_manual(&id, d("2025-05-05"), t("08:00"), t("16:00"), 0, None)
            .unwrap();

        e.clock_out = Some(t("19:00"));
        assert!(ledger.update(&e).unwrap());
        assert_eq!(ledger.get(&e.id).unwrap().unwrap().total_hours, 11.0);
        assert_eq!(overtime(&store, &id), 3.0);
    }

    #[test]
    fn month_total() {
        let store = MemoryStore::new();
        let ledger = TimeEntryLedger::new(&store);
        let id = employee_with_target(&store, 8.0);
        ledger
            .create_manual(&id, d("2025-05-05"), t("08:00"), t("12:00"), 0, None)
            .unwrap();
        ledger
            .create_manual(&id, d("2025-05-20"), t("08:00"), t("10:00"), 0, None)
            .unwrap();
        ledger
            .create_manual(&id, d("2025-06-02"), t("08:00"), t("10:00"), 0, None)
            .unwrap();
        assert_eq!(ledger.total_hours_for_month(&id, 2025, 5).unwrap(), 6.0);
    }
}
