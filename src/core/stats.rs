//! Dashboard figures for the administrator overview.

use crate::core::{AbsenceLedger, EmployeeLedger, ProjectLedger, TimeEntryLedger};
use crate::db::store::Store;
use crate::errors::AppResult;
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub employees: usize,
    pub total_overtime_hours: f64,
    pub active_entries: usize,
    pub hours_this_month: f64,
    pub pending_absences: usize,
    pub active_projects: usize,
    pub storage_bytes: usize,
}

impl DashboardStats {
    pub fn collect(store: &dyn Store, today: NaiveDate) -> AppResult<Self> {
        let employees = EmployeeLedger::new(store).all()?;
        let entries = TimeEntryLedger::new(store).all()?;

        Ok(Self {
            employees: employees.len(),
            total_overtime_hours: employees.iter().map(|e| e.overtime_hours()).sum(),
            active_entries: entries.iter().filter(|e| e.is_active()).count(),
            hours_this_month: entries
                .iter()
                .filter(|e| e.date.year() == today.year() && e.date.month() == today.month())
                .map(|e| e.total_hours)
                .sum(),
            pending_absences: AbsenceLedger::new(store).pending()?.len(),
            active_projects: ProjectLedger::new(store).active()?.len(),
            storage_bytes: store.size_bytes()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::absence::AbsenceKind;
    use crate::models::employment_type::EmploymentType;
    use chrono::NaiveTime;

    #[test]
    fn collects_dashboard_figures() {
        let store = MemoryStore::new();
        let emp = EmployeeLedger::new(&store)
            .create("Hana", "pw", EmploymentType::Minor)
            .unwrap();
        let entries = TimeEntryLedger::new(&store);
        let today = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
        let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();

        entries
            .create_manual(&emp.id, today, t(8), t(13), 0, None)
            .unwrap();
        entries
            .create_manual(&emp.id, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(), t(8), t(10), 0, None)
            .unwrap();
        entries
            .clock_in_at(&emp.id, None, today.and_time(t(14)))
            .unwrap();
        AbsenceLedger::new(&store)
            .create(&emp.id, AbsenceKind::CareLeave, today, today, 1.0, None)
            .unwrap();

        let s = DashboardStats::collect(&store, today).unwrap();
        assert_eq!(s.employees, 1);
        assert_eq!(s.total_overtime_hours, 3.0);
        assert_eq!(s.active_entries, 1);
        assert_eq!(s.hours_this_month, 5.0);
        assert_eq!(s.pending_absences, 1);
        assert_eq!(s.active_projects, 4);
        assert!(s.storage_bytes > 0);
    }
}
