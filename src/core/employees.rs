//! Employee ledger: employee records and their vacation / overtime balances.

use crate::db::store::{self, Collection, Store};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::employment_type::EmploymentType;
use tracing::{debug, warn};
use uuid::Uuid;

pub struct EmployeeLedger<'a> {
    store: &'a dyn Store,
}

impl<'a> EmployeeLedger<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    pub fn all(&self) -> AppResult<Vec<Employee>> {
        store::load(self.store, Collection::Employees)
    }

    pub fn get(&self, id: &str) -> AppResult<Option<Employee>> {
        Ok(self.all()?.into_iter().find(|e| e.id == id))
    }

    /// Create an employee with the defaults of its employment tier.
    pub fn create(
        &self,
        name: &str,
        password: &str,
        employment_type: EmploymentType,
    ) -> AppResult<Employee> {
        let name = name.trim();
        if name.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "name and password are required".into(),
            ));
        }

        let employee = Employee::new(
            Uuid::new_v4().to_string(),
            name.to_string(),
            password.to_string(),
            employment_type,
        );

        let mut employees = self.all()?;
        employees.push(employee.clone());
        store::save(self.store, Collection::Employees, &employees)?;

        debug!(id = %employee.id, name = %employee.name, "employee created");
        Ok(employee)
    }

    /// Replace the stored record with the same id. Unknown ids are ignored.
    ///
    /// Hour targets and allotments must be finite and non-negative; the
    /// remaining days are clamped into `[0, vacation_days]`.
    pub fn update(&self, employee: &Employee) -> AppResult<bool> {
        validate_figures(employee)?;
        let mut employee = employee.clone();
        employee.remaining_vacation_days = employee
            .remaining_vacation_days
            .clamp(0.0, employee.vacation_days);

        let mut employees = self.all()?;
        let Some(slot) = employees.iter_mut().find(|e| e.id == employee.id) else {
            return Ok(false);
        };
        *slot = employee.clone();
        store::save(self.store, Collection::Employees, &employees)?;

        debug!(id = %employee.id, "employee updated");
        Ok(true)
    }

    /// Remove the record. Time entries and absences keep their dangling reference.
    pub fn delete(&self, id: &str) -> AppResult<bool> {
        let mut employees = self.all()?;
        let before = employees.len();
        employees.retain(|e| e.id != id);
        if employees.len() == before {
            return Ok(false);
        }
        store::save(self.store, Collection::Employees, &employees)?;

        debug!(id, "employee deleted");
        Ok(true)
    }

    /// Subtract vacation days only if the remaining balance covers them.
    pub fn deduct_vacation_days(&self, id: &str, days: f64) -> AppResult<bool> {
        self.modify(id, |e| {
            if e.remaining_vacation_days < days {
                warn!(
                    id = %e.id,
                    requested = days,
                    remaining = e.remaining_vacation_days,
                    "not enough vacation days"
                );
                return false;
            }
            e.remaining_vacation_days -= days;
            true
        })
    }

    /// Give vacation days back, never above the yearly allotment.
    pub fn restore_vacation_days(&self, id: &str, days: f64) -> AppResult<bool> {
        self.modify(id, |e| {
            e.remaining_vacation_days = (e.remaining_vacation_days + days).min(e.vacation_days);
            true
        })
    }

    /// Overwrite the accrued overtime with a freshly computed value.
    pub fn set_overtime_hours(&self, id: &str, hours: f64) -> AppResult<bool> {
        self.modify(id, |e| {
            e.accrued_overtime_hours = hours;
            true
        })
    }

    /// Book hours taken as time off in lieu. The balance may go negative.
    pub fn consume_overtime(&self, id: &str, hours: f64) -> AppResult<bool> {
        self.modify(id, |e| {
            e.consumed_overtime_hours += hours;
            debug!(id = %e.id, hours, balance = e.overtime_hours(), "overtime consumed");
            true
        })
    }

    pub fn release_overtime(&self, id: &str, hours: f64) -> AppResult<bool> {
        self.modify(id, |e| {
            e.consumed_overtime_hours -= hours;
            true
        })
    }

    /// Read-modify-write of a single employee. `f` returns whether to persist.
    fn modify<F>(&self, id: &str, f: F) -> AppResult<bool>
    where
        F: FnOnce(&mut Employee) -> bool,
    {
        let mut employees = self.all()?;
        let Some(emp) = employees.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };
        if !f(emp) {
            return Ok(false);
        }
        store::save(self.store, Collection::Employees, &employees)?;
        Ok(true)
    }
}

fn validate_figures(e: &Employee) -> AppResult<()> {
    for (label, value) in [
        ("weekly hours", e.weekly_hours),
        ("daily hours", e.daily_hours),
        ("vacation days", e.vacation_days),
        ("remaining vacation days", e.remaining_vacation_days),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::Validation(format!(
                "{label} must be a non-negative number, got {value}"
            )));
        }
    }
    if !e.accrued_overtime_hours.is_finite() || !e.consumed_overtime_hours.is_finite() {
        return Err(AppError::Validation("overtime hours must be finite".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[test]
    fn create_uses_tier_defaults() {
        let store = MemoryStore::new();
        let ledger = EmployeeLedger::new(&store);

        let e = ledger.create("Mia", "secret", EmploymentType::FullTime).unwrap();
        assert_eq!(e.vacation_days, 30.0);
        assert_eq!(e.remaining_vacation_days, 30.0);
        assert_eq!(e.daily_hours, 7.7);
        assert_eq!(e.overtime_hours(), 0.0);
        assert_eq!(ledger.all().unwrap().len(), 1);
    }

    #[test]
    fn create_rejects_missing_fields() {
        let store = MemoryStore::new();
        let ledger = EmployeeLedger::new(&store);

        assert!(matches!(
            ledger.create("  ", "pw", EmploymentType::Minor),
            Err(AppError::Validation(_))
        ));
        assert!(ledger.all().unwrap().is_empty());
    }

    #[test]
    fn deduct_only_within_balance() {
        let store = MemoryStore::new();
        let ledger = EmployeeLedger::new(&store);
        let e = ledger.create("Ben", "pw", EmploymentType::Minor).unwrap();

        assert!(ledger.deduct_vacation_days(&e.id, 3.0).unwrap());
        assert_eq!(ledger.get(&e.id).unwrap().unwrap().remaining_vacation_days, 2.0);

        assert!(!ledger.deduct_vacation_days(&e.id, 2.5).unwrap());
        assert_eq!(ledger.get(&e.id).unwrap().unwrap().remaining_vacation_days, 2.0);

        assert!(ledger.deduct_vacation_days(&e.id, 2.0).unwrap());
        assert_eq!(ledger.get(&e.id).unwrap().unwrap().remaining_vacation_days, 0.0);
    }

    #[test]
    fn restore_never_exceeds_allotment() {
        let store = MemoryStore::new();
        let ledger = EmployeeLedger::new(&store);
        let e = ledger.create("Ben", "pw", EmploymentType::Minor).unwrap();

        ledger.deduct_vacation_days(&e.id, 1.0).unwrap();
        ledger.restore_vacation_days(&e.id, 4.0).unwrap();
        assert_eq!(ledger.get(&e.id).unwrap().unwrap().remaining_vacation_days, 5.0);
    }

    #[test]
    fn update_and_delete_unknown_are_noops() {
        let store = MemoryStore::new();
        let ledger = EmployeeLedger::new(&store);
        let mut ghost = Employee::new("nope".into(), "G".into(), "pw".into(), EmploymentType::Minor);
        ghost.weekly_hours = 1.0;

        assert!(!ledger.update(&ghost).unwrap());
        assert!(!ledger.delete("nope").unwrap());
        assert!(!ledger.deduct_vacation_days("nope", 1.0).unwrap());
        assert!(ledger.all().unwrap().is_empty());
    }

    #[test]
    fn set_overtime_keeps_consumed_hours() {
        let store = MemoryStore::new();
        let ledger = EmployeeLedger::new(&store);
        let e = ledger.create("Cleo", "pw", EmploymentType::FullTime).unwrap();

        ledger.consume_overtime(&e.id, 4.0).unwrap();
        ledger.set_overtime_hours(&e.id, 6.0).unwrap();
        assert_eq!(ledger.get(&e.id).unwrap().unwrap().overtime_hours(), 2.0);

        ledger.release_overtime(&e.id, 4.0).unwrap();
        assert_eq!(ledger.get(&e.id).unwrap().unwrap().overtime_hours(), 6.0);
    }

    #[test]
    fn update_rejects_negative_and_non_finite_figures() {
        let store = MemoryStore::new();
        let ledger = EmployeeLedger::new(&store);
        let e = ledger.create("Dina", "pw", EmploymentType::FullTime).unwrap();

        let mut bad = e.clone();
        bad.vacation_days = -1.0;
        assert!(matches!(ledger.update(&bad), Err(AppError::Validation(_))));

        let mut bad = e.clone();
        bad.daily_hours = f64::INFINITY;
        assert!(matches!(ledger.update(&bad), Err(AppError::Validation(_))));

        let mut bad = e.clone();
        bad.weekly_hours = f64::NAN;
        assert!(matches!(ledger.update(&bad), Err(AppError::Validation(_))));

        let mut bad = e.clone();
        bad.remaining_vacation_days = f64::NEG_INFINITY;
        assert!(matches!(ledger.update(&bad), Err(AppError::Validation(_))));

        // nothing was written and the collection still loads
        assert_eq!(ledger.get(&e.id).unwrap().unwrap(), e);
    }

    #[test]
    fn update_clamps_remaining_days_into_allotment() {
        let store = MemoryStore::new();
        let ledger = EmployeeLedger::new(&store);
        let mut e = ledger.create("Ella", "pw", EmploymentType::FullTime).unwrap();

        e.vacation_days = 10.0;
        assert!(ledger.update(&e).unwrap());
        assert_eq!(ledger.get(&e.id).unwrap().unwrap().remaining_vacation_days, 10.0);
    }
}
