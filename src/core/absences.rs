//! Absence ledger: leave requests, their approval and balance effects.
//!
//! Balance effects happen exactly once, at the transition into the approved
//! state, and are reversed when an approved absence is deleted.

use crate::core::employees::EmployeeLedger;
use crate::db::store::{self, Collection, Store};
use crate::errors::{AppError, AppResult};
use crate::models::absence::{Absence, AbsenceKind};
use chrono::NaiveDate;
use tracing::{debug, warn};
use uuid::Uuid;

pub struct AbsenceLedger<'a> {
    store: &'a dyn Store,
}

impl<'a> AbsenceLedger<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    pub fn all(&self) -> AppResult<Vec<Absence>> {
        store::load(self.store, Collection::Absences)
    }

    /// Absences of one employee, latest start date first.
    pub fn by_employee(&self, employee_id: &str) -> AppResult<Vec<Absence>> {
        let mut absences: Vec<Absence> = self
            .all()?
            .into_iter()
            .filter(|a| a.employee_id == employee_id)
            .collect();
        absences.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(absences)
    }

    /// Requests waiting for an administrator.
    pub fn pending(&self) -> AppResult<Vec<Absence>> {
        Ok(self.all()?.into_iter().filter(|a| !a.approved).collect())
    }

    pub fn get(&self, absence_id: &str) -> AppResult<Option<Absence>> {
        Ok(self.all()?.into_iter().find(|a| a.id == absence_id))
    }

    /// Request an absence. Sick leave is approved right away, every other
    /// type waits for `approve`.
    ///
    /// Returns `None` for a vacation the employee's remaining days cannot cover.
    pub fn create(
        &self,
        employee_id: &str,
        kind: AbsenceKind,
        start_date: NaiveDate,
        end_date: NaiveDate,
        days: f64,
        notes: Option<String>,
    ) -> AppResult<Option<Absence>> {
        self.create_with_status(employee_id, kind, start_date, end_date, days, notes, false)
    }

    /// Like `create`, but the record may arrive already approved, in which
    /// case its balance effect is applied now.
    #[allow(clippy::too_many_arguments)]
    pub fn create_with_status(
        &self,
        employee_id: &str,
        kind: AbsenceKind,
        start_date: NaiveDate,
        end_date: NaiveDate,
        days: f64,
        notes: Option<String>,
        approved: bool,
    ) -> AppResult<Option<Absence>> {
        validate(&kind, start_date, end_date, days)?;

        let employees = EmployeeLedger::new(self.store);

        if kind == AbsenceKind::Vacation {
            let remaining = employees
                .get(employee_id)?
                .map(|e| e.remaining_vacation_days);
            if remaining.is_none_or(|r| r < days) {
                warn!(employee_id, days, ?remaining, "vacation request exceeds balance");
                return Ok(None);
            }
        }

        let absence = Absence {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            approved: approved || kind.auto_approved(),
            kind,
            start_date,
            end_date,
            days,
            notes: notes.filter(|n| !n.trim().is_empty()),
        };

        if absence.approved
            && absence.kind == AbsenceKind::Vacation
            && !employees.deduct_vacation_days(employee_id, days)?
        {
            return Ok(None);
        }

        let mut absences = self.all()?;
        absences.push(absence.clone());
        store::save(self.store, Collection::Absences, &absences)?;

        if absence.approved
            && let AbsenceKind::TimeOffInLieu { hours } = absence.kind
        {
            employees.consume_overtime(employee_id, hours)?;
        }

        debug!(id = %absence.id, kind = absence.kind.label(), approved = absence.approved, "absence created");
        Ok(Some(absence))
    }

    /// Approve a pending absence and apply its balance effect.
    ///
    /// Returns `false` (and records nothing) when the absence is unknown,
    /// already approved, or a vacation the remaining days no longer cover.
    pub fn approve(&self, absence_id: &str) -> AppResult<bool> {
        let mut absences = self.all()?;
        let Some(absence) = absences
            .iter_mut()
            .find(|a| a.id == absence_id && !a.approved)
        else {
            return Ok(false);
        };

        let employees = EmployeeLedger::new(self.store);

        if absence.kind == AbsenceKind::Vacation
            && !employees.deduct_vacation_days(&absence.employee_id, absence.days)?
        {
            warn!(id = absence_id, "approval rolled back: vacation balance too low");
            return Ok(false);
        }

        absence.approved = true;
        let approved = absence.clone();
        store::save(self.store, Collection::Absences, &absences)?;

        if let AbsenceKind::TimeOffInLieu { hours } = approved.kind {
            employees.consume_overtime(&approved.employee_id, hours)?;
        }

        debug!(id = absence_id, kind = approved.kind.label(), "absence approved");
        Ok(true)
    }

    /// Remove an absence, giving back whatever its approval consumed.
    pub fn delete(&self, absence_id: &str) -> AppResult<bool> {
        let mut absences = self.all()?;
        let Some(pos) = absences.iter().position(|a| a.id == absence_id) else {
            return Ok(false);
        };
        let removed = absences.remove(pos);

        if removed.approved {
            let employees = EmployeeLedger::new(self.store);
            match removed.kind {
                AbsenceKind::Vacation => {
                    employees.restore_vacation_days(&removed.employee_id, removed.days)?;
                }
                AbsenceKind::TimeOffInLieu { hours } => {
                    employees.release_overtime(&removed.employee_id, hours)?;
                }
                AbsenceKind::SickLeave | AbsenceKind::CareLeave => {}
            }
        }

        store::save(self.store, Collection::Absences, &absences)?;

        debug!(id = absence_id, "absence deleted");
        Ok(true)
    }
}

fn validate(kind: &AbsenceKind, start: NaiveDate, end: NaiveDate, days: f64) -> AppResult<()> {
    if end < start {
        return Err(AppError::Validation(format!(
            "end date {end} is before start date {start}"
        )));
    }
    if !days.is_finite() || days <= 0.0 {
        return Err(AppError::Validation("days must be greater than zero".into()));
    }
    if let AbsenceKind::TimeOffInLieu { hours } = kind
        && (!hours.is_finite() || *hours <= 0.0)
    {
        return Err(AppError::Validation(
            "time off in lieu needs a positive number of hours".into(),
        ));
    }
    Ok(())
}
