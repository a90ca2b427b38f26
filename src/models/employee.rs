use super::employment_type::EmploymentType;
use serde::{Deserialize, Serialize};

/// Administrator identity id. Never stored among employee records.
pub const ADMIN_ID: &str = "admin";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub password: String,
    pub employment_type: EmploymentType,
    pub weekly_hours: f64,
    pub daily_hours: f64,
    pub vacation_days: f64,
    pub remaining_vacation_days: f64,
    /// Surplus worked hours, recomputed from time entries.
    #[serde(default)]
    pub accrued_overtime_hours: f64,
    /// Hours taken back through approved time-off-in-lieu.
    #[serde(default)]
    pub consumed_overtime_hours: f64,
    #[serde(default)]
    pub is_admin: bool,
}

impl Employee {
    /// New record with the defaults of its employment tier.
    pub fn new(id: String, name: String, password: String, employment_type: EmploymentType) -> Self {
        let d = employment_type.defaults();
        Self {
            id,
            name,
            password,
            employment_type,
            weekly_hours: d.weekly_hours,
            daily_hours: d.daily_hours,
            vacation_days: d.vacation_days,
            remaining_vacation_days: d.vacation_days,
            accrued_overtime_hours: 0.0,
            consumed_overtime_hours: 0.0,
            is_admin: false,
        }
    }

    /// The synthesized administrator identity.
    pub fn administrator(password: &str) -> Self {
        let mut admin = Self::new(
            ADMIN_ID.to_string(),
            "Administrator".to_string(),
            password.to_string(),
            EmploymentType::FullTime,
        );
        admin.is_admin = true;
        admin
    }

    /// Displayed overtime balance. Negative means hours owed back.
    pub fn overtime_hours(&self) -> f64 {
        self.accrued_overtime_hours - self.consumed_overtime_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_employee_starts_with_full_allotment() {
        let e = Employee::new("x".into(), "Anna".into(), "pw".into(), EmploymentType::PartTime);
        assert_eq!(e.remaining_vacation_days, e.vacation_days);
        assert_eq!(e.overtime_hours(), 0.0);
        assert!(!e.is_admin);
    }

    #[test]
    fn overtime_is_accrued_minus_consumed() {
        let mut e = Employee::new("x".into(), "Anna".into(), "pw".into(), EmploymentType::FullTime);
        e.accrued_overtime_hours = 3.0;
        e.consumed_overtime_hours = 4.5;
        assert_eq!(e.overtime_hours(), -1.5);
    }
}
