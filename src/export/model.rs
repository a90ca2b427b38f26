// src/export/model.rs

use crate::core::projects::project_label;
use crate::core::{AbsenceLedger, EmployeeLedger, ProjectLedger, TimeEntryLedger};
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::utils::date::format_date_dmy;
use crate::utils::formatting::{fmt_days, fmt_hours};
use chrono::NaiveDate;

/// A single exported value. Kept typed so spreadsheets get real numbers/dates.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    /// Hour amount, shown with two decimals.
    Hours(f64),
    Date(NaiveDate),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// Human-readable rendering used by CSV and JSON.
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => fmt_days(*n),
            Cell::Hours(h) => fmt_hours(*h),
            Cell::Date(d) => format_date_dmy(*d),
        }
    }
}

/// One table of the export (one worksheet in XLSX).
#[derive(Debug, Clone)]
pub struct Sheet {
    /// File-name friendly identifier.
    pub key: &'static str,
    pub title: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

/// Read-only projection of every collection, foreign keys resolved to names.
#[derive(Debug, Clone)]
pub struct ExportBook {
    pub sheets: Vec<Sheet>,
}

fn employee_name(employees: &[Employee], id: &str) -> String {
    employees
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

impl ExportBook {
    pub fn from_store(store: &dyn Store) -> AppResult<Self> {
        let employees = EmployeeLedger::new(store).all()?;
        let entries = TimeEntryLedger::new(store).all()?;
        let project_ledger = ProjectLedger::new(store);
        let projects = project_ledger.all()?;
        let absences = AbsenceLedger::new(store).all()?;

        let employee_sheet = Sheet {
            key: "employees",
            title: "Employees",
            headers: vec![
                "Name",
                "Username",
                "Password",
                "Employment",
                "Weekly hours",
                "Vacation days",
                "Remaining vacation",
                "Overtime",
            ],
            rows: employees
                .iter()
                .map(|e| {
                    vec![
                        Cell::text(&e.name),
                        Cell::text(&e.name),
                        Cell::text(&e.password),
                        Cell::text(e.employment_type.label()),
                        Cell::Number(e.weekly_hours),
                        Cell::Number(e.vacation_days),
                        Cell::Number(e.remaining_vacation_days),
                        Cell::Hours(e.overtime_hours()),
                    ]
                })
                .collect(),
        };

        let entry_sheet = Sheet {
            key: "time_entries",
            title: "Time entries",
            headers: vec![
                "Date",
                "Employee",
                "Start",
                "End",
                "Break (min)",
                "Hours",
                "Project",
            ],
            rows: entries
                .iter()
                .map(|e| {
                    vec![
                        Cell::Date(e.date),
                        Cell::Text(employee_name(&employees, &e.employee_id)),
                        Cell::Text(e.clock_in_str()),
                        Cell::Text(
                            e.clock_out_str()
                                .unwrap_or_else(|| "Still active".to_string()),
                        ),
                        Cell::Number(f64::from(e.break_minutes)),
                        Cell::Hours(e.total_hours),
                        Cell::Text(project_label(&projects, e.project_id.as_deref())),
                    ]
                })
                .collect(),
        };

        let mut project_rows = Vec::with_capacity(projects.len());
        for p in &projects {
            project_rows.push(vec![
                Cell::text(&p.name),
                Cell::text(&p.description),
                Cell::text(p.status_label()),
                Cell::Hours(project_ledger.hours_for(&p.id)?),
            ]);
        }
        let project_sheet = Sheet {
            key: "projects",
            title: "Projects",
            headers: vec!["Name", "Description", "Status", "Total hours"],
            rows: project_rows,
        };

        let absence_sheet = Sheet {
            key: "absences",
            title: "Absences",
            headers: vec!["Employee", "Type", "From", "To", "Days", "Status"],
            rows: absences
                .iter()
                .map(|a| {
                    vec![
                        Cell::Text(employee_name(&employees, &a.employee_id)),
                        Cell::text(a.kind.label()),
                        Cell::Date(a.start_date),
                        Cell::Date(a.end_date),
                        Cell::Number(a.days),
                        Cell::text(a.status_label()),
                    ]
                })
                .collect(),
        };

        let credential_sheet = Sheet {
            key: "credentials",
            title: "Credentials",
            headers: vec!["Employee", "Username", "Password", "Employment"],
            rows: employees
                .iter()
                .map(|e| {
                    vec![
                        Cell::text(&e.name),
                        Cell::text(&e.name),
                        Cell::text(&e.password),
                        Cell::text(e.employment_type.label()),
                    ]
                })
                .collect(),
        };

        Ok(Self {
            sheets: vec![
                employee_sheet,
                entry_sheet,
                project_sheet,
                absence_sheet,
                credential_sheet,
            ],
        })
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.iter().all(|s| s.rows.is_empty())
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
    fn resolves_names_and_dangling_references() {
        let store = MemoryStore::new();
        let employees = EmployeeLedger::new(&store);
        let kept = employees.create("Jana", "pw1", EmploymentType::FullTime).unwrap();
        let gone = employees.create("Karl", "pw2", EmploymentType::Minor).unwrap();

        let day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        let entries = TimeEntryLedger::new(&store);
        entries
            .create_manual(&kept.id, day, t(8), t(12), 0, Some("ghost".into()))
            .unwrap();
        entries.clock_in_at(&gone.id, None, day.and_time(t(9))).unwrap();
        AbsenceLedger::new(&store)
            .create(&gone.id, AbsenceKind::SickLeave, day, day, 1.0, None)
            .unwrap();
        employees.delete(&gone.id).unwrap();

        let book = ExportBook::from_store(&store).unwrap();
        let titles: Vec<&str> = book.sheets.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            ["Employees", "Time entries", "Projects", "Absences", "Credentials"]
        );

        let entry_rows = &book.sheets[1].rows;
        assert_eq!(entry_rows[0][1], Cell::text("Jana"));
        assert_eq!(entry_rows[0][5].display(), "4.00");
        assert_eq!(entry_rows[0][6], Cell::text("Unknown"));
        assert_eq!(entry_rows[1][1], Cell::text("Unknown"));
        assert_eq!(entry_rows[1][3], Cell::text("Still active"));
        assert_eq!(entry_rows[1][6], Cell::text("No project"));

        let absence_rows = &book.sheets[3].rows;
        assert_eq!(absence_rows[0][0], Cell::text("Unknown"));
        assert_eq!(absence_rows[0][2].display(), "02.06.2025");
        assert_eq!(absence_rows[0][5], Cell::text("Approved"));

        assert_eq!(book.sheets[4].rows.len(), 1);
        assert_eq!(book.sheets[4].rows[0][2], Cell::text("pw1"));
    }

    #[test]
    fn building_the_book_writes_nothing() {
        let store = MemoryStore::new();
        let book = ExportBook::from_store(&store).unwrap();

        assert_eq!(book.sheets[2].rows.len(), 4);
        assert_eq!(store.size_bytes().unwrap(), 0);
    }
}
