use crate::cli::context::AppContext;
use crate::cli::parser::EmployeeAction;
use crate::config::Config;
use crate::core::TimeEntryLedger;
use crate::errors::{AppError, AppResult};
use crate::models::employment_type::EmploymentType;
use crate::ui::messages::{header, info, success, warning};
use crate::ui::prompt::confirm;
use crate::utils::formatting::{colorize_balance, fmt_days, fmt_hours};
use crate::utils::table::Table;

fn parse_employment(code: &str) -> AppResult<EmploymentType> {
    EmploymentType::from_code(code).ok_or_else(|| AppError::InvalidEmploymentType(code.to_string()))
}

pub fn handle(action: &EmployeeAction, cfg: &Config) -> AppResult<()> {
    let ctx = AppContext::open(cfg)?;
    ctx.require_admin()?;
    let ledger = ctx.employees();

    match action {
        EmployeeAction::Add {
            name,
            password,
            employment,
        } => {
            let kind = parse_employment(employment)?;
            let emp = ledger.create(name, password, kind)?;
            success(format!(
                "Employee '{}' created ({}, {} vacation days).",
                emp.name,
                emp.employment_type.label(),
                fmt_days(emp.vacation_days)
            ));
        }

        EmployeeAction::List => {
            let employees = ledger.all()?;
            if employees.is_empty() {
                info("No employees yet.");
                return Ok(());
            }

            let mut table = Table::new([
                "Name",
                "Employment",
                "Weekly h",
                "Daily h",
                "Vacation",
                "Overtime",
            ]);
            for e in &employees {
                table.add_row(vec![
                    e.name.clone(),
                    e.employment_type.label().to_string(),
                    fmt_hours(e.weekly_hours),
                    fmt_hours(e.daily_hours),
                    format!(
                        "{}/{}",
                        fmt_days(e.remaining_vacation_days),
                        fmt_days(e.vacation_days)
                    ),
                    colorize_balance(e.overtime_hours()),
                ]);
            }
            header("Employees");
            println!("{}", table.render());
        }

        EmployeeAction::Show { employee } => {
            let e = ctx.find_employee(employee)?;
            header(&e.name);
            println!("Id              : {}", e.id);
            println!("Employment      : {}", e.employment_type.label());
            println!(
                "Target hours    : {} / week, {} / day",
                fmt_hours(e.weekly_hours),
                fmt_hours(e.daily_hours)
            );
            println!(
                "Vacation        : {} of {} days left",
                fmt_days(e.remaining_vacation_days),
                fmt_days(e.vacation_days)
            );
            println!("Overtime accrued: {}", fmt_hours(e.accrued_overtime_hours));
            println!("Overtime taken  : {}", fmt_hours(e.consumed_overtime_hours));
            println!("Overtime balance: {}", colorize_balance(e.overtime_hours()));
        }

        EmployeeAction::Update {
            employee,
            name,
            password,
            employment,
            weekly_hours,
            daily_hours,
            vacation_days,
            remaining_days,
        } => {
            let mut e = ctx.find_employee(employee)?;

            if let Some(n) = name {
                let n = n.trim();
                if n.is_empty() {
                    return Err(AppError::Validation("name must not be empty".into()));
                }
                e.name = n.to_string();
            }
            if let Some(p) = password {
                e.password = p.clone();
            }
            if let Some(code) = employment {
                let kind = parse_employment(code)?;
                let d = kind.defaults();
                e.employment_type = kind;
                e.weekly_hours = d.weekly_hours;
                e.daily_hours = d.daily_hours;
                e.vacation_days = d.vacation_days;
            }
            if let Some(h) = weekly_hours {
                e.weekly_hours = *h;
            }
            if let Some(h) = daily_hours {
                e.daily_hours = *h;
            }
            if let Some(d) = vacation_days {
                e.vacation_days = *d;
            }
            if let Some(d) = remaining_days {
                e.remaining_vacation_days = *d;
            }
            if !ledger.update(&e)? {
                return Err(AppError::NotFound(format!("employee '{employee}'")));
            }
            // daily target may have changed
            TimeEntryLedger::new(&ctx.pool).calculate_overtime(&e.id)?;
            success(format!("Employee '{}' updated.", e.name));
        }

        EmployeeAction::Del { employee, force } => {
            let e = ctx.find_employee(employee)?;
            if !*force
                && !confirm(&format!(
                    "Delete employee '{}'? Their entries and absences stay in storage.",
                    e.name
                ))?
            {
                info("Deletion cancelled.");
                return Ok(());
            }
            if !ledger.delete(&e.id)? {
                return Err(AppError::NotFound(format!("employee '{employee}'")));
            }
            warning(format!("Employee '{}' deleted.", e.name));
        }

        EmployeeAction::Recalc { employee } => {
            let e = ctx.find_employee(employee)?;
            let accrued = TimeEntryLedger::new(&ctx.pool)
                .calculate_overtime(&e.id)?
                .ok_or_else(|| AppError::NotFound(format!("employee '{employee}'")))?;
            success(format!(
                "Overtime for '{}' recomputed: {} h accrued.",
                e.name,
                fmt_hours(accrued)
            ));
        }
    }

    Ok(())
}
