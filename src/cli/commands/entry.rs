use crate::cli::context::AppContext;
use crate::cli::parser::EntryAction;
use crate::config::Config;
use crate::core::projects::project_label;
use crate::core::{ProjectLedger, TimeEntryLedger};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::time_entry::TimeEntry;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::date::{format_date_dmy, parse_date, parse_month};
use crate::utils::formatting::fmt_hours;
use crate::utils::table::Table;
use crate::utils::time::parse_required_time;
use chrono::Datelike;

pub fn handle(action: &EntryAction, cfg: &Config) -> AppResult<()> {
    let ctx = AppContext::open(cfg)?;
    let who = ctx.require_user()?;
    let ledger = TimeEntryLedger::new(&ctx.pool);

    match action {
        EntryAction::Add {
            date,
            start,
            end,
            break_minutes,
            project,
            employee,
        } => {
            let target = ctx.target_employee(&who, employee.as_deref())?;
            let date = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
            let clock_in = parse_required_time(start)?;
            let clock_out = parse_required_time(end)?;
            let project_id = project
                .as_deref()
                .map(|key| ctx.find_active_project(key).map(|p| p.id))
                .transpose()?;

            if clock_out <= clock_in {
                warning("Clock-out is not after clock-in; the entry counts 0 hours.");
            }

            let entry = ledger.create_manual(
                &target.id,
                date,
                clock_in,
                clock_out,
                *break_minutes,
                project_id,
            )?;
            success(format!(
                "Entry on {} for {}: {} h.",
                format_date_dmy(entry.date),
                target.name,
                fmt_hours(entry.total_hours)
            ));
        }

        EntryAction::List { employee, month } => {
            let mut entries = match (who.is_admin, employee) {
                (true, None) => {
                    let mut all = ledger.all()?;
                    all.sort_by(|a, b| b.date.cmp(&a.date));
                    all
                }
                _ => {
                    let target = ctx.target_employee(&who, employee.as_deref())?;
                    ledger.by_employee(&target.id)?
                }
            };

            if let Some(m) = month {
                let (year, month) =
                    parse_month(m).ok_or_else(|| AppError::InvalidDate(m.clone()))?;
                entries.retain(|e| e.date.year() == year && e.date.month() == month);
            }

            print_entries(&ctx, &entries)?;
        }

        EntryAction::Edit {
            id,
            date,
            start,
            end,
            break_minutes,
            project,
        } => {
            let mut entry = ledger
                .get(id)?
                .ok_or_else(|| AppError::NotFound(format!("entry '{id}'")))?;
            ctx.ensure_owner_or_admin(&who, &entry.employee_id)?;

            if let Some(d) = date {
                entry.date = parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
            }
            if let Some(t) = start {
                entry.clock_in = parse_required_time(t)?;
            }
            if let Some(t) = end {
                entry.clock_out = Some(parse_required_time(t)?);
            }
            if let Some(b) = break_minutes {
                entry.break_minutes = *b;
            }
            if let Some(key) = project {
                entry.project_id = Some(ctx.find_active_project(key)?.id);
            }

            if !ledger.update(&entry)? {
                return Err(AppError::NotFound(format!("entry '{id}'")));
            }
            success(format!("Entry {id} updated."));
        }

        EntryAction::Del { id } => {
            let entry = ledger
                .get(id)?
                .ok_or_else(|| AppError::NotFound(format!("entry '{id}'")))?;
            ctx.ensure_owner_or_admin(&who, &entry.employee_id)?;

            ledger.delete(id)?;
            warning(format!(
                "Entry of {} deleted.",
                format_date_dmy(entry.date)
            ));
        }
    }

    Ok(())
}

fn print_entries(ctx: &AppContext, entries: &[TimeEntry]) -> AppResult<()> {
    if entries.is_empty() {
        info("No time entries.");
        return Ok(());
    }

    let projects = ProjectLedger::new(&ctx.pool).all()?;
    let employees: Vec<Employee> = ctx.employees().all()?;

    let mut table = Table::new([
        "Id", "Date", "Employee", "Start", "End", "Break", "Hours", "Project",
    ]);
    let mut total = 0.0;
    for e in entries {
        total += e.total_hours;
        let name = employees
            .iter()
            .find(|emp| emp.id == e.employee_id)
            .map(|emp| emp.name.clone())
            .unwrap_or_else(|| "Unknown".to_string());
        table.add_row(vec![
            e.id.clone(),
            format_date_dmy(e.date),
            name,
            e.clock_in_str(),
            e.clock_out_str().unwrap_or_else(|| "active".to_string()),
            format!("{} min", e.break_minutes),
            fmt_hours(e.total_hours),
            project_label(&projects, e.project_id.as_deref()),
        ]);
    }

    header("Time entries");
    println!("{}", table.render());
    info(format!("Total: {} h", fmt_hours(total)));
    Ok(())
}
