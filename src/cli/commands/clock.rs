use crate::cli::context::AppContext;
use crate::cli::parser::ClockAction;
use crate::config::Config;
use crate::core::TimeEntryLedger;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date::format_date_dmy;
use crate::utils::formatting::fmt_hours;

pub fn handle(action: &ClockAction, cfg: &Config) -> AppResult<()> {
    let ctx = AppContext::open(cfg)?;
    let who = ctx.require_user()?;
    let ledger = TimeEntryLedger::new(&ctx.pool);

    match action {
        ClockAction::In { project, employee } => {
            let target = ctx.target_employee(&who, employee.as_deref())?;

            if let Some(open) = ledger.active_entry(&target.id)? {
                return Err(AppError::Validation(format!(
                    "{} is already clocked in since {} {}",
                    target.name,
                    format_date_dmy(open.date),
                    open.clock_in_str()
                )));
            }

            let project_id = project
                .as_deref()
                .map(|key| ctx.find_active_project(key).map(|p| p.id))
                .transpose()?;

            let entry = ledger.clock_in(&target.id, project_id)?;
            success(format!(
                "{} clocked in at {}.",
                target.name,
                entry.clock_in_str()
            ));
        }

        ClockAction::Out {
            break_minutes,
            employee,
        } => {
            let target = ctx.target_employee(&who, employee.as_deref())?;
            let open = ledger
                .active_entry(&target.id)?
                .ok_or_else(|| AppError::NotFound(format!("active entry for {}", target.name)))?;

            let closed = ledger
                .clock_out(&open.id, *break_minutes)?
                .ok_or_else(|| AppError::NotFound(format!("active entry {}", open.id)))?;
            success(format!(
                "{} clocked out at {}: {} h worked.",
                target.name,
                closed.clock_out_str().unwrap_or_default(),
                fmt_hours(closed.total_hours)
            ));
        }

        ClockAction::Status { employee } => {
            let target = ctx.target_employee(&who, employee.as_deref())?;
            match ledger.active_entry(&target.id)? {
                Some(open) => info(format!(
                    "{} is clocked in since {} {}.",
                    target.name,
                    format_date_dmy(open.date),
                    open.clock_in_str()
                )),
                None => info(format!("{} is not clocked in.", target.name)),
            }
        }
    }

    Ok(())
}
