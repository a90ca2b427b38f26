use crate::cli::context::AppContext;
use crate::cli::parser::AbsenceAction;
use crate::config::Config;
use crate::core::AbsenceLedger;
use crate::errors::{AppError, AppResult};
use crate::models::absence::{Absence, AbsenceKind};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::date::{format_date_dmy, parse_date};
use crate::utils::formatting::{fmt_days, fmt_hours};
use crate::utils::table::Table;

pub fn handle(action: &AbsenceAction, cfg: &Config) -> AppResult<()> {
    let ctx = AppContext::open(cfg)?;
    let who = ctx.require_user()?;
    let ledger = AbsenceLedger::new(&ctx.pool);

    match action {
        AbsenceAction::Request {
            kind,
            start,
            end,
            days,
            hours,
            notes,
            employee,
        } => {
            let target = ctx.target_employee(&who, employee.as_deref())?;
            let kind = match AbsenceKind::from_code(kind, *hours) {
                Some(k) => k,
                None if hours.is_none() && AbsenceKind::from_code(kind, Some(1.0)).is_some() => {
                    return Err(AppError::Validation(
                        "time off in lieu needs --hours".into(),
                    ));
                }
                None => return Err(AppError::InvalidAbsenceType(kind.clone())),
            };
            let start = parse_date(start).ok_or_else(|| AppError::InvalidDate(start.clone()))?;
            let end = parse_date(end).ok_or_else(|| AppError::InvalidDate(end.clone()))?;

            let Some(absence) =
                ledger.create(&target.id, kind, start, end, *days, notes.clone())?
            else {
                return Err(AppError::InsufficientBalance(format!(
                    "{} has {} vacation days left, {} requested",
                    target.name,
                    fmt_days(target.remaining_vacation_days),
                    fmt_days(*days)
                )));
            };

            success(format!(
                "{} for {} from {} to {} recorded ({}).",
                absence.kind.label(),
                target.name,
                format_date_dmy(absence.start_date),
                format_date_dmy(absence.end_date),
                absence.status_label()
            ));
            info(format!("Id: {}", absence.id));
        }

        AbsenceAction::List { employee, pending } => {
            let mut absences = match (who.is_admin, employee) {
                (true, None) => {
                    let mut all = ledger.all()?;
                    all.sort_by(|a, b| b.start_date.cmp(&a.start_date));
                    all
                }
                _ => {
                    let target = ctx.target_employee(&who, employee.as_deref())?;
                    ledger.by_employee(&target.id)?
                }
            };
            if *pending {
                absences.retain(|a| !a.approved);
            }
            print_absences(&ctx, &absences)?;
        }

        AbsenceAction::Approve { id } => {
            if !who.is_admin {
                return Err(AppError::Forbidden(
                    "only the administrator can approve absences".into(),
                ));
            }
            let absence = ledger
                .get(id)?
                .ok_or_else(|| AppError::NotFound(format!("absence '{id}'")))?;
            if absence.approved {
                warning(format!("Absence {id} is already approved."));
                return Ok(());
            }
            if !ledger.approve(id)? {
                return Err(AppError::InsufficientBalance(format!(
                    "not enough vacation days left to approve {id}"
                )));
            }
            success(format!("{} approved.", absence.kind.label()));
        }

        AbsenceAction::Del { id } => {
            let absence = ledger
                .get(id)?
                .ok_or_else(|| AppError::NotFound(format!("absence '{id}'")))?;
            ctx.ensure_owner_or_admin(&who, &absence.employee_id)?;
            if absence.approved && !who.is_admin {
                return Err(AppError::Forbidden(
                    "approved absences can only be removed by the administrator".into(),
                ));
            }

            ledger.delete(id)?;
            warning(format!("{} deleted.", absence.kind.label()));
        }
    }

    Ok(())
}

fn print_absences(ctx: &AppContext, absences: &[Absence]) -> AppResult<()> {
    if absences.is_empty() {
        info("No absences.");
        return Ok(());
    }

    let employees = ctx.employees().all()?;
    let mut table = Table::new(["Id", "Employee", "Type", "From", "To", "Days", "Status", "Notes"]);
    for a in absences {
        let name = employees
            .iter()
            .find(|e| e.id == a.employee_id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| "Unknown".to_string());
        let kind = match a.kind {
            AbsenceKind::TimeOffInLieu { hours } => {
                format!("{} ({} h)", a.kind.label(), fmt_hours(hours))
            }
            _ => a.kind.label().to_string(),
        };
        table.add_row(vec![
            a.id.clone(),
            name,
            kind,
            format_date_dmy(a.start_date),
            format_date_dmy(a.end_date),
            fmt_days(a.days),
            a.status_label().to_string(),
            a.notes.clone().unwrap_or_default(),
        ]);
    }

    header("Absences");
    println!("{}", table.render());
    Ok(())
}
