use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TimeEntryLedger;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success};
use crate::utils::date::today;
use crate::utils::formatting::{colorize_balance, fmt_days, fmt_hours};
use chrono::Datelike;

/// Handle `login`, `logout` and `whoami`
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let ctx = AppContext::open(cfg)?;

    match cmd {
        Commands::Login { username, password } => {
            let Some(who) = ctx.gate().login(username, password)? else {
                return Err(AppError::Forbidden("invalid username or password".into()));
            };
            let role = if who.is_admin { "administrator" } else { "employee" };
            success(format!("Logged in as {} ({role})", who.name));
        }
        Commands::Logout => {
            ctx.gate().logout()?;
            success("Logged out.");
        }
        Commands::Whoami => {
            let who = ctx.require_user()?;
            if who.is_admin {
                info(format!("{} (administrator)", who.name));
                return Ok(());
            }

            let me = ctx.find_employee(&who.id)?;
            header(&me.name);
            println!("Employment      : {}", me.employment_type.label());
            println!(
                "Target hours    : {} / week, {} / day",
                fmt_hours(me.weekly_hours),
                fmt_hours(me.daily_hours)
            );
            println!(
                "Vacation        : {} of {} days left",
                fmt_days(me.remaining_vacation_days),
                fmt_days(me.vacation_days)
            );
            println!("Overtime        : {}", colorize_balance(me.overtime_hours()));

            let now = today();
            let month_hours = TimeEntryLedger::new(&ctx.pool).total_hours_for_month(
                &me.id,
                now.year(),
                now.month(),
            )?;
            println!("This month      : {} h", fmt_hours(month_hours));
        }
        _ => {}
    }

    Ok(())
}
