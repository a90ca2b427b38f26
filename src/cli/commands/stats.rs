use crate::cli::context::AppContext;
use crate::config::Config;
use crate::core::stats::DashboardStats;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date::today;
use crate::utils::formatting::{colorize_balance, fmt_hours};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let ctx = AppContext::open(cfg)?;
    ctx.require_admin()?;

    let s = DashboardStats::collect(&ctx.pool, today())?;

    header("Dashboard");
    println!("Employees          : {}", s.employees);
    println!("Total overtime     : {}", colorize_balance(s.total_overtime_hours));
    println!("Clocked in now     : {}", s.active_entries);
    println!("Hours this month   : {}", fmt_hours(s.hours_this_month));
    println!("Pending absences   : {}", s.pending_absences);
    println!("Active projects    : {}", s.active_projects);
    println!("Storage used       : {:.1} KB", s.storage_bytes as f64 / 1024.0);
    Ok(())
}
