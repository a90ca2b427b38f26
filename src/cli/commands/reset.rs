use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reset::ResetLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { password, yes } = cmd {
        let ctx = AppContext::open(cfg)?;
        ctx.require_admin()?;

        if !*yes && !confirm("This deletes ALL employees, entries, projects and absences.")? {
            info("Reset cancelled.");
            return Ok(());
        }

        ResetLogic::apply(&ctx.gate(), &ctx.pool, &ctx.session, password)?;
        success("All data deleted. You have been logged out.");
    }
    Ok(())
}
