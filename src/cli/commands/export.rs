use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;
use tracing::debug;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let ctx = AppContext::open(cfg)?;
        ctx.require_admin()?;

        debug!(format = format.as_str(), file = %file, "export requested");
        let written = ExportLogic::export(&ctx.pool, format, file, *force)?;
        if written.len() > 1 {
            info(format!("{} files written.", written.len()));
        }
    }
    Ok(())
}
