use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::ProjectLedger;
use crate::db::{DbPool, FileSession, SessionSlot};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use tracing::info as log_info;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with all pending migrations
///  - the default project set
///
/// Any login left over from a previous run is cleared.
pub fn handle(cli: &Cli, current: &Config) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    info("Initializing hrtime…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", cfg.database));

    let pool = DbPool::new(&cfg.database)?;
    let ledger = ProjectLedger::new(&pool);
    ledger.ensure_seed()?;
    let projects = ledger.all()?;
    FileSession::new(&current.session_file).clear()?;

    log_info!(database = %cfg.database, projects = projects.len(), "initialized");
    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
