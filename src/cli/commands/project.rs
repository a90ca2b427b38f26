use crate::cli::context::AppContext;
use crate::cli::parser::ProjectAction;
use crate::config::Config;
use crate::core::ProjectLedger;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success, warning};
use crate::ui::prompt::confirm;
use crate::utils::formatting::fmt_hours;
use crate::utils::table::Table;

pub fn handle(action: &ProjectAction, cfg: &Config) -> AppResult<()> {
    let ctx = AppContext::open(cfg)?;
    let who = ctx.require_user()?;
    let ledger = ProjectLedger::new(&ctx.pool);

    if !matches!(action, ProjectAction::List { .. }) && !who.is_admin {
        return Err(AppError::Forbidden(
            "only the administrator can change projects".into(),
        ));
    }

    let not_found = |id: &str| AppError::NotFound(format!("project '{id}'"));

    match action {
        ProjectAction::Add { name, description } => {
            let p = ledger.create(name, description)?;
            success(format!("Project '{}' created (id {}).", p.name, p.id));
        }

        ProjectAction::List { all } => {
            let projects = if *all { ledger.all()? } else { ledger.active()? };
            if projects.is_empty() {
                info("No projects.");
                return Ok(());
            }

            let mut table = Table::new(["Id", "Name", "Description", "Status", "Hours"]);
            for p in &projects {
                table.add_row(vec![
                    p.id.clone(),
                    p.name.clone(),
                    p.description.clone(),
                    p.status_label().to_string(),
                    fmt_hours(ledger.hours_for(&p.id)?),
                ]);
            }
            header("Projects");
            println!("{}", table.render());
        }

        ProjectAction::Update {
            id,
            name,
            description,
        } => {
            let mut p = ledger.get(id)?.ok_or_else(|| not_found(id))?;
            if let Some(n) = name {
                let n = n.trim();
                if n.is_empty() {
                    return Err(AppError::Validation("project name is required".into()));
                }
                p.name = n.to_string();
            }
            if let Some(d) = description {
                p.description = d.trim().to_string();
            }
            if !ledger.update(&p)? {
                return Err(not_found(id));
            }
            success(format!("Project '{}' updated.", p.name));
        }

        ProjectAction::Toggle { id } => {
            let active = ledger.toggle_active(id)?.ok_or_else(|| not_found(id))?;
            let state = if active { "active" } else { "inactive" };
            success(format!("Project {id} is now {state}."));
        }

        ProjectAction::Del { id, force } => {
            let p = ledger.get(id)?.ok_or_else(|| not_found(id))?;
            if !*force && !confirm(&format!("Delete project '{}'?", p.name))? {
                info("Deletion cancelled.");
                return Ok(());
            }
            ledger.delete(id)?;
            warning(format!("Project '{}' deleted.", p.name));
        }
    }

    Ok(())
}
