//! Everything a command needs: configuration, open store, session and the
//! access checks built on top of the auth gate.

use crate::config::Config;
use crate::core::{AdminCredentials, AuthGate, EmployeeLedger, ProjectLedger};
use crate::db::{DbPool, FileSession};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::project::Project;

pub struct AppContext {
    pub cfg: Config,
    pub pool: DbPool,
    pub session: FileSession,
}

impl AppContext {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            cfg: cfg.clone(),
            pool: DbPool::new(&cfg.database)?,
            session: FileSession::new(&cfg.session_file),
        })
    }

    pub fn gate(&self) -> AuthGate<'_> {
        AuthGate::new(
            &self.pool,
            &self.session,
            AdminCredentials::from_config(&self.cfg),
        )
    }

    pub fn employees(&self) -> EmployeeLedger<'_> {
        EmployeeLedger::new(&self.pool)
    }

    pub fn require_user(&self) -> AppResult<Employee> {
        self.gate().current_user()?.ok_or(AppError::NotLoggedIn)
    }

    pub fn require_admin(&self) -> AppResult<Employee> {
        let who = self.require_user()?;
        if !who.is_admin {
            return Err(AppError::Forbidden(
                "this command is reserved to the administrator".into(),
            ));
        }
        Ok(who)
    }

    /// Find an employee by id, falling back to a case-insensitive name match.
    pub fn find_employee(&self, key: &str) -> AppResult<Employee> {
        let employees = self.employees().all()?;
        let wanted = key.trim().to_lowercase();
        employees
            .iter()
            .find(|e| e.id == key)
            .or_else(|| employees.iter().find(|e| e.name.to_lowercase() == wanted))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("employee '{key}'")))
    }

    /// The employee a command acts on. Employees always act on themselves;
    /// the administrator has no time account and must name one.
    pub fn target_employee(&self, who: &Employee, requested: Option<&str>) -> AppResult<Employee> {
        match (who.is_admin, requested) {
            (true, Some(key)) => self.find_employee(key),
            (true, None) => Err(AppError::Validation(
                "the administrator must pass --employee".into(),
            )),
            (false, Some(key)) if key != who.id && !key.eq_ignore_ascii_case(&who.name) => Err(
                AppError::Forbidden("employees can only act on their own records".into()),
            ),
            (false, _) => self.find_employee(&who.id),
        }
    }

    /// Guard for records owned by `owner_id`.
    pub fn ensure_owner_or_admin(&self, who: &Employee, owner_id: &str) -> AppResult<()> {
        if who.is_admin || who.id == owner_id {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "employees can only act on their own records".into(),
            ))
        }
    }

    /// Resolve an active project by id or case-insensitive name, for new bookings.
    pub fn find_active_project(&self, key: &str) -> AppResult<Project> {
        let projects = ProjectLedger::new(&self.pool).active()?;
        let wanted = key.trim().to_lowercase();
        projects
            .iter()
            .find(|p| p.id == key)
            .or_else(|| projects.iter().find(|p| p.name.to_lowercase() == wanted))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("active project '{key}'")))
    }
}
