//! Login gate. Credentials are plain text and compared case-insensitively,
//! after trimming, exactly like the stored records expect.

use crate::config::Config;
use crate::core::employees::EmployeeLedger;
use crate::db::session::SessionSlot;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use tracing::{debug, warn};

/// The single administrator credential pair, kept outside the employee records.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            username: cfg.admin_username.clone(),
            password: cfg.admin_password.clone(),
        }
    }
}

pub struct AuthGate<'a> {
    store: &'a dyn Store,
    session: &'a dyn SessionSlot,
    admin: AdminCredentials,
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

impl<'a> AuthGate<'a> {
    pub fn new(store: &'a dyn Store, session: &'a dyn SessionSlot, admin: AdminCredentials) -> Self {
        Self {
            store,
            session,
            admin,
        }
    }

    /// Resolve a username/password pair and remember it in the session.
    /// The administrator pair is checked before any employee record.
    pub fn login(&self, username: &str, password: &str) -> AppResult<Option<Employee>> {
        let user = normalize(username);
        let pass = normalize(password);

        let identity = if user == normalize(&self.admin.username)
            && pass == normalize(&self.admin.password)
        {
            Some(Employee::administrator(&self.admin.password))
        } else {
            EmployeeLedger::new(self.store)
                .all()?
                .into_iter()
                .find(|e| e.name.to_lowercase() == user && e.password.to_lowercase() == pass)
        };

        match &identity {
            Some(who) => {
                self.session.save(&serde_json::to_string(who)?)?;
                debug!(id = %who.id, admin = who.is_admin, "login succeeded");
            }
            None => warn!(username = %user, "login failed"),
        }

        Ok(identity)
    }

    /// Forget the session identity. Stored records are untouched.
    pub fn logout(&self) -> AppResult<()> {
        self.session.clear()
    }

    /// The logged-in identity. An unreadable session counts as logged out.
    ///
    /// Employees are re-read from the store, so balances and renames show up
    /// immediately; an employee deleted since login is logged out.
    pub fn current_user(&self) -> AppResult<Option<Employee>> {
        let Some(raw) = self.session.load()? else {
            return Ok(None);
        };
        let who: Employee = match serde_json::from_str(&raw) {
            Ok(who) => who,
            Err(e) => {
                warn!("discarding unreadable session: {e}");
                return Ok(None);
            }
        };
        if who.is_admin {
            return Ok(Some(who));
        }

        let current = EmployeeLedger::new(self.store).get(&who.id)?;
        if current.is_none() {
            warn!(id = %who.id, "session refers to a deleted employee");
            self.session.clear()?;
        }
        Ok(current)
    }

    pub fn verify_admin_password(&self, password: &str) -> bool {
        normalize(password) == normalize(&self.admin.password)
    }
}
