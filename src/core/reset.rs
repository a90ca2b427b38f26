use crate::core::auth::AuthGate;
use crate::db::session::SessionSlot;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use tracing::warn;

pub struct ResetLogic;

impl ResetLogic {
    /// Wipe every collection and the session, guarded by the admin password.
    pub fn apply(
        gate: &AuthGate<'_>,
        store: &dyn Store,
        session: &dyn SessionSlot,
        admin_password: &str,
    ) -> AppResult<()> {
        if !gate.verify_admin_password(admin_password) {
            return Err(AppError::Forbidden("wrong administrator password".into()));
        }

        store.clear()?;
        session.clear()?;
        warn!("all stored data deleted");
        Ok(())
    }
}
