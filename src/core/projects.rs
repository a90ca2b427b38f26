//! Project ledger. Time entries reference projects weakly: deleting a
//! project leaves their `project_id` dangling.

use crate::db::store::{self, Collection, Store};
use crate::errors::{AppError, AppResult};
use crate::models::project::Project;
use crate::models::time_entry::TimeEntry;
use tracing::debug;
use uuid::Uuid;

pub struct ProjectLedger<'a> {
    store: &'a dyn Store,
}

impl<'a> ProjectLedger<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// All projects. Until the collection is first written the seed set
    /// stands in for it; reading never writes.
    pub fn all(&self) -> AppResult<Vec<Project>> {
        if self.store.get(Collection::Projects)?.is_none() {
            return Ok(Project::seed());
        }
        store::load(self.store, Collection::Projects)
    }

    /// Persist the seed set if the collection was never written.
    /// Returns whether anything was written.
    pub fn ensure_seed(&self) -> AppResult<bool> {
        if self.store.get(Collection::Projects)?.is_some() {
            return Ok(false);
        }
        let seed = Project::seed();
        store::save(self.store, Collection::Projects, &seed)?;
        debug!(count = seed.len(), "seed projects installed");
        Ok(true)
    }

    pub fn active(&self) -> AppResult<Vec<Project>> {
        Ok(self.all()?.into_iter().filter(|p| p.is_active).collect())
    }

    pub fn get(&self, id: &str) -> AppResult<Option<Project>> {
        Ok(self.all()?.into_iter().find(|p| p.id == id))
    }

    pub fn create(&self, name: &str, description: &str) -> AppResult<Project> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("project name is required".into()));
        }

        let project = Project {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.trim().to_string(),
            is_active: true,
        };

        let mut projects = self.all()?;
        projects.push(project.clone());
        store::save(self.store, Collection::Projects, &projects)?;

        debug!(id = %project.id, name = %project.name, "project created");
        Ok(project)
    }

    pub fn update(&self, project: &Project) -> AppResult<bool> {
        let mut projects = self.all()?;
        let Some(slot) = projects.iter_mut().find(|p| p.id == project.id) else {
            return Ok(false);
        };
        *slot = project.clone();
        store::save(self.store, Collection::Projects, &projects)?;
        Ok(true)
    }

    /// Flip the active flag. Returns the new state.
    pub fn toggle_active(&self, id: &str) -> AppResult<Option<bool>> {
        let Some(mut project) = self.get(id)? else {
            return Ok(None);
        };
        project.is_active = !project.is_active;
        self.update(&project)?;
        Ok(Some(project.is_active))
    }

    pub fn delete(&self, id: &str) -> AppResult<bool> {
        let mut projects = self.all()?;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Ok(false);
        }
        store::save(self.store, Collection::Projects, &projects)?;

        debug!(id, "project deleted");
        Ok(true)
    }

    /// Hours booked on a project across all employees.
    pub fn hours_for(&self, id: &str) -> AppResult<f64> {
        let entries: Vec<TimeEntry> = store::load(self.store, Collection::TimeEntries)?;
        Ok(entries
            .iter()
            .filter(|e| e.project_id.as_deref() == Some(id))
            .map(|e| e.total_hours)
            .sum())
    }
}

/// Display name for a weak project reference.
pub fn project_label(projects: &[Project], id: Option<&str>) -> String {
    match id {
        None => "No project".to_string(),
        Some(id) => projects
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
    }
}
