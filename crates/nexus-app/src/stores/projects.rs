//! Cached project list.

use nexus_core::entities::Project;

use crate::api::NexusApi;

#[derive(Debug, Default)]
pub struct ProjectsStore {
    projects: Vec<Project>,
    loading: bool,
}

impl ProjectsStore {
    /// Load the full list. On failure the error is logged and the previous
    /// list (empty on first load) stays.
    pub async fn fetch_projects<A: NexusApi>(&mut self, api: &A) -> &[Project] {
        self.loading = true;
        match api.list_projects().await {
            Ok(projects) => self.projects = projects,
            Err(error) => tracing::error!(%error, "Failed to fetch projects"),
        }
        self.loading = false;
        &self.projects
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Look a project up by id, slug or case-insensitive name.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Project> {
        let key = key.trim();
        if let Ok(id) = key.parse::<i64>() {
            return self.projects.iter().find(|p| p.id == id);
        }
        self.projects
            .iter()
            .find(|p| p.slug == key || p.name.eq_ignore_ascii_case(key))
    }
}
