//! Project storage seam.

use std::collections::HashMap;

use tracing::debug;

use super::{create_project_plan, slice_project_into_lessons, LessonProgress};
use crate::error::{PlanError, Result};
use crate::model::{ProjectDescription, ProjectSlice};

/// Where projects and their lesson progress live.
pub trait ProjectRepository {
    /// Look up a project.
    fn get_project_by_id(&self, id: &str) -> Option<ProjectDescription>;

    /// Store the current slices of a project.
    fn update_project_progress(&mut self, id: &str, slices: &[ProjectSlice]) -> Result<()>;
}

/// Repository backed by in-process maps.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    projects: HashMap<String, ProjectDescription>,
    progress: HashMap<String, Vec<ProjectSlice>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a project.
    pub fn insert(&mut self, project: ProjectDescription) {
        self.projects.insert(project.id.clone(), project);
    }

    /// Last stored slices for a project.
    pub fn progress(&self, id: &str) -> Option<&[ProjectSlice]> {
        self.progress.get(id).map(Vec::as_slice)
    }
}

impl ProjectRepository for InMemoryRepository {
    fn get_project_by_id(&self, id: &str) -> Option<ProjectDescription> {
        self.projects.get(id).cloned()
    }

    fn update_project_progress(&mut self, id: &str, slices: &[ProjectSlice]) -> Result<()> {
        if !self.projects.contains_key(id) {
            return Err(PlanError::ProjectNotFound { id: id.to_string() });
        }
        debug!("Storing {} slice(s) for project {}", slices.len(), id);
        self.progress.insert(id.to_string(), slices.to_vec());
        Ok(())
    }
}

/// Load a project, slice it into lessons and store the initial progress.
pub fn start_project<R: ProjectRepository>(repo: &mut R, id: &str) -> Result<LessonProgress> {
    let project = repo
        .get_project_by_id(id)
        .ok_or_else(|| PlanError::ProjectNotFound { id: id.to_string() })?;

    let plan = create_project_plan(&project);
    let slices = slice_project_into_lessons(&plan);
    repo.update_project_progress(id, &slices)?;

    Ok(LessonProgress::new(id, slices))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_project_stores_slices() {
        let mut repo = InMemoryRepository::new();
        repo.insert(ProjectDescription::new("p1", "Crate").with_tools(["Hand Saw"]));

        let progress = start_project(&mut repo, "p1").unwrap();
        assert_eq!(progress.slices().len(), 4);
        assert_eq!(repo.progress("p1").unwrap(), progress.slices());
    }

    #[test]
    fn test_start_unknown_project() {
        let mut repo = InMemoryRepository::new();
        let err = start_project(&mut repo, "missing").unwrap_err();
        assert!(matches!(err, PlanError::ProjectNotFound { ref id } if id == "missing"));
        assert!(repo.progress("missing").is_none());
    }

    #[test]
    fn test_update_unknown_project_fails() {
        let mut repo = InMemoryRepository::new();
        assert!(repo.update_project_progress("x", &[]).is_err());
    }

    #[test]
    fn test_completion_round_trip_through_repository() {
        let mut repo = InMemoryRepository::new();
        repo.insert(ProjectDescription::new("p1", "Crate"));

        let mut progress = start_project(&mut repo, "p1").unwrap();
        progress.complete_slice("p1-planning").unwrap();
        repo.update_project_progress("p1", progress.slices()).unwrap();

        let stored = repo.progress("p1").unwrap();
        assert!(stored[0].is_completed());
        assert!(!stored[1].is_completed());
    }
}
