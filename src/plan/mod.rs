//! Project plans and lesson progress.

mod progress;
mod repository;

pub use progress::{CompletionStatus, LessonProgress};
pub use repository::{start_project, InMemoryRepository, ProjectRepository};

use serde::{Deserialize, Serialize};

use crate::model::{
    AuthoredSlice, Difficulty, Material, ProjectDescription, ProjectSlice, Tool,
};
use crate::slicer::slice_project;

/// Everything needed to turn a project into lessons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPlan {
    pub project_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub difficulty: Difficulty,
    pub materials: Vec<Material>,
    pub tools: Vec<Tool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authored_slices: Option<Vec<AuthoredSlice>>,
    /// Total of the lesson durations in minutes.
    pub estimated_minutes: u32,
}

impl ProjectPlan {
    fn as_project(&self) -> ProjectDescription {
        ProjectDescription {
            id: self.project_id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            difficulty: self.difficulty,
            materials: self.materials.clone(),
            tools: self.tools.clone(),
            slices: self.authored_slices.clone(),
        }
    }
}

/// Build a plan for a project.
pub fn create_project_plan(project: &ProjectDescription) -> ProjectPlan {
    let estimated_minutes = slice_project(project).iter().map(|s| s.duration).sum();
    ProjectPlan {
        project_id: project.id.clone(),
        title: project.title.clone(),
        description: project.description.clone(),
        category: project.category.clone(),
        difficulty: project.difficulty,
        materials: project.materials.clone(),
        tools: project.tools.clone(),
        authored_slices: project.slices.clone(),
        estimated_minutes,
    }
}

/// Turn a plan into its ordered lessons.
pub fn slice_project_into_lessons(plan: &ProjectPlan) -> Vec<ProjectSlice> {
    slice_project(&plan.as_project())
}
