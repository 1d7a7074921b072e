//! Per-project lesson progress.

use tracing::info;

use crate::error::{PlanError, Result};
use crate::model::ProjectSlice;

/// Outcome of completing a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    /// The slice closed and others remain open.
    SliceCompleted,
    /// The last open slice closed.
    ProjectCompleted,
}

/// The lessons of one project and how far the learner has got.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonProgress {
    project_id: String,
    slices: Vec<ProjectSlice>,
}

impl LessonProgress {
    /// Track progress over `slices`, kept in their `order`.
    pub fn new(project_id: impl Into<String>, mut slices: Vec<ProjectSlice>) -> Self {
        slices.sort_by_key(|s| s.order);
        Self {
            project_id: project_id.into(),
            slices,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn slices(&self) -> &[ProjectSlice] {
        &self.slices
    }

    /// Mutable access to a slice for editing.
    pub fn slice_mut(&mut self, id: &str) -> Result<&mut ProjectSlice> {
        self.slices
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| PlanError::SliceNotFound { id: id.to_string() })
    }

    /// Complete a slice.
    pub fn complete_slice(&mut self, id: &str) -> Result<CompletionStatus> {
        self.slice_mut(id)?.complete()?;

        if self.is_complete() {
            info!("Project {} completed", self.project_id);
            Ok(CompletionStatus::ProjectCompleted)
        } else {
            Ok(CompletionStatus::SliceCompleted)
        }
    }

    pub fn completed_count(&self) -> usize {
        self.slices.iter().filter(|s| s.is_completed()).count()
    }

    /// Whether every slice is completed. An empty plan is never complete.
    pub fn is_complete(&self) -> bool {
        !self.slices.is_empty() && self.slices.iter().all(|s| s.is_completed())
    }

    /// Completed share of slices as a percentage.
    pub fn percent_complete(&self) -> f64 {
        if self.slices.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.slices.len() as f64 * 100.0
    }

    /// First slice in order that is not completed yet.
    pub fn next_slice(&self) -> Option<&ProjectSlice> {
        self.slices.iter().find(|s| !s.is_completed())
    }
}
