//! Lesson slices: orderable units of project instruction.

use serde::{Deserialize, Serialize};

use super::{Material, Tool};
use crate::error::{PlanError, Result};

/// Stage a slice teaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliceCategory {
    #[default]
    Planning,
    Cutting,
    Assembly,
    Finishing,
    Safety,
}

impl std::fmt::Display for SliceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SliceCategory::Planning => write!(f, "planning"),
            SliceCategory::Cutting => write!(f, "cutting"),
            SliceCategory::Assembly => write!(f, "assembly"),
            SliceCategory::Finishing => write!(f, "finishing"),
            SliceCategory::Safety => write!(f, "safety"),
        }
    }
}

/// Lifecycle of a slice. `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliceState {
    #[default]
    Generated,
    Edited,
    Completed,
}

/// A lesson slice ready for the learner.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectSlice {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: SliceCategory,
    /// Estimated duration in minutes.
    pub duration: u32,
    pub steps: Vec<String>,
    pub success_criteria: Vec<String>,
    pub photo_check_required: bool,
    pub materials: Vec<Material>,
    pub tools: Vec<Tool>,
    pub order: u32,
    #[serde(default)]
    pub state: SliceState,
}

impl ProjectSlice {
    /// Whether the slice has been completed.
    pub fn is_completed(&self) -> bool {
        self.state == SliceState::Completed
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_completed() {
            return Err(PlanError::SliceCompleted {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    fn begin_edit(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.state = SliceState::Edited;
        Ok(())
    }

    /// Append an instructional step.
    pub fn add_step(&mut self, step: impl Into<String>) -> Result<()> {
        self.begin_edit()?;
        self.steps.push(step.into());
        Ok(())
    }

    /// Remove the step at `index`, returning it.
    pub fn remove_step(&mut self, index: usize) -> Result<String> {
        self.ensure_open()?;
        check_index(index, self.steps.len())?;
        self.begin_edit()?;
        Ok(self.steps.remove(index))
    }

    /// Append a success criterion.
    pub fn add_criterion(&mut self, criterion: impl Into<String>) -> Result<()> {
        self.begin_edit()?;
        self.success_criteria.push(criterion.into());
        Ok(())
    }

    /// Remove the criterion at `index`, returning it.
    pub fn remove_criterion(&mut self, index: usize) -> Result<String> {
        self.ensure_open()?;
        check_index(index, self.success_criteria.len())?;
        self.begin_edit()?;
        Ok(self.success_criteria.remove(index))
    }

    /// Flip whether a photo checkpoint is required. Returns the new value.
    pub fn toggle_photo_check(&mut self) -> Result<bool> {
        self.begin_edit()?;
        self.photo_check_required = !self.photo_check_required;
        Ok(self.photo_check_required)
    }

    /// Mark the slice as completed.
    pub fn complete(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.state = SliceState::Completed;
        Ok(())
    }
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(PlanError::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// A slice as authored outside the generator, with optional fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthoredSlice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SliceCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_criteria: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_check_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<Vec<Material>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<SliceState>,
}

impl AuthoredSlice {
    /// Create an authored slice with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

impl From<ProjectSlice> for AuthoredSlice {
    fn from(slice: ProjectSlice) -> Self {
        Self {
            id: Some(slice.id),
            title: slice.title,
            description: Some(slice.description),
            category: Some(slice.category),
            duration: Some(slice.duration),
            steps: Some(slice.steps),
            success_criteria: Some(slice.success_criteria),
            photo_check_required: Some(slice.photo_check_required),
            materials: Some(slice.materials),
            tools: Some(slice.tools),
            order: Some(slice.order),
            state: Some(slice.state),
        }
    }
}
