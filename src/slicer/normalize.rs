//! Normalization of externally authored slices.

use crate::model::{AuthoredSlice, ProjectSlice};

/// Fill every missing field of authored slices with its default.
///
/// `order` always follows array position. Missing ids become
/// `{project_id}-slice-{n}` with `n` counted from 1.
pub fn normalize_slices(project_id: &str, authored: &[AuthoredSlice]) -> Vec<ProjectSlice> {
    authored
        .iter()
        .enumerate()
        .map(|(idx, slice)| ProjectSlice {
            id: slice
                .id
                .clone()
                .unwrap_or_else(|| format!("{}-slice-{}", project_id, idx + 1)),
            title: slice.title.clone(),
            description: slice.description.clone().unwrap_or_default(),
            category: slice.category.unwrap_or_default(),
            duration: slice.duration.unwrap_or(0),
            steps: slice.steps.clone().unwrap_or_default(),
            success_criteria: slice.success_criteria.clone().unwrap_or_default(),
            photo_check_required: slice.photo_check_required.unwrap_or(false),
            materials: slice.materials.clone().unwrap_or_default(),
            tools: slice.tools.clone().unwrap_or_default(),
            order: idx as u32,
            state: slice.state.unwrap_or_default(),
        })
        .collect()
}
