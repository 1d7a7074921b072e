//! Decomposition of a project into ordered lesson slices.

mod normalize;
mod stages;

pub use normalize::normalize_slices;

use tracing::debug;

use crate::model::{ProjectDescription, ProjectSlice};

/// Slice a project into lessons.
///
/// Authored slices on the project are normalized and used as-is. Otherwise
/// stages are generated from the template for the project category, or the
/// four standard stages when no template matches. Each stage gets the
/// project's tools and materials filtered by category.
pub fn slice_project(project: &ProjectDescription) -> Vec<ProjectSlice> {
    if project.has_authored_slices() {
        let authored = project.slices.as_deref().unwrap_or_default();
        debug!(
            "Using {} authored slice(s) for project {}",
            authored.len(),
            project.id
        );
        return normalize_slices(&project.id, authored);
    }

    let stages = stages::stages_for(project.category.as_deref());
    debug!(
        "Generating {} stage(s) for project {}",
        stages.len(),
        project.id
    );
    stages
        .iter()
        .enumerate()
        .map(|(order, stage)| stage.build(project, order as u32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AuthoredSlice, Difficulty, Material, SliceCategory, Tool};

    fn tool_names(tools: &[Tool]) -> Vec<&str> {
        tools.iter().map(|t| t.name.as_str()).collect()
    }

    fn material_names(materials: &[Material]) -> Vec<&str> {
        materials.iter().map(|m| m.name.as_str()).collect()
    }

    fn sample_project() -> ProjectDescription {
        ProjectDescription::new("p1", "Step Stool")
            .with_difficulty(Difficulty::Beginner)
            .with_tools(["Circular Saw", "Clamp", "Sandpaper"])
            .with_materials(["Pine", "Wood Glue", "Stain"])
    }

    #[test]
    fn test_generates_four_ordered_stages() {
        let slices = slice_project(&sample_project());
        assert_eq!(slices.len(), 4);

        let categories: Vec<SliceCategory> = slices.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![
                SliceCategory::Planning,
                SliceCategory::Cutting,
                SliceCategory::Assembly,
                SliceCategory::Finishing,
            ]
        );

        let durations: Vec<u32> = slices.iter().map(|s| s.duration).collect();
        assert_eq!(durations, vec![30, 60, 90, 60]);

        for (idx, slice) in slices.iter().enumerate() {
            assert_eq!(slice.order, idx as u32);
            assert!(!slice.steps.is_empty());
            assert!(!slice.success_criteria.is_empty());
            assert!(slice.photo_check_required);
        }
    }

    #[test]
    fn test_resources_routed_by_category() {
        let slices = slice_project(&sample_project());

        assert_eq!(tool_names(&slices[1].tools), vec!["Circular Saw", "Sandpaper"]);
        assert_eq!(tool_names(&slices[2].tools), vec!["Clamp"]);
        assert_eq!(material_names(&slices[2].materials), vec!["Wood Glue"]);
        assert_eq!(material_names(&slices[3].materials), vec!["Stain"]);
        assert_eq!(material_names(&slices[1].materials), vec!["Pine"]);
        assert_eq!(slices[0].tools.len(), 3);
        assert_eq!(slices[0].materials.len(), 3);
    }

    #[test]
    fn test_ids_and_description() {
        let slices = slice_project(&sample_project());
        assert_eq!(slices[0].id, "p1-planning");
        assert_eq!(slices[3].id, "p1-finishing");
        assert!(slices[2].description.contains("Step Stool"));
        assert!(slices[2].description.contains("beginner"));
    }

    #[test]
    fn test_empty_project_still_gets_four_stages() {
        let slices = slice_project(&ProjectDescription::new("p2", "Empty"));
        assert_eq!(slices.len(), 4);
        assert!(slices.iter().all(|s| s.tools.is_empty() && s.materials.is_empty()));
    }

    #[test]
    fn test_carving_category_uses_safety_template() {
        let mut project = ProjectDescription::new("spoon", "Spoon")
            .with_tools(["Carving Knife", "Clamp"])
            .with_materials(["Birch", "Walnut Oil"]);
        project.category = Some(" Carving ".to_string());
        let slices = slice_project(&project);

        let ids: Vec<&str> = slices.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["spoon-planning", "spoon-safety", "spoon-cutting", "spoon-finishing"]
        );
        assert_eq!(slices[1].category, SliceCategory::Safety);
        assert_eq!(slices[1].duration, 15);
        assert_eq!(tool_names(&slices[1].tools), vec!["Carving Knife"]);
        assert!(slices[1].materials.is_empty());
        assert_eq!(slices[3].order, 3);
    }

    #[test]
    fn test_refinishing_category_skips_cutting_and_assembly() {
        let mut project = sample_project();
        project.category = Some("refinishing".to_string());
        let categories: Vec<SliceCategory> =
            slice_project(&project).iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![SliceCategory::Planning, SliceCategory::Finishing]
        );
    }

    #[test]
    fn test_unknown_category_falls_back_to_four_stages() {
        let mut project = sample_project();
        project.category = Some("furniture".to_string());
        assert_eq!(slice_project(&project), slice_project(&sample_project()));
    }

    #[test]
    fn test_authored_slices_bypass_generation() {
        let mut project = sample_project();
        project.slices = Some(vec![
            AuthoredSlice::titled("Watch the video"),
            AuthoredSlice::titled("Build it"),
        ]);
        let slices = slice_project(&project);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].title, "Watch the video");
        assert_eq!(slices[1].order, 1);
        assert!(!slices[1].photo_check_required);
    }

    #[test]
    fn test_empty_authored_list_falls_back() {
        let mut project = sample_project();
        project.slices = Some(Vec::new());
        assert_eq!(slice_project(&project).len(), 4);
    }
}
