//! Generated lesson stages and the category templates that order them.

use crate::config::{
    ASSEMBLY_MINUTES, CUTTING_MINUTES, FINISHING_MINUTES, PLANNING_MINUTES, SAFETY_MINUTES,
};
use crate::model::{
    MaterialCategory, ProjectDescription, ProjectSlice, SliceCategory, ToolCategory,
};

/// Fixed content of a generated stage.
pub(crate) struct Stage {
    pub key: &'static str,
    pub title: &'static str,
    pub category: SliceCategory,
    pub duration: u32,
    pub summary: &'static str,
    pub steps: [&'static str; 4],
    pub criteria: [&'static str; 4],
}

static PLANNING: Stage = Stage {
    key: "planning",
    title: "Planning & Setup",
    category: SliceCategory::Planning,
    duration: PLANNING_MINUTES,
    summary: "Review the plans, gather everything you need and set up a safe workspace",
    steps: [
        "Read through the full project plan and cut list",
        "Gather all materials and check them for defects",
        "Lay out and inspect every tool you will need",
        "Clear and set up a safe, well-lit workspace",
    ],
    criteria: [
        "All materials are on hand",
        "All tools are inspected and ready",
        "Workspace is clean and safe",
        "You can explain each step of the plan",
    ],
};

static CUTTING: Stage = Stage {
    key: "cutting",
    title: "Material Preparation",
    category: SliceCategory::Cutting,
    duration: CUTTING_MINUTES,
    summary: "Measure, mark and cut every piece to its final dimensions",
    steps: [
        "Measure and mark each piece from the cut list",
        "Double-check every measurement before cutting",
        "Make each cut with the correct saw and a steady feed",
        "Sand cut edges smooth and label each piece",
    ],
    criteria: [
        "Every piece matches the cut list within 1/16 inch",
        "Cuts are square and clean",
        "Edges are free of splinters",
        "Pieces are labeled for assembly",
    ],
};

static ASSEMBLY: Stage = Stage {
    key: "assembly",
    title: "Assembly & Joinery",
    category: SliceCategory::Assembly,
    duration: ASSEMBLY_MINUTES,
    summary: "Join the prepared pieces into the finished structure",
    steps: [
        "Dry-fit all pieces before applying glue",
        "Apply glue and fasteners in the planned order",
        "Clamp the assembly and check it for square",
        "Wipe away glue squeeze-out and let it cure",
    ],
    criteria: [
        "Joints are tight with no visible gaps",
        "Assembly is square",
        "Structure is stable with no wobble",
        "No dried glue remains on visible surfaces",
    ],
};

static FINISHING: Stage = Stage {
    key: "finishing",
    title: "Finishing & Details",
    category: SliceCategory::Finishing,
    duration: FINISHING_MINUTES,
    summary: "Sand, finish and inspect the project",
    steps: [
        "Sand all surfaces through progressively finer grits",
        "Remove all dust before finishing",
        "Apply stain or finish in thin, even coats",
        "Let the finish dry and inspect the final piece",
    ],
    criteria: [
        "Surfaces are smooth to the touch",
        "Finish is even with no drips or blotches",
        "Hardware and details are installed",
        "Project is ready to use",
    ],
};

static SAFETY: Stage = Stage {
    key: "safety",
    title: "Tool Safety",
    category: SliceCategory::Safety,
    duration: SAFETY_MINUTES,
    summary: "Practice safe handling of every edge tool",
    steps: [
        "Put on eye protection and tie back loose clothing",
        "Check that every blade is sharp and firmly seated",
        "Practice a safe grip and stance on scrap wood",
        "Set up a secure way to hold the workpiece",
    ],
    criteria: [
        "Protective gear is worn",
        "Blades are sharp and secure",
        "Cuts move away from your body",
        "Workpiece is held without your hands in the path",
    ],
};

/// Stages used when no template matches the project category.
static DEFAULT_STAGES: [&Stage; 4] = [&PLANNING, &CUTTING, &ASSEMBLY, &FINISHING];

/// Stage sequence for a set of project categories.
struct Template {
    categories: &'static [&'static str],
    stages: &'static [&'static Stage],
}

static TEMPLATES: [Template; 2] = [
    Template {
        categories: &["carving", "whittling", "woodturning"],
        stages: &[&PLANNING, &SAFETY, &CUTTING, &FINISHING],
    },
    Template {
        categories: &["refinishing", "restoration"],
        stages: &[&PLANNING, &FINISHING],
    },
];

/// Stages for a project category, falling back to the default four.
pub(crate) fn stages_for(category: Option<&str>) -> &'static [&'static Stage] {
    let Some(category) = category.map(|c| c.trim().to_lowercase()) else {
        return &DEFAULT_STAGES;
    };
    TEMPLATES
        .iter()
        .find(|t| t.categories.iter().any(|c| *c == category))
        .map_or(&DEFAULT_STAGES[..], |t| t.stages)
}

impl Stage {
    fn wants_tool(&self, category: ToolCategory) -> bool {
        match self.category {
            SliceCategory::Planning => true,
            SliceCategory::Safety => category == ToolCategory::Cutting,
            SliceCategory::Cutting => category.is_preparation(),
            SliceCategory::Assembly => category == ToolCategory::Assembly,
            SliceCategory::Finishing => category == ToolCategory::Finishing,
        }
    }

    fn wants_material(&self, category: MaterialCategory) -> bool {
        match self.category {
            SliceCategory::Planning => true,
            SliceCategory::Safety => false,
            SliceCategory::Cutting => category == MaterialCategory::Lumber,
            SliceCategory::Assembly => matches!(
                category,
                MaterialCategory::Adhesive | MaterialCategory::Fastener
            ),
            SliceCategory::Finishing => matches!(
                category,
                MaterialCategory::Finish | MaterialCategory::Abrasive
            ),
        }
    }

    /// Build the slice for `project` at position `order`.
    pub fn build(&self, project: &ProjectDescription, order: u32) -> ProjectSlice {
        ProjectSlice {
            id: format!("{}-{}", project.id, self.key),
            title: self.title.to_string(),
            description: format!(
                "{} for {} ({} level).",
                self.summary, project.title, project.difficulty
            ),
            category: self.category,
            duration: self.duration,
            steps: self.steps.iter().map(|s| s.to_string()).collect(),
            success_criteria: self.criteria.iter().map(|s| s.to_string()).collect(),
            photo_check_required: true,
            materials: project
                .materials
                .iter()
                .filter(|m| self.wants_material(m.category))
                .cloned()
                .collect(),
            tools: project
                .tools
                .iter()
                .filter(|t| self.wants_tool(t.category))
                .cloned()
                .collect(),
            order,
            ..Default::default()
        }
    }
}
