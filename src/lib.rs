//! woodshop-plan - Cut-list optimization and lesson planning for woodworking projects.
//!
//! This library assigns required cut pieces to purchasable stock lengths with a
//! best-fit-descending heuristic, and breaks a project down into ordered lesson
//! slices (planning, cutting, assembly, finishing).
//!
//! # Example
//!
//! ```
//! use woodshop_plan::{optimize, CutPiece, StockLength};
//!
//! let cuts = vec![CutPiece::new("rail", 40.0), CutPiece::new("stile", 30.0)];
//! let stock = vec![
//!     StockLength::new("8ft", 96.0, 1, 10.0),
//!     StockLength::new("4ft", 48.0, 1, 5.0),
//! ];
//! let result = optimize(&cuts, &stock).unwrap();
//! assert_eq!(result.total_waste, 74.0);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod optimizer;
pub mod parser;
pub mod plan;
pub mod slicer;
pub mod validation;

// Re-exports for convenience
pub use config::{OptimizerConfig, Unit};
pub use error::{PlanError, Result};
pub use generator::{generate_cut_report, generate_lesson_outline, ReportOptions};
pub use model::{
    AuthoredSlice, CutListResult, CutPiece, Difficulty, Material, MaterialCategory,
    OptimizedGroup, ProjectDescription, ProjectSlice, SliceCategory, SliceState, StockLength,
    Tool, ToolCategory,
};
pub use optimizer::{optimize, optimize_with_config};
pub use parser::{load_cut_job, load_project, CutJob};
pub use plan::{
    create_project_plan, slice_project_into_lessons, start_project, CompletionStatus,
    InMemoryRepository, LessonProgress, ProjectPlan, ProjectRepository,
};
pub use slicer::{normalize_slices, slice_project};
pub use validation::{validate_cut_list, ValidationResult};

/// Load a cut job file, optimize it and render the text report.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Load the job file
/// 2. Validate the cut list (warnings and errors are logged)
/// 3. Optimize
/// 4. Generate the text report
pub fn optimize_job_file(input_path: &std::path::Path, kerf: Option<f64>) -> Result<String> {
    let job = load_cut_job(input_path)?;
    let config = job.config(kerf);

    let validation = validate_cut_list(&job.cuts, &job.stock, config.kerf);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    for err in &validation.errors {
        tracing::error!("{}", err);
    }

    let result = optimize_with_config(&job.cuts, &job.stock, &config)?;

    generate_cut_report(
        &result,
        &ReportOptions {
            title: job.title(input_path),
            unit: config.unit,
        },
    )
}
