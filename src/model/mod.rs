//! Data model types for cut lists and project lessons.

mod cut;
mod group;
mod project;
mod slice;
mod stock;

pub use cut::{CutPiece, GrainDirection};
pub use group::{CutListResult, OptimizedGroup};
pub use project::{
    Difficulty, Material, MaterialCategory, ProjectDescription, Tool, ToolCategory,
};
pub use slice::{AuthoredSlice, ProjectSlice, SliceCategory, SliceState};
pub use stock::StockLength;
