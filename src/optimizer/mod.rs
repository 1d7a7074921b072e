//! Cut-list optimization.

mod best_fit;

pub use best_fit::{optimize, optimize_with_config};
