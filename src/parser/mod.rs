//! Job and project file parsing.

mod job;

pub use job::{load_cut_job, load_project, parse_cut_job, CutJob};
