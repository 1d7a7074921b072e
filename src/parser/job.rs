//! JSON job and project file loading.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{OptimizerConfig, Unit, DEFAULT_KERF};
use crate::error::{PlanError, Result};
use crate::model::{CutPiece, ProjectDescription, StockLength};

/// A cut list with the stock it should be cut from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CutJob {
    /// Project name shown in reports.
    #[serde(default)]
    pub name: String,
    pub cuts: Vec<CutPiece>,
    #[serde(default)]
    pub stock: Vec<StockLength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kerf: Option<f64>,
    #[serde(default)]
    pub unit: Unit,
}

impl CutJob {
    /// Optimizer configuration for this job, with an optional kerf override.
    pub fn config(&self, kerf_override: Option<f64>) -> OptimizerConfig {
        OptimizerConfig {
            kerf: kerf_override.or(self.kerf).unwrap_or(DEFAULT_KERF),
            unit: self.unit,
        }
    }

    /// Report title: the job name, or the file stem when unnamed.
    pub fn title(&self, path: &Path) -> String {
        if !self.name.is_empty() {
            return self.name.clone();
        }
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("cut list")
            .to_string()
    }
}

fn read_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PlanError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(PlanError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    Ok(content)
}

/// Parse a cut job from JSON text.
pub fn parse_cut_job(content: &str) -> Result<CutJob> {
    Ok(serde_json::from_str(content)?)
}

/// Load a cut job file.
pub fn load_cut_job(path: &Path) -> Result<CutJob> {
    parse_cut_job(&read_document(path)?)
}

/// Load a project description file.
pub fn load_project(path: &Path) -> Result<ProjectDescription> {
    Ok(serde_json::from_str(&read_document(path)?)?)
}
