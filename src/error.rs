//! Error types for cut-list optimization and lesson planning.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for planning operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Malformed input document (-3)
    ParseError = -3,
    /// Non-positive or non-finite piece dimension (E100)
    InvalidDimension = 100,
    /// Zero piece quantity (E101)
    InvalidQuantity = 101,
    /// Unusable stock entry (E102)
    InvalidStock = 102,
    /// Negative or non-finite kerf (E103)
    InvalidKerf = 103,
    /// Project not present in the repository (E200)
    ProjectNotFound = 200,
    /// Slice id unknown to the project (E201)
    SliceNotFound = 201,
    /// Edit attempted on a completed slice (E202)
    SliceCompleted = 202,
    /// Step or criterion index out of range (E203)
    IndexOutOfRange = 203,
    /// Report could not be rendered (E300)
    ReportFailed = 300,
}

/// Main error type for planning operations.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid {field} for piece '{piece}': {value}")]
    InvalidDimension {
        piece: String,
        field: String,
        value: f64,
    },

    #[error("Piece '{piece}' has zero quantity")]
    InvalidQuantity { piece: String },

    #[error("Invalid stock '{stock}': {message}")]
    InvalidStock { stock: String, message: String },

    #[error("Invalid kerf: {value}")]
    InvalidKerf { value: f64 },

    #[error("Project not found: {id}")]
    ProjectNotFound { id: String },

    #[error("Slice not found: {id}")]
    SliceNotFound { id: String },

    #[error("Slice {id} is already completed")]
    SliceCompleted { id: String },

    #[error("Index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Report formatting failed")]
    Format(#[from] std::fmt::Error),
}

impl PlanError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::FileNotFound { .. } => ErrorCode::FileNotFound,
            PlanError::EmptyFile { .. } => ErrorCode::EmptyFile,
            PlanError::InvalidDimension { .. } => ErrorCode::InvalidDimension,
            PlanError::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
            PlanError::InvalidStock { .. } => ErrorCode::InvalidStock,
            PlanError::InvalidKerf { .. } => ErrorCode::InvalidKerf,
            PlanError::ProjectNotFound { .. } => ErrorCode::ProjectNotFound,
            PlanError::SliceNotFound { .. } => ErrorCode::SliceNotFound,
            PlanError::SliceCompleted { .. } => ErrorCode::SliceCompleted,
            PlanError::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
            PlanError::Io(_) => ErrorCode::FileNotFound,
            PlanError::Json(_) => ErrorCode::ParseError,
            PlanError::Format(_) => ErrorCode::ReportFailed,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for planning operations.
pub type Result<T> = std::result::Result<T, PlanError>;
