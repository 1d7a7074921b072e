//! Validation of cut lists and stock before optimization.

use crate::config::float_cmp;
use crate::error::{PlanError, Result};
use crate::model::{CutPiece, StockLength};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }
}

/// Check a single piece.
pub fn check_piece(piece: &CutPiece) -> Result<()> {
    if !piece.length.is_finite() || piece.length <= 0.0 {
        return Err(invalid_dimension(piece, "length", piece.length));
    }
    if !piece.width.is_finite() || piece.width < 0.0 {
        return Err(invalid_dimension(piece, "width", piece.width));
    }
    if !piece.thickness.is_finite() || piece.thickness < 0.0 {
        return Err(invalid_dimension(piece, "thickness", piece.thickness));
    }
    if piece.quantity == 0 {
        return Err(PlanError::InvalidQuantity {
            piece: piece.label().to_string(),
        });
    }
    Ok(())
}

fn invalid_dimension(piece: &CutPiece, field: &str, value: f64) -> PlanError {
    PlanError::InvalidDimension {
        piece: piece.label().to_string(),
        field: field.to_string(),
        value,
    }
}

/// Check a single stock entry.
pub fn check_stock(stock: &StockLength) -> Result<()> {
    let message = if !stock.length.is_finite() || stock.length <= 0.0 {
        format!("length must be positive, got {}", stock.length)
    } else if stock.quantity == 0 {
        "quantity must be positive".to_string()
    } else if !stock.cost.is_finite() || stock.cost < 0.0 {
        format!("cost must not be negative, got {}", stock.cost)
    } else {
        return Ok(());
    };
    Err(PlanError::InvalidStock {
        stock: stock.id.clone(),
        message,
    })
}

/// Check the saw kerf.
pub fn check_kerf(kerf: f64) -> Result<()> {
    if !kerf.is_finite() || kerf < 0.0 {
        return Err(PlanError::InvalidKerf { value: kerf });
    }
    Ok(())
}

/// Strict check used before optimizing: the first problem found is returned.
pub fn check_cut_list(cuts: &[CutPiece], stock: &[StockLength], kerf: f64) -> Result<()> {
    check_kerf(kerf)?;
    for piece in cuts {
        check_piece(piece)?;
    }
    for entry in stock {
        check_stock(entry)?;
    }
    Ok(())
}

/// Validate a cut list, collecting every error and warning.
pub fn validate_cut_list(cuts: &[CutPiece], stock: &[StockLength], kerf: f64) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if let Err(e) = check_kerf(kerf) {
        result.add_error(e.to_string());
    }

    if cuts.is_empty() {
        result.add_warning("Cut list is empty");
    }
    if stock.is_empty() {
        result.add_warning("No stock available; every piece will be unassigned");
    }

    for entry in stock {
        if let Err(e) = check_stock(entry) {
            result.add_error(e.to_string());
        }
    }

    let longest_stock = stock
        .iter()
        .filter(|s| s.quantity > 0)
        .map(|s| s.length)
        .fold(0.0_f64, f64::max);

    for piece in cuts {
        if let Err(e) = check_piece(piece) {
            result.add_error(e.to_string());
            continue;
        }
        if !stock.is_empty() && !float_cmp::approx_le(piece.length, longest_stock) {
            result.add_warning(format!(
                "Piece '{}' ({}) is longer than any stock ({})",
                piece.label(),
                piece.length,
                longest_stock
            ));
        }
    }

    let needed: f64 = cuts
        .iter()
        .map(|c| c.length * c.quantity as f64)
        .sum();
    let available: f64 = stock.iter().map(|s| s.total_length()).sum();
    if !stock.is_empty() && needed > available + crate::config::EPS {
        result.add_warning(format!(
            "Cut list needs {} of material but only {} is available",
            needed, available
        ));
    }

    result
}
