//! Configuration constants and settings for planning and optimization.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Default saw kerf. Zero keeps the allocation purely length based.
pub const DEFAULT_KERF: f64 = 0.0;

/// Planning stage duration in minutes.
pub const PLANNING_MINUTES: u32 = 30;

/// Material preparation (cutting) stage duration in minutes.
pub const CUTTING_MINUTES: u32 = 60;

/// Assembly stage duration in minutes.
pub const ASSEMBLY_MINUTES: u32 = 90;

/// Finishing stage duration in minutes.
pub const FINISHING_MINUTES: u32 = 60;

/// Tool safety stage duration in minutes.
pub const SAFETY_MINUTES: u32 = 15;

/// Conversion factor: inch to mm.
pub const CONV_INCH_MM: f64 = 25.4;

/// Unit of measurement used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Inches,
    Millimeters,
}

impl Unit {
    /// Convert a length in inches to this unit.
    pub fn convert_inches(&self, value: f64) -> f64 {
        match self {
            Unit::Inches => value,
            Unit::Millimeters => value * CONV_INCH_MM,
        }
    }

    /// Short suffix used in reports.
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Inches => "\"",
            Unit::Millimeters => " mm",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Inches => write!(f, "in"),
            Unit::Millimeters => write!(f, "mm"),
        }
    }
}

/// Optimizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Blade width lost when a piece is separated from a board (inches).
    pub kerf: f64,
    /// Unit used when rendering reports.
    #[serde(default)]
    pub unit: Unit,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            kerf: DEFAULT_KERF,
            unit: Unit::Inches,
        }
    }
}

impl OptimizerConfig {
    /// Create a configuration with the given kerf.
    pub fn new(kerf: f64) -> Self {
        Self {
            kerf,
            ..Default::default()
        }
    }

    /// Kerf consumed when cutting `piece_length` from a board of `stock_length`.
    ///
    /// A piece that uses the whole board needs no cut.
    pub fn kerf_for(&self, piece_length: f64, stock_length: f64) -> f64 {
        if float_cmp::approx_eq(piece_length, stock_length) {
            0.0
        } else {
            self.kerf
        }
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if `a` is less than or equal to `b` with epsilon tolerance.
    #[inline]
    pub fn approx_le(a: f64, b: f64) -> bool {
        a <= b + EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        assert!(float_cmp::approx_eq(Unit::Millimeters.convert_inches(2.0), 50.8));
        assert!(float_cmp::approx_eq(Unit::Inches.convert_inches(2.0), 2.0));
    }

    #[test]
    fn test_kerf_for_exact_board() {
        let config = OptimizerConfig::new(0.125);
        assert_eq!(config.kerf_for(96.0, 96.0), 0.0);
        assert_eq!(config.kerf_for(40.0, 96.0), 0.125);
    }

    #[test]
    fn test_default_config_has_no_kerf() {
        let config = OptimizerConfig::default();
        assert_eq!(config.kerf, 0.0);
        assert_eq!(config.unit, Unit::Inches);
    }

    #[test]
    fn test_float_helpers() {
        assert!(float_cmp::approx_le(48.00001, 48.0));
        assert!(!float_cmp::approx_le(48.1, 48.0));
    }
}
