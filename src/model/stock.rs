//! Purchasable stock lengths.

use serde::{Deserialize, Serialize};

/// A purchasable length of raw material.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StockLength {
    /// Stock identifier.
    pub id: String,
    /// Nominal length in inches.
    pub length: f64,
    /// Number of boards available.
    pub quantity: u32,
    /// Cost per board.
    #[serde(default)]
    pub cost: f64,
}

impl StockLength {
    /// Create a new stock entry.
    pub fn new(id: impl Into<String>, length: f64, quantity: u32, cost: f64) -> Self {
        Self {
            id: id.into(),
            length,
            quantity,
            cost,
        }
    }

    /// Total material available in this entry.
    pub fn total_length(&self) -> f64 {
        self.length * self.quantity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_length() {
        let stock = StockLength::new("2x4-8", 96.0, 3, 4.5);
        assert_eq!(stock.total_length(), 288.0);
    }

    #[test]
    fn test_cost_defaults_to_zero() {
        let stock: StockLength =
            serde_json::from_str(r#"{"id":"s","length":48,"quantity":2}"#).unwrap();
        assert_eq!(stock.cost, 0.0);
    }
}
