//! Cut piece definition for a single required part of a project.

use serde::{Deserialize, Serialize};

/// Preferred grain orientation for a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrainDirection {
    /// Grain runs along the piece length.
    #[default]
    Along,
    /// Grain runs across the piece.
    Across,
    /// No preference.
    Any,
}

fn default_quantity() -> u32 {
    1
}

/// A required cut, possibly needed several times.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CutPiece {
    /// Piece identifier.
    pub id: String,
    /// Display name (e.g. "Side panel").
    #[serde(default)]
    pub name: String,
    /// How many identical pieces are required.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Length in inches.
    pub length: f64,
    /// Width in inches.
    #[serde(default)]
    pub width: f64,
    /// Thickness in inches.
    #[serde(default)]
    pub thickness: f64,
    /// Free-text material tag.
    #[serde(default)]
    pub material: String,
    /// Grain preference, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grain_direction: Option<GrainDirection>,
    /// Maker's notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Length of the stock this unit was assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_length: Option<f64>,
    /// Identifier of the stock entry this unit was assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_id: Option<String>,
    /// Leftover length on the assigned board.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waste: Option<f64>,
}

impl CutPiece {
    /// Create a new piece with quantity 1.
    pub fn new(id: impl Into<String>, length: f64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            quantity: 1,
            length,
            ..Default::default()
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the required quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Set width and thickness.
    pub fn with_section(mut self, width: f64, thickness: f64) -> Self {
        self.width = width;
        self.thickness = thickness;
        self
    }

    /// Set the material tag.
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = material.into();
        self
    }

    /// Display label, falling back to the id.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    /// Check whether this unit has been placed on stock.
    pub fn is_assigned(&self) -> bool {
        self.stock_length.is_some()
    }

    /// Copy of this piece representing a single unit.
    pub(crate) fn unit(&self) -> Self {
        Self {
            quantity: 1,
            stock_length: None,
            stock_id: None,
            waste: None,
            ..self.clone()
        }
    }

    /// Record an assignment on this unit.
    pub(crate) fn assign(&mut self, stock_id: &str, stock_length: f64) {
        self.stock_id = Some(stock_id.to_string());
        self.stock_length = Some(stock_length);
        self.waste = Some(stock_length - self.length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_piece_defaults() {
        let piece = CutPiece::new("leg", 28.0);
        assert_eq!(piece.quantity, 1);
        assert_eq!(piece.name, "leg");
        assert!(!piece.is_assigned());
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let mut piece = CutPiece::new("p1", 10.0);
        piece.name.clear();
        assert_eq!(piece.label(), "p1");
        assert_eq!(piece.with_name("Rail").label(), "Rail");
    }

    #[test]
    fn test_assign_populates_waste() {
        let mut unit = CutPiece::new("shelf", 30.0).with_quantity(3).unit();
        assert_eq!(unit.quantity, 1);
        unit.assign("s1", 96.0);
        assert_eq!(unit.stock_length, Some(96.0));
        assert_eq!(unit.stock_id.as_deref(), Some("s1"));
        assert_eq!(unit.waste, Some(66.0));
    }

    #[test]
    fn test_deserialize_minimal() {
        let piece: CutPiece = serde_json::from_str(r#"{"id":"a","length":12.5}"#).unwrap();
        assert_eq!(piece.quantity, 1);
        assert_eq!(piece.length, 12.5);
        assert!(piece.grain_direction.is_none());
    }
}
