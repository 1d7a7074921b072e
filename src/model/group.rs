//! Optimizer output: pieces grouped by the stock length they are cut from.

use serde::{Deserialize, Serialize};

use super::CutPiece;

/// Every unit assigned to one stock length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptimizedGroup {
    /// Stock length the units are cut from.
    pub stock_length: f64,
    /// Assigned units, one per board.
    pub cuts: Vec<CutPiece>,
    /// Sum of leftover length over all boards.
    pub waste: f64,
    /// Used length as a percentage of purchased length.
    pub efficiency: f64,
    /// Cost of the boards consumed.
    pub cost: f64,
}

impl OptimizedGroup {
    /// Create an empty group for a stock length.
    pub fn new(stock_length: f64) -> Self {
        Self {
            stock_length,
            ..Default::default()
        }
    }

    /// Number of boards consumed.
    pub fn boards(&self) -> usize {
        self.cuts.len()
    }

    /// Sum of assigned piece lengths.
    pub fn cut_length(&self) -> f64 {
        self.cuts.iter().map(|c| c.length).sum()
    }

    /// Add an assigned unit.
    pub(crate) fn push(&mut self, unit: CutPiece, cost: f64) {
        self.waste += self.stock_length - unit.length;
        self.cost += cost;
        self.cuts.push(unit);
    }

    /// Recompute efficiency from the current cuts.
    pub(crate) fn update_efficiency(&mut self) {
        let purchased = self.stock_length * self.boards() as f64;
        self.efficiency = if purchased > 0.0 {
            self.cut_length() / purchased * 100.0
        } else {
            0.0
        };
    }
}

/// Result of a cut-list optimization run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CutListResult {
    /// Groups in order of first use.
    pub groups: Vec<OptimizedGroup>,
    /// Units no stock could hold, in placement order.
    pub unassigned: Vec<CutPiece>,
    /// Waste over all groups.
    pub total_waste: f64,
    /// Cost over all groups.
    pub total_cost: f64,
    /// Kerf used for the run.
    pub kerf: f64,
}

impl CutListResult {
    /// Whether every requested unit was placed.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// Number of boards consumed.
    pub fn boards_used(&self) -> usize {
        self.groups.iter().map(|g| g.boards()).sum()
    }

    /// Sum of assigned piece lengths.
    pub fn total_cut_length(&self) -> f64 {
        self.groups.iter().map(|g| g.cut_length()).sum()
    }

    /// Material lost to the blade, one kerf per board that needed a cut.
    pub fn kerf_loss(&self) -> f64 {
        self.groups
            .iter()
            .flat_map(|g| g.cuts.iter().map(move |c| (c.length, g.stock_length)))
            .filter(|(piece, stock)| !crate::config::float_cmp::approx_eq(*piece, *stock))
            .count() as f64
            * self.kerf
    }

    /// Used length as a percentage of all purchased length.
    pub fn overall_efficiency(&self) -> f64 {
        let purchased: f64 = self
            .groups
            .iter()
            .map(|g| g.stock_length * g.boards() as f64)
            .sum();
        if purchased > 0.0 {
            self.total_cut_length() / purchased * 100.0
        } else {
            0.0
        }
    }

    /// Find the group for a stock length.
    pub fn group_for(&self, stock_length: f64) -> Option<&OptimizedGroup> {
        self.groups
            .iter()
            .find(|g| crate::config::float_cmp::approx_eq(g.stock_length, stock_length))
    }
}
