//! Best-fit-descending assignment of cut pieces to stock lengths.

use tracing::{debug, info, warn};

use crate::config::{float_cmp, OptimizerConfig};
use crate::error::Result;
use crate::model::{CutListResult, CutPiece, OptimizedGroup, StockLength};
use crate::validation::check_cut_list;

/// Assign pieces to stock with no kerf allowance.
pub fn optimize(cuts: &[CutPiece], stock: &[StockLength]) -> Result<CutListResult> {
    optimize_with_config(cuts, stock, &OptimizerConfig::default())
}

/// Assign pieces to stock.
///
/// Algorithm:
/// 1. Expand every piece into single units and sort them longest first
/// 2. For each unit, pick the stock entry with remaining boards whose length
///    leaves the least waste (first entry wins ties)
/// 3. Units nothing can hold are collected in `unassigned`
/// 4. Group efficiency is computed once every unit is placed
///
/// The caller's stock quantities are not touched.
pub fn optimize_with_config(
    cuts: &[CutPiece],
    stock: &[StockLength],
    config: &OptimizerConfig,
) -> Result<CutListResult> {
    check_cut_list(cuts, stock, config.kerf)?;

    let mut remaining: Vec<u32> = stock.iter().map(|s| s.quantity).collect();
    let mut result = CutListResult {
        kerf: config.kerf,
        ..Default::default()
    };

    for unit in expand_units(cuts) {
        match find_best_stock(&unit, stock, &remaining, config) {
            Some(idx) => {
                let entry = &stock[idx];
                remaining[idx] -= 1;
                let mut unit = unit;
                unit.assign(&entry.id, entry.length);
                debug!(
                    "Placed {} ({}) on {} ({}), waste {}",
                    unit.label(),
                    unit.length,
                    entry.id,
                    entry.length,
                    entry.length - unit.length
                );
                group_mut(&mut result.groups, entry.length).push(unit, entry.cost);
            }
            None => {
                warn!(
                    "No stock can hold {} ({}); leaving it unassigned",
                    unit.label(),
                    unit.length
                );
                result.unassigned.push(unit);
            }
        }
    }

    for group in &mut result.groups {
        group.update_efficiency();
    }
    result.total_waste = result.groups.iter().map(|g| g.waste).sum();
    result.total_cost = result.groups.iter().map(|g| g.cost).sum();

    info!(
        "Optimized {} unit(s) onto {} board(s): waste {:.2}, cost {:.2}, {} unassigned",
        result.boards_used() + result.unassigned.len(),
        result.boards_used(),
        result.total_waste,
        result.total_cost,
        result.unassigned.len()
    );

    Ok(result)
}

/// Expand quantities into single units, longest first.
///
/// The sort is stable so equal lengths keep their input order.
fn expand_units(cuts: &[CutPiece]) -> Vec<CutPiece> {
    let mut units: Vec<CutPiece> = cuts
        .iter()
        .flat_map(|piece| (0..piece.quantity).map(move |_| piece.unit()))
        .collect();
    units.sort_by(|a, b| b.length.total_cmp(&a.length));
    units
}

/// Index of the stock entry leaving the least waste for `unit`.
fn find_best_stock(
    unit: &CutPiece,
    stock: &[StockLength],
    remaining: &[u32],
    config: &OptimizerConfig,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, entry) in stock.iter().enumerate() {
        if remaining[idx] == 0 {
            continue;
        }
        // A piece may never exceed its board; the tolerance only absorbs kerf rounding.
        let needed = unit.length + config.kerf_for(unit.length, entry.length);
        if unit.length > entry.length || !float_cmp::approx_le(needed, entry.length) {
            continue;
        }
        let waste = entry.length - unit.length;
        // Strictly smaller keeps the first entry on ties.
        if best.map_or(true, |(_, w)| waste < w) {
            best = Some((idx, waste));
        }
    }

    best.map(|(idx, _)| idx)
}

/// Group for a stock length, created on first use.
fn group_mut(groups: &mut Vec<OptimizedGroup>, stock_length: f64) -> &mut OptimizedGroup {
    let pos = match groups
        .iter()
        .position(|g| float_cmp::approx_eq(g.stock_length, stock_length))
    {
        Some(pos) => pos,
        None => {
            groups.push(OptimizedGroup::new(stock_length));
            groups.len() - 1
        }
    };
    &mut groups[pos]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;
    use std::collections::HashMap;

    fn cut(id: &str, length: f64, quantity: u32) -> CutPiece {
        CutPiece::new(id, length).with_quantity(quantity)
    }

    fn assigned_per_stock(result: &CutListResult) -> HashMap<String, u32> {
        let mut counts = HashMap::new();
        for group in &result.groups {
            for unit in &group.cuts {
                *counts.entry(unit.stock_id.clone().unwrap()).or_insert(0) += 1;
            }
        }
        counts
    }

    #[test]
    fn test_longest_piece_takes_tightest_stock() {
        let cuts = vec![cut("a", 40.0, 1), cut("b", 30.0, 1)];
        let stock = vec![
            StockLength::new("s96", 96.0, 1, 10.0),
            StockLength::new("s48", 48.0, 1, 5.0),
        ];
        let result = optimize(&cuts, &stock).unwrap();

        let g48 = result.group_for(48.0).unwrap();
        assert_eq!(g48.cuts.len(), 1);
        assert_eq!(g48.cuts[0].id, "a");
        assert_eq!(g48.waste, 8.0);

        let g96 = result.group_for(96.0).unwrap();
        assert_eq!(g96.cuts[0].id, "b");
        assert_eq!(g96.waste, 66.0);

        assert_eq!(result.total_waste, 74.0);
        assert_eq!(result.total_cost, 15.0);
        assert!(result.is_complete());
    }

    #[test]
    fn test_groups_ordered_by_first_use() {
        let cuts = vec![cut("a", 40.0, 1), cut("b", 30.0, 1)];
        let stock = vec![
            StockLength::new("s96", 96.0, 1, 10.0),
            StockLength::new("s48", 48.0, 1, 5.0),
        ];
        let result = optimize(&cuts, &stock).unwrap();
        let lengths: Vec<f64> = result.groups.iter().map(|g| g.stock_length).collect();
        assert_eq!(lengths, vec![48.0, 96.0]);
    }

    #[test]
    fn test_quantity_expands_into_units() {
        let cuts = vec![cut("leg", 28.0, 3)];
        let stock = vec![StockLength::new("s", 30.0, 5, 2.0)];
        let result = optimize(&cuts, &stock).unwrap();
        let group = result.group_for(30.0).unwrap();
        assert_eq!(group.boards(), 3);
        assert!(group.cuts.iter().all(|c| c.quantity == 1));
        assert_eq!(group.waste, 6.0);
    }

    #[test]
    fn test_quantity_never_exceeded() {
        let cuts = vec![cut("a", 20.0, 5)];
        let stock = vec![
            StockLength::new("short", 24.0, 2, 1.0),
            StockLength::new("long", 96.0, 1, 8.0),
        ];
        let result = optimize(&cuts, &stock).unwrap();
        let counts = assigned_per_stock(&result);
        assert_eq!(counts["short"], 2);
        assert_eq!(counts["long"], 1);
        assert_eq!(result.unassigned.len(), 2);
    }

    #[test]
    fn test_caller_stock_untouched() {
        let cuts = vec![cut("a", 20.0, 2)];
        let stock = vec![StockLength::new("s", 24.0, 2, 1.0)];
        let before = stock.clone();
        optimize(&cuts, &stock).unwrap();
        assert_eq!(stock, before);
    }

    #[test]
    fn test_oversized_piece_reported_unassigned() {
        let cuts = vec![cut("huge", 120.0, 1), cut("ok", 10.0, 1)];
        let stock = vec![StockLength::new("s", 96.0, 1, 1.0)];
        let result = optimize(&cuts, &stock).unwrap();
        assert_eq!(result.unassigned.len(), 1);
        assert_eq!(result.unassigned[0].id, "huge");
        assert!(!result.unassigned[0].is_assigned());
        assert_eq!(result.boards_used(), 1);
    }

    #[test]
    fn test_empty_stock_leaves_everything_unassigned() {
        let cuts = vec![cut("a", 10.0, 2)];
        let result = optimize(&cuts, &[]).unwrap();
        assert!(result.groups.is_empty());
        assert_eq!(result.unassigned.len(), 2);
        assert_eq!(result.total_waste, 0.0);
    }

    #[test]
    fn test_empty_cuts_give_empty_result() {
        let stock = vec![StockLength::new("s", 96.0, 1, 1.0)];
        let result = optimize(&[], &stock).unwrap();
        assert!(result.groups.is_empty());
        assert!(result.is_complete());
    }

    #[test]
    fn test_tie_goes_to_first_entry() {
        let cuts = vec![cut("a", 40.0, 1)];
        let stock = vec![
            StockLength::new("first", 48.0, 1, 5.0),
            StockLength::new("second", 48.0, 1, 4.0),
        ];
        let result = optimize(&cuts, &stock).unwrap();
        assert_eq!(result.groups[0].cuts[0].stock_id.as_deref(), Some("first"));
    }

    #[test]
    fn test_same_length_entries_share_a_group() {
        let cuts = vec![cut("a", 40.0, 2)];
        let stock = vec![
            StockLength::new("first", 48.0, 1, 5.0),
            StockLength::new("second", 48.0, 1, 4.0),
        ];
        let result = optimize(&cuts, &stock).unwrap();
        assert_eq!(result.groups.len(), 1);
        assert_eq!(result.groups[0].boards(), 2);
        assert_eq!(result.groups[0].cost, 9.0);
        assert!((result.groups[0].efficiency - 80.0 / 96.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_kerf_blocks_tight_fit() {
        let cuts = vec![cut("a", 47.95, 1)];
        let stock = vec![
            StockLength::new("s48", 48.0, 1, 5.0),
            StockLength::new("s96", 96.0, 1, 10.0),
        ];

        let result = optimize(&cuts, &stock).unwrap();
        assert_eq!(result.groups[0].stock_length, 48.0);

        let result = optimize_with_config(&cuts, &stock, &OptimizerConfig::new(0.125)).unwrap();
        assert_eq!(result.groups[0].stock_length, 96.0);
        assert_eq!(result.kerf, 0.125);
        assert_eq!(result.kerf_loss(), 0.125);
    }

    #[test]
    fn test_kerf_not_needed_for_full_board() {
        let cuts = vec![cut("a", 48.0, 1)];
        let stock = vec![StockLength::new("s48", 48.0, 1, 5.0)];
        let result = optimize_with_config(&cuts, &stock, &OptimizerConfig::new(0.125)).unwrap();
        assert!(result.is_complete());
        assert_eq!(result.groups[0].efficiency, 100.0);
        assert_eq!(result.kerf_loss(), 0.0);
    }

    #[test]
    fn test_piece_a_hair_longer_than_board_is_unassigned() {
        let cuts = vec![cut("a", 48.0 + crate::config::EPS / 2.0, 1)];
        let stock = vec![StockLength::new("s48", 48.0, 1, 5.0)];
        let result = optimize(&cuts, &stock).unwrap();

        assert!(result.groups.is_empty());
        assert_eq!(result.unassigned.len(), 1);
        assert_eq!(result.total_waste, 0.0);
    }

    #[test]
    fn test_invalid_input_rejected() {
        let cuts = vec![cut("a", -3.0, 1)];
        let stock = vec![StockLength::new("s", 48.0, 1, 5.0)];
        assert!(matches!(
            optimize(&cuts, &stock),
            Err(PlanError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        let cuts = vec![cut("a", 22.0, 2), cut("b", 31.5, 3), cut("c", 22.0, 1)];
        let stock = vec![
            StockLength::new("s36", 36.0, 3, 3.0),
            StockLength::new("s24", 24.0, 4, 2.0),
            StockLength::new("s96", 96.0, 2, 9.0),
        ];
        let first = optimize(&cuts, &stock).unwrap();
        let second = optimize(&cuts, &stock).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_waste_and_efficiency_invariants() {
        let cuts = vec![
            cut("a", 22.0, 2),
            cut("b", 31.5, 3),
            cut("c", 70.0, 1),
            cut("d", 12.25, 4),
        ];
        let stock = vec![
            StockLength::new("s36", 36.0, 3, 3.0),
            StockLength::new("s24", 24.0, 4, 2.0),
            StockLength::new("s96", 96.0, 2, 9.0),
        ];
        let result = optimize(&cuts, &stock).unwrap();

        for group in &result.groups {
            let expected: f64 = group
                .cuts
                .iter()
                .map(|c| group.stock_length - c.length)
                .sum();
            assert!((group.waste - expected).abs() < 1e-9);
            assert!(group.efficiency >= 0.0 && group.efficiency <= 100.0);
        }

        let counts = assigned_per_stock(&result);
        for entry in &stock {
            assert!(counts.get(&entry.id).copied().unwrap_or(0) <= entry.quantity);
        }
    }

    #[test]
    fn test_expand_units_stable_descending() {
        let units = expand_units(&[cut("x", 10.0, 1), cut("y", 20.0, 1), cut("z", 10.0, 1)]);
        let ids: Vec<&str> = units.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["y", "x", "z"]);
    }
}
