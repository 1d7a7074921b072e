//! Plain-text reports for cut lists and lesson plans.

use std::fmt::Write;

use crate::config::Unit;
use crate::error::Result;
use crate::model::{CutListResult, OptimizedGroup, ProjectSlice};

/// Options for the cut-list report.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Project name printed in the header.
    pub title: String,
    /// Unit lengths are printed in.
    pub unit: Unit,
}

/// Format a length: up to three decimals, trailing zeros removed.
pub fn format_length(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        s => s.to_string(),
    }
}

fn length(value: f64, unit: Unit) -> String {
    format!("{}{}", format_length(unit.convert_inches(value)), unit.suffix())
}

/// Render an optimization result as a line-based text report.
pub fn generate_cut_report(result: &CutListResult, options: &ReportOptions) -> Result<String> {
    let mut output = String::new();
    let unit = options.unit;

    writeln!(output, "[CUT LIST]")?;
    writeln!(output, "Project: {}", options.title)?;
    writeln!(output, "Kerf: {}", length(result.kerf, unit))?;
    writeln!(output)?;

    writeln!(output, "[STOCK]")?;
    for group in &result.groups {
        let unit_cost = if group.boards() > 0 {
            group.cost / group.boards() as f64
        } else {
            0.0
        };
        writeln!(
            output,
            "{} x {} @ {:.2} = {:.2}",
            group.boards(),
            length(group.stock_length, unit),
            unit_cost,
            group.cost
        )?;
    }
    writeln!(output)?;

    writeln!(output, "[CUTS]")?;
    for group in &result.groups {
        write_group(&mut output, group, unit)?;
    }
    writeln!(output)?;

    writeln!(output, "[UNASSIGNED]")?;
    if result.unassigned.is_empty() {
        writeln!(output, "none")?;
    }
    for piece in &result.unassigned {
        writeln!(output, "  {}  {}", piece.label(), length(piece.length, unit))?;
    }
    writeln!(output)?;

    writeln!(output, "[TOTALS]")?;
    writeln!(output, "Boards: {}", result.boards_used())?;
    writeln!(output, "Cut length: {}", length(result.total_cut_length(), unit))?;
    writeln!(output, "Waste: {}", length(result.total_waste, unit))?;
    if result.kerf > 0.0 {
        writeln!(output, "Kerf loss: {}", length(result.kerf_loss(), unit))?;
    }
    writeln!(output, "Cost: {:.2}", result.total_cost)?;
    writeln!(output, "Efficiency: {:.1}%", result.overall_efficiency())?;

    Ok(output)
}

fn write_group(output: &mut String, group: &OptimizedGroup, unit: Unit) -> Result<()> {
    writeln!(
        output,
        "{} stock: {} board(s), waste {}, efficiency {:.1}%",
        length(group.stock_length, unit),
        group.boards(),
        length(group.waste, unit),
        group.efficiency
    )?;
    for piece in &group.cuts {
        writeln!(
            output,
            "  {}  {}  waste {}",
            piece.label(),
            length(piece.length, unit),
            length(piece.waste.unwrap_or_default(), unit)
        )?;
    }
    Ok(())
}

/// Render lesson slices as a readable outline.
pub fn generate_lesson_outline(title: &str, slices: &[ProjectSlice]) -> Result<String> {
    let mut output = String::new();

    writeln!(output, "[LESSONS]")?;
    writeln!(output, "Project: {}", title)?;
    let total: u32 = slices.iter().map(|s| s.duration).sum();
    writeln!(output, "Total time: {} min", total)?;

    for slice in slices {
        writeln!(output)?;
        writeln!(
            output,
            "{}. {} ({}, {} min)",
            slice.order + 1,
            slice.title,
            slice.category,
            slice.duration
        )?;
        if !slice.description.is_empty() {
            writeln!(output, "   {}", slice.description)?;
        }
        if slice.photo_check_required {
            writeln!(output, "   Photo check required")?;
        }
        write_list(&mut output, "Steps", slice.steps.iter().map(String::as_str))?;
        write_list(
            &mut output,
            "Success criteria",
            slice.success_criteria.iter().map(String::as_str),
        )?;
        write_list(&mut output, "Tools", slice.tools.iter().map(|t| t.name.as_str()))?;
        write_list(
            &mut output,
            "Materials",
            slice.materials.iter().map(|m| m.name.as_str()),
        )?;
    }

    Ok(output)
}

fn write_list<'a>(
    output: &mut String,
    heading: &str,
    items: impl Iterator<Item = &'a str>,
) -> Result<()> {
    let mut items = items.peekable();
    if items.peek().is_none() {
        return Ok(());
    }
    writeln!(output, "   {}:", heading)?;
    for item in items {
        writeln!(output, "     - {}", item)?;
    }
    Ok(())
}
