//! Output formatting (§6): three presentations of a [`SolutionPlan`],
//! recovering the three print functions of the original `stock.py` as one
//! flag (`--format simple|collapsed|detailed`) instead of three call sites.
//! Deliberately thin and untested beyond the property that every format
//! produces non-empty output — the tested core is the plan itself.

use std::fmt::Write as _;

use crate::model::{PlanPattern, SolutionPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per used pattern: stock length, usage count, cuts.
    Simple,
    /// Patterns grouped by stock length, usage counts summed.
    Collapsed,
    /// Every field on `SolutionPlan`, including the theoretical bounds.
    Detailed,
}

pub fn render(plan: &SolutionPlan, format: OutputFormat) -> String {
    match format {
        OutputFormat::Simple => render_simple(plan),
        OutputFormat::Collapsed => render_collapsed(plan),
        OutputFormat::Detailed => render_detailed(plan),
    }
}

fn render_simple(plan: &SolutionPlan) -> String {
    let mut out = String::new();
    for pattern in &plan.patterns {
        writeln!(out, "{}x board @ {:.1} in: {}", pattern.usage, pattern.stock_length, cuts_summary(pattern)).ok();
    }
    writeln!(out, "total cost: {:.2}, total waste: {:.1} in", plan.total_cost, plan.total_waste).ok();
    out
}

fn render_collapsed(plan: &SolutionPlan) -> String {
    let mut by_length: Vec<(f64, u32, f64)> = Vec::new();
    for pattern in &plan.patterns {
        match by_length.iter_mut().find(|(length, _, _)| *length == pattern.stock_length) {
            Some((_, usage, waste)) => {
                *usage += pattern.usage;
                *waste += pattern.waste_per_board * pattern.usage as f64;
            }
            None => by_length.push((
                pattern.stock_length,
                pattern.usage,
                pattern.waste_per_board * pattern.usage as f64,
            )),
        }
    }

    let mut out = String::new();
    for (length, usage, waste) in by_length {
        writeln!(out, "{length:.1} in stock: {usage} boards, {waste:.1} in waste").ok();
    }
    writeln!(out, "total cost: {:.2}", plan.total_cost).ok();
    out
}

fn render_detailed(plan: &SolutionPlan) -> String {
    let mut out = String::new();
    writeln!(out, "status: {:?} ({} column-generation iterations{})",
        plan.status,
        plan.iterations,
        if plan.iteration_cap_reached { ", iteration cap reached" } else { "" }
    ).ok();
    writeln!(out).ok();
    for pattern in &plan.patterns {
        writeln!(out, "pattern: stock {:.1} in x{} (waste {:.1} in/board)", pattern.stock_length, pattern.usage, pattern.waste_per_board).ok();
        for cut in &pattern.cuts {
            writeln!(out, "    {} x {:.1} in \"{}\"", cut.count, cut.length, cut.description).ok();
        }
    }
    writeln!(out).ok();
    writeln!(out, "total cost: {:.2} (theoretical minimum {:.2}, {:+.1}% gap)",
        plan.total_cost, plan.bounds.min_theoretical_cost, plan.cost_gap_pct).ok();
    writeln!(out, "total waste: {:.1} in (theoretical minimum {:.1} in, {:+.1}% gap)",
        plan.total_waste, plan.bounds.min_theoretical_waste, plan.waste_gap_pct).ok();
    out
}

fn cuts_summary(pattern: &PlanPattern) -> String {
    pattern
        .cuts
        .iter()
        .map(|c| format!("{}x{:.1}in", c.count, c.length))
        .collect::<Vec<_>>()
        .join(", ")
}
