//! Post-processing and waste accounting (§4.7): turns raw integer pattern
//! usage into the [`SolutionPlan`] a caller sees, including the cost/waste
//! gap figures against the theoretical bounds.

use crate::model::{
    CutDetail, Pattern, PatternSet, PlanPattern, RequiredCut, SolutionPlan, StockOption,
    TerminationStatus, TheoreticalBounds,
};

/// Builds the final [`SolutionPlan`] from the integer master's usage vector.
/// `usage[i]` is the (already-rounded) number of times `patterns[i]` is cut.
pub fn build_plan(
    patterns: &PatternSet,
    usage: &[u32],
    stocks: &[StockOption],
    cuts: &[RequiredCut],
    bounds: &TheoreticalBounds,
    iterations: u32,
    iteration_cap_reached: bool,
    status: TerminationStatus,
) -> SolutionPlan {
    let mut plan_patterns = Vec::new();
    let mut total_cost = 0.0;
    let mut total_waste = 0.0;

    for (pattern, &count) in patterns.iter().zip(usage) {
        if count == 0 {
            continue;
        }
        let stock = &stocks[pattern.stock_index];
        let used_length = pattern.used_length(cuts);
        let waste_per_board = stock.length - used_length;

        total_cost += pattern.stock_price * count as f64;
        total_waste += waste_per_board * count as f64;

        plan_patterns.push(PlanPattern {
            stock_index: pattern.stock_index,
            stock_length: stock.length,
            cuts: cut_details(pattern, cuts),
            usage: count,
            waste_per_board,
        });
    }

    let cost_gap_pct = if bounds.min_theoretical_cost > 0.0 {
        (total_cost - bounds.min_theoretical_cost) / bounds.min_theoretical_cost * 100.0
    } else {
        0.0
    };
    let waste_gap_pct = if bounds.min_theoretical_waste > 0.0 {
        (total_waste - bounds.min_theoretical_waste) / bounds.min_theoretical_waste * 100.0
    } else {
        0.0
    };

    SolutionPlan {
        patterns: plan_patterns,
        total_cost,
        total_waste,
        cost_gap_pct,
        waste_gap_pct,
        status,
        iterations,
        iteration_cap_reached,
        bounds: bounds.clone(),
    }
}

fn cut_details(pattern: &Pattern, cuts: &[RequiredCut]) -> Vec<CutDetail> {
    pattern
        .counts
        .iter()
        .zip(cuts)
        .filter(|(&count, _)| count > 0)
        .map(|(&count, cut)| CutDetail {
            length: cut.length,
            count,
            description: cut.description.clone(),
        })
        .collect()
}
