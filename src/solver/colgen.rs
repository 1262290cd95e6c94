//! Column-generation driver (§4.5): alternates solving the LP master and
//! pricing every stock option, appending the best negative-reduced-cost
//! pattern found, until none remains or the iteration cap is hit.

use tracing::{debug, info};

use super::knapsack::price_stock;
use super::LpSolver;
use crate::error::OptimizerError;
use crate::model::{PatternSet, RequiredCut, StockOption};
use crate::EngineConfig;

/// Outcome of running column generation to completion (or to the cap).
pub struct ColumnGenResult {
    pub iterations: u32,
    pub iteration_cap_reached: bool,
    pub lp_objective: f64,
}

/// Runs delayed column generation, mutating `patterns` in place by
/// appending every pattern it discovers. Returns once no stock yields a
/// pattern with reduced cost below `-config.epsilon`, or the iteration cap
/// is reached.
pub fn run(
    stocks: &[StockOption],
    cuts: &[RequiredCut],
    patterns: &mut PatternSet,
    solver: &dyn LpSolver,
    config: &EngineConfig,
) -> Result<ColumnGenResult, OptimizerError> {
    let mut lp_objective = 0.0;
    let mut iteration_cap_reached = false;
    let mut iterations = 0;

    loop {
        let master = solver.solve_relaxation(patterns, cuts)?;
        lp_objective = master.objective;
        let duals = master
            .duals
            .expect("LP relaxation solve always returns duals");

        let mut best: Option<(usize, f64, crate::model::Pattern)> = None;
        for (stock_index, stock) in stocks.iter().enumerate() {
            let outcome = price_stock(stock_index, stock, cuts, &duals)?;
            debug!(
                iteration = iterations,
                stock_index,
                reduced_cost = outcome.reduced_cost,
                "priced stock option"
            );
            let is_better = match &best {
                None => true,
                Some((_, best_cost, _)) => outcome.reduced_cost < *best_cost,
            };
            if is_better {
                best = Some((stock_index, outcome.reduced_cost, outcome.pattern));
            }
        }

        let Some((stock_index, reduced_cost, pattern)) = best else {
            break;
        };

        if reduced_cost >= -config.epsilon {
            debug!(reduced_cost, "no improving column found, LP relaxation optimal");
            break;
        }

        if iterations >= config.max_column_gen_iterations {
            iteration_cap_reached = true;
            info!(iterations, reduced_cost, "column generation hit the iteration cap with an improving column still available");
            break;
        }

        debug!(iteration = iterations, stock_index, reduced_cost, "adding column");
        patterns.push(pattern);
        iterations += 1;
    }

    Ok(ColumnGenResult {
        iterations,
        iteration_cap_reached,
        lp_objective,
    })
}
