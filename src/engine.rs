//! Top-level orchestration: validates an instance, runs the bounds/seed/
//! column-generation/integer-master pipeline (§4), and hands back a
//! [`crate::model::SolutionPlan`].

use tracing::{info, instrument};

use crate::bounds;
use crate::config::EngineConfig;
use crate::error::OptimizerError;
use crate::model::{RequiredCut, SolutionPlan, StockOption, TerminationStatus};
use crate::postprocess;
use crate::seed;
use crate::solver::scip::ScipSolver;
use crate::solver::{colgen, LpSolver, SolveStatus};

/// Owns one problem instance's stock catalog and cut list, validated once at
/// construction, and exposes [`Engine::optimize`] to run the full pipeline.
pub struct Engine {
    stocks: Vec<StockOption>,
    cuts: Vec<RequiredCut>,
    config: EngineConfig,
}

impl Engine {
    /// Validates §3's per-cut feasibility invariant — every required cut must
    /// fit on at least one stock option — before accepting the instance.
    /// Returns [`OptimizerError::Infeasible`] naming the first cut that
    /// cannot be satisfied by any stock.
    pub fn new(
        stocks: Vec<StockOption>,
        cuts: Vec<RequiredCut>,
        config: EngineConfig,
    ) -> Result<Self, OptimizerError> {
        let longest_stock = stocks.iter().map(|s| s.length).fold(0.0, f64::max);
        for (index, cut) in cuts.iter().enumerate() {
            if cut.length > longest_stock {
                return Err(OptimizerError::Infeasible {
                    index,
                    description: cut.description.clone(),
                    length: cut.length,
                });
            }
        }

        Ok(Engine {
            stocks,
            cuts,
            config,
        })
    }

    /// Runs the full pipeline with the production [`ScipSolver`] backend.
    pub fn optimize(&self) -> Result<SolutionPlan, OptimizerError> {
        self.optimize_with(&ScipSolver::new())
    }

    /// Runs the pipeline against any [`LpSolver`] implementation — the seam
    /// tests use to swap in a stub solver.
    #[instrument(skip_all, fields(stocks = self.stocks.len(), cuts = self.cuts.len()))]
    pub fn optimize_with(&self, solver: &dyn LpSolver) -> Result<SolutionPlan, OptimizerError> {
        let bounds = bounds::compute(&self.stocks, &self.cuts);

        let mut patterns = seed::initial_patterns(&self.stocks, &self.cuts);
        info!(seeded = patterns.len(), "seeded initial patterns");

        let colgen_result = colgen::run(
            &self.stocks,
            &self.cuts,
            &mut patterns,
            solver,
            &self.config,
        )?;
        info!(
            iterations = colgen_result.iterations,
            lp_objective = colgen_result.lp_objective,
            cap_reached = colgen_result.iteration_cap_reached,
            "column generation finished"
        );

        let integer_solution =
            solver.solve_integer(&patterns, &self.cuts, self.config.integer_solve_time_limit)?;

        let status = match integer_solution.status {
            SolveStatus::Optimal => TerminationStatus::Optimal,
            SolveStatus::Feasible => TerminationStatus::Feasible,
            other => {
                return Err(OptimizerError::SolverFailure {
                    stage: "integer master",
                    detail: format!("{other:?}"),
                });
            }
        };

        let usage: Vec<u32> = integer_solution
            .variable_values
            .iter()
            .map(|v| v.round().max(0.0) as u32)
            .collect();

        let plan = postprocess::build_plan(
            &patterns,
            &usage,
            &self.stocks,
            &self.cuts,
            &bounds,
            colgen_result.iterations,
            colgen_result.iteration_cap_reached,
            status,
        );

        info!(
            total_cost = plan.total_cost,
            total_waste = plan.total_waste,
            cost_gap_pct = plan.cost_gap_pct,
            "plan ready"
        );

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_a_cut_longer_than_every_stock() {
        let stocks = vec![StockOption { length: 96.0, price: 8.0 }];
        let cuts = vec![RequiredCut {
            length: 120.0,
            quantity: 1,
            description: "too long".into(),
        }];
        let err = Engine::new(stocks, cuts, EngineConfig::default()).unwrap_err();
        assert!(matches!(err, OptimizerError::Infeasible { index: 0, .. }));
    }

    #[test]
    fn accepts_a_feasible_instance() {
        let stocks = vec![StockOption { length: 96.0, price: 8.0 }];
        let cuts = vec![RequiredCut {
            length: 48.0,
            quantity: 2,
            description: "ok".into(),
        }];
        assert!(Engine::new(stocks, cuts, EngineConfig::default()).is_ok());
    }
}
