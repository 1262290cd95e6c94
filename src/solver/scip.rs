//! SCIP-backed [`LpSolver`]: the production binding, built on `russcip`.
//! Grounded on the teacher crate's `create_and_solve.rs` (build a model,
//! add variables and constraints through the builder API, read the result
//! back off the solved model) and the pricing formulation worked out in
//! `cutting_stock.rs`'s doc comments.

use std::time::Duration;

use russcip::prelude::*;
use russcip::{Constraint, Model, ProblemCreated, Status, Variable};

use super::{LpSolver, MasterSolution, SolveStatus};
use crate::error::OptimizerError;
use crate::model::{PatternSet, RequiredCut};

/// Zero-sized handle implementing [`LpSolver`] against SCIP via `russcip`.
/// Each solve call owns its `Model` for its entire lifetime and drops it at
/// the end of the call — there is no solver state shared across calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScipSolver;

impl ScipSolver {
    pub fn new() -> Self {
        ScipSolver
    }

    /// Builds the restricted master problem (§4.3): one variable per
    /// pattern, one `>=` demand constraint per cut, in cut-index order.
    /// `integer` selects between the LP relaxation (§4.3) and the integer
    /// master (§4.6) — everything else about the formulation is identical.
    fn build_master(
        &self,
        patterns: &PatternSet,
        cuts: &[RequiredCut],
        integer: bool,
    ) -> (Model<ProblemCreated>, Vec<Variable>, Vec<Constraint>) {
        let mut model = Model::default().hide_output().minimize();
        let total_quantity = cuts.iter().map(|c| c.quantity as isize).sum::<isize>().max(1);

        let pattern_vars: Vec<Variable> = patterns
            .iter()
            .enumerate()
            .map(|(i, pattern)| {
                let name = format!("pattern_{i}");
                if integer {
                    model.add(
                        var()
                            .name(&name)
                            .obj(pattern.stock_price)
                            .integer(0, total_quantity),
                    )
                } else {
                    model.add(var().name(&name).obj(pattern.stock_price))
                }
            })
            .collect();

        let demand_cons: Vec<Constraint> = cuts
            .iter()
            .enumerate()
            .map(|(cut_index, cut)| {
                let terms = pattern_vars.iter().zip(patterns.iter()).filter_map(
                    move |(var, pattern)| {
                        let count = pattern.counts[cut_index];
                        (count > 0).then_some((var, count as f64))
                    },
                );
                model.add(
                    cons()
                        .name(&format!("demand_{cut_index}"))
                        .expr(terms)
                        .ge(cut.quantity as f64),
                )
            })
            .collect();

        (model, pattern_vars, demand_cons)
    }
}

impl LpSolver for ScipSolver {
    fn solve_relaxation(
        &self,
        patterns: &PatternSet,
        cuts: &[RequiredCut],
    ) -> Result<MasterSolution, OptimizerError> {
        let (model, pattern_vars, demand_cons) = self.build_master(patterns, cuts, false);
        let solved = model.solve();

        let status = map_status(solved.status());
        if status != SolveStatus::Optimal {
            return Err(OptimizerError::SolverFailure {
                stage: "LP master",
                detail: format!("{:?}", solved.status()),
            });
        }

        let sol = solved
            .best_sol()
            .ok_or_else(|| OptimizerError::SolverFailure {
                stage: "LP master",
                detail: "optimal status but no solution returned".to_string(),
            })?;

        let variable_values = pattern_vars.iter().map(|v| sol.val(v)).collect();
        let duals = demand_cons.iter().map(|c| c.dual_sol()).collect();

        Ok(MasterSolution {
            variable_values,
            objective: solved.obj_val(),
            duals: Some(duals),
            status,
        })
    }

    fn solve_integer(
        &self,
        patterns: &PatternSet,
        cuts: &[RequiredCut],
        time_limit: Duration,
    ) -> Result<MasterSolution, OptimizerError> {
        let (model, pattern_vars, _demand_cons) = self.build_master(patterns, cuts, true);
        let model = model.set_time_limit(time_limit.as_secs().max(1) as usize);
        let solved = model.solve();

        let status = map_status(solved.status());
        let sol = match status {
            SolveStatus::Optimal | SolveStatus::Feasible => solved.best_sol(),
            _ => None,
        };

        let Some(sol) = sol else {
            return Err(OptimizerError::SolverFailure {
                stage: "integer master",
                detail: format!("{:?}", solved.status()),
            });
        };

        let variable_values = pattern_vars.iter().map(|v| sol.val(v)).collect();

        Ok(MasterSolution {
            variable_values,
            objective: solved.obj_val(),
            duals: None,
            status,
        })
    }
}

fn map_status(status: Status) -> SolveStatus {
    match status {
        Status::Optimal => SolveStatus::Optimal,
        Status::TimeLimit => SolveStatus::Feasible,
        Status::Infeasible => SolveStatus::Infeasible,
        Status::Unbounded => SolveStatus::Unbounded,
        _ => SolveStatus::Unknown,
    }
}
