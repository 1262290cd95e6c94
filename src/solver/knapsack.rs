//! Knapsack pricing subproblem (§4.4): for a fixed stock option and a dual
//! vector, find the integer combination of cuts that maximizes dual-weighted
//! value within the stock's length capacity. Solved as a tiny bounded
//! integer program via SCIP rather than a hand-rolled DP — the pricing
//! problems here are small enough that an exact MILP call is simpler to
//! trust than maintaining a second algorithm, and it is the same approach
//! the `cutting_stock.rs` pricing model in the teacher crate takes.

use russcip::prelude::*;
use russcip::Status;

use crate::error::OptimizerError;
use crate::model::{Pattern, RequiredCut, StockOption};

/// A candidate pattern discovered by pricing one stock option, along with
/// its reduced cost (`stock.price - Σ duals_i * y_i`).
pub struct PricingOutcome {
    pub pattern: Pattern,
    pub reduced_cost: f64,
}

/// Solves the bounded knapsack for `stock` against the current dual vector
/// and returns the best pattern it can build, however poor.
pub fn price_stock(
    stock_index: usize,
    stock: &StockOption,
    cuts: &[RequiredCut],
    duals: &[f64],
) -> Result<PricingOutcome, OptimizerError> {
    let mut model = Model::default().hide_output().maximize();

    let vars: Vec<_> = cuts
        .iter()
        .enumerate()
        .map(|(i, cut)| {
            let ub = (stock.length / cut.length).floor() as isize;
            model.add(
                var()
                    .integer(0, ub.max(0))
                    .obj(duals[i])
                    .name(&format!("take_{i}")),
            )
        })
        .collect();

    let terms = vars
        .iter()
        .zip(cuts.iter())
        .map(|(v, cut)| (v, cut.length));
    model.add(
        cons()
            .name("capacity")
            .expr(terms)
            .le(stock.length),
    );

    let solved = model.solve();
    match solved.status() {
        Status::Optimal => {}
        other => {
            return Err(OptimizerError::SolverFailure {
                stage: "knapsack pricing",
                detail: format!("{other:?}"),
            });
        }
    }

    let sol = solved
        .best_sol()
        .ok_or_else(|| OptimizerError::SolverFailure {
            stage: "knapsack pricing",
            detail: "solver reported optimal but returned no solution".to_string(),
        })?;

    let counts: Vec<u32> = vars.iter().map(|v| sol.val(v).round() as u32).collect();
    let value: f64 = solved.obj_val();
    let reduced_cost = stock.price - value;

    Ok(PricingOutcome {
        pattern: Pattern::new(stock_index, stock.price, counts),
        reduced_cost,
    })
}
