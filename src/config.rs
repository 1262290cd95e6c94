//! Per-instance solver configuration, lifted out of the solver constructor
//! per the "global solver configuration" design note: time limits, gap
//! tolerances, and iteration caps are explicit here rather than baked into
//! whatever builds the underlying SCIP model.

use std::time::Duration;

/// Tunables for one [`crate::engine::Engine`] run. The defaults match the
/// documented values: `epsilon = 1e-6`, `max_column_gen_iterations = 100`,
/// `integer_solve_time_limit = 120s`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// A candidate pattern only enters the pattern set if its reduced cost
    /// is below `-epsilon`; this is also the tolerance used when comparing
    /// column-generation exit conditions.
    pub epsilon: f64,

    /// Hard cap on column-generation iterations (§4.5). Hitting the cap is
    /// not fatal: the engine proceeds to the integer master with whatever
    /// patterns it has and records `iteration_cap_reached` on the plan.
    pub max_column_gen_iterations: u32,

    /// Time budget for the integer master solve. If the solver returns a
    /// feasible-but-unproven-optimal solution when this elapses, the engine
    /// reports [`crate::model::TerminationStatus::Feasible`] rather than
    /// failing.
    pub integer_solve_time_limit: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            epsilon: 1e-6,
            max_column_gen_iterations: 100,
            integer_solve_time_limit: Duration::from_secs(120),
        }
    }
}
