/// Read-only diagnostics computed once from the raw instance, used only for
/// reporting a quality gap against the actual solution (§4.1). These are
/// never fed back into the solver as constraints.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct TheoreticalBounds {
    /// `Σ cut.length * cut.quantity` over all required cuts.
    pub total_length_needed: f64,
    /// `total_length_needed * min(price / length)` over all stocks — a cost
    /// lower bound that assumes perfect packing at the cheapest per-inch
    /// rate.
    pub min_theoretical_cost: f64,
    /// Fractional board-count/cost estimate per stock option, purely
    /// informational.
    pub per_stock: Vec<PerStockEstimate>,
    /// First-fit-decreasing simulated waste (§4.1); a heuristic lower bound,
    /// not guaranteed tight.
    pub min_theoretical_waste: f64,
}

/// The fractional "what if we only bought this stock" estimate for one
/// [`crate::model::StockOption`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct PerStockEstimate {
    pub stock_index: usize,
    pub boards: f64,
    pub cost: f64,
}

/// One cut length/count/label entry within a used pattern, as shown to a
/// caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct CutDetail {
    pub length: f64,
    pub count: u32,
    pub description: String,
}

/// A pattern with strictly positive integer usage in the final plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanPattern {
    pub stock_index: usize,
    pub stock_length: f64,
    pub cuts: Vec<CutDetail>,
    pub usage: u32,
    pub waste_per_board: f64,
}

/// How the integer master concluded. `Infeasible`/`Unbounded`/`Unknown` never
/// reach a `SolutionPlan` — they surface as
/// [`crate::error::OptimizerError::SolverFailure`] instead, since by
/// construction (§3's feasibility invariant plus the seeded patterns of
/// §4.2) the integer master is always feasible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminationStatus {
    /// Proven optimal for the fixed pattern set.
    Optimal,
    /// A feasible integer solution was found but the time limit elapsed
    /// before optimality could be proven.
    Feasible,
}

/// The engine's final output: an implementable purchasing and cutting plan,
/// plus the diagnostics needed to judge its quality.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SolutionPlan {
    pub patterns: Vec<PlanPattern>,
    pub total_cost: f64,
    pub total_waste: f64,
    /// `(total_cost - min_theoretical_cost) / min_theoretical_cost * 100`.
    pub cost_gap_pct: f64,
    /// As above for waste, or `0` if `min_theoretical_waste` is zero.
    pub waste_gap_pct: f64,
    pub status: TerminationStatus,
    pub iterations: u32,
    /// Set when column generation hit `max_column_gen_iterations` while a
    /// negative-reduced-cost pattern was still available (§7's
    /// `IterationCap`, non-fatal).
    pub iteration_cap_reached: bool,
    pub bounds: TheoreticalBounds,
}
