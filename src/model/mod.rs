//! The data model shared by every component: purchasable stock, required
//! cuts, cutting patterns, and the final plan.

mod cut;
mod pattern;
mod plan;
mod stock;

pub use cut::RequiredCut;
pub use pattern::{Pattern, PatternSet};
pub use plan::{CutDetail, PerStockEstimate, PlanPattern, SolutionPlan, TerminationStatus, TheoreticalBounds};
pub use stock::StockOption;
