//! Initial pattern seeding (§4.2): one "single-cut-type" pattern per
//! (stock, cut) pair that fits at least one copy. This guarantees LP
//! feasibility for every cut that can be satisfied at all, which combined
//! with the per-cut feasibility check in [`crate::engine::Engine::new`]
//! means the initial LP — and therefore every later integer master — is
//! always feasible.

use crate::model::{Pattern, PatternSet, RequiredCut, StockOption};

pub fn initial_patterns(stocks: &[StockOption], cuts: &[RequiredCut]) -> PatternSet {
    let mut patterns = PatternSet::new();
    for (stock_index, stock) in stocks.iter().enumerate() {
        for (cut_index, cut) in cuts.iter().enumerate() {
            let copies = (stock.length / cut.length).floor() as u32;
            if copies >= 1 {
                let mut counts = vec![0u32; cuts.len()];
                counts[cut_index] = copies;
                patterns.push(Pattern::new(stock_index, stock.price, counts));
            }
        }
    }
    patterns
}
