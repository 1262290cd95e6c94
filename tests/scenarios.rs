//! Integration tests against the public `Engine` API, covering the
//! concrete scenarios and boundary cases.

use cutstock_optimizer::{Engine, EngineConfig, RequiredCut, StockOption, TerminationStatus};

fn stock(length: f64, price: f64) -> StockOption {
    StockOption { length, price }
}

fn cut(length: f64, quantity: u32, description: &str) -> RequiredCut {
    RequiredCut {
        length,
        quantity,
        description: description.to_string(),
    }
}

const TOL: f64 = 1e-6;

/// S1 — a single stock length exactly absorbs the demand with no waste.
#[test]
fn s1_exact_fit() {
    let stocks = vec![stock(96.0, 10.0)];
    let cuts = vec![cut(48.0, 2, "A")];
    let plan = Engine::new(stocks, cuts, EngineConfig::default())
        .unwrap()
        .optimize()
        .unwrap();

    assert!((plan.total_cost - 10.0).abs() < TOL);
    assert!((plan.total_waste - 0.0).abs() < TOL);
    assert_eq!(plan.patterns.len(), 1);
    assert_eq!(plan.patterns[0].usage, 1);
}

/// S2 — the engine must prefer the per-inch-cheaper stock even though it
/// costs more per board.
#[test]
fn s2_cheapest_per_inch_dominates() {
    let stocks = vec![stock(120.0, 10.0), stock(96.0, 9.0)];
    let cuts = vec![cut(60.0, 2, "E")];
    let plan = Engine::new(stocks, cuts, EngineConfig::default())
        .unwrap()
        .optimize()
        .unwrap();

    assert!((plan.total_cost - 10.0).abs() < TOL);
    assert!((plan.total_waste - 0.0).abs() < TOL);
    assert_eq!(plan.patterns.len(), 1);
    assert_eq!(plan.patterns[0].stock_length, 120.0);
}

/// S3 — two distinct cut types share a single board with no waste.
#[test]
fn s3_two_cut_types_one_board() {
    let stocks = vec![stock(96.0, 8.0)];
    let cuts = vec![cut(30.0, 2, "B"), cut(36.0, 1, "C")];
    let plan = Engine::new(stocks, cuts, EngineConfig::default())
        .unwrap()
        .optimize()
        .unwrap();

    assert!((plan.total_cost - 8.0).abs() < TOL);
    assert!((plan.total_waste - 0.0).abs() < TOL);
}

/// S4 — demand that doesn't divide evenly forces a second board, with the
/// waste amount fully determined.
#[test]
fn s4_rounding_up() {
    let stocks = vec![stock(96.0, 8.0)];
    let cuts = vec![cut(40.0, 3, "D")];
    let plan = Engine::new(stocks, cuts, EngineConfig::default())
        .unwrap()
        .optimize()
        .unwrap();

    assert!((plan.total_cost - 16.0).abs() < TOL);
    assert!((plan.total_waste - 72.0).abs() < TOL);
}

/// S5 — the optimal plan mixes two stock lengths; a naive per-cut-type
/// assignment would cost more.
#[test]
fn s5_mixed_stock_plan() {
    let stocks = vec![stock(96.0, 8.0), stock(144.0, 11.0)];
    let cuts = vec![cut(48.0, 3, "F"), cut(72.0, 2, "G")];
    let plan = Engine::new(stocks, cuts, EngineConfig::default())
        .unwrap()
        .optimize()
        .unwrap();

    assert!((plan.total_cost - 22.0).abs() < TOL);
    assert!((plan.total_waste - 0.0).abs() < TOL);
}

/// S6 — column generation must discover combined patterns the seeded
/// single-cut-type patterns alone cannot produce.
#[test]
fn s6_column_generation_finds_combined_patterns() {
    let stocks = vec![stock(120.0, 10.0)];
    let cuts = vec![cut(50.0, 2, "H"), cut(35.0, 2, "I"), cut(20.0, 2, "J")];
    let plan = Engine::new(stocks, cuts, EngineConfig::default())
        .unwrap()
        .optimize()
        .unwrap();

    assert!((plan.total_cost - 20.0).abs() < TOL);
    let boards: u32 = plan.patterns.iter().map(|p| p.usage).sum();
    assert_eq!(boards, 2);
}

/// Boundary — a cut exactly matching a stock length needs exactly
/// `quantity` boards and wastes nothing.
#[test]
fn boundary_exact_length_match() {
    let stocks = vec![stock(96.0, 10.0)];
    let cuts = vec![cut(96.0, 3, "K")];
    let plan = Engine::new(stocks, cuts, EngineConfig::default())
        .unwrap()
        .optimize()
        .unwrap();

    assert!((plan.total_waste - 0.0).abs() < TOL);
    let boards: u32 = plan.patterns.iter().map(|p| p.usage).sum();
    assert_eq!(boards, 3);
}

/// Boundary — a cut longer than every stock option is rejected before any
/// solver call.
#[test]
fn boundary_infeasible_cut_is_rejected() {
    let stocks = vec![stock(96.0, 10.0)];
    let cuts = vec![cut(120.0, 1, "too long")];
    let err = Engine::new(stocks, cuts, EngineConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        cutstock_optimizer::OptimizerError::Infeasible { index: 0, .. }
    ));
}

/// Boundary — zero demand yields an empty, zero-cost, optimal plan.
#[test]
fn boundary_zero_demand() {
    let stocks = vec![stock(96.0, 10.0)];
    let cuts: Vec<RequiredCut> = vec![];
    let plan = Engine::new(stocks, cuts, EngineConfig::default())
        .unwrap()
        .optimize()
        .unwrap();

    assert!(plan.patterns.is_empty());
    assert!((plan.total_cost - 0.0).abs() < TOL);
    assert!((plan.total_waste - 0.0).abs() < TOL);
    assert_eq!(plan.status, TerminationStatus::Optimal);
}

/// Invariant 1 — demand is always met, across every used pattern.
#[test]
fn invariant_demand_is_met() {
    let stocks = vec![stock(96.0, 8.0), stock(144.0, 11.0)];
    let cuts = vec![cut(48.0, 5, "L"), cut(30.0, 4, "M")];
    let plan = Engine::new(stocks, cuts.clone(), EngineConfig::default())
        .unwrap()
        .optimize()
        .unwrap();

    for (index, required) in cuts.iter().enumerate() {
        let satisfied: u32 = plan
            .patterns
            .iter()
            .map(|p| {
                p.cuts
                    .iter()
                    .find(|c| (c.length - required.length).abs() < TOL)
                    .map(|c| c.count * p.usage)
                    .unwrap_or(0)
            })
            .sum();
        assert!(
            satisfied >= required.quantity,
            "cut {index} under-satisfied: {satisfied} < {}",
            required.quantity
        );
    }
}

/// Invariant 4 — the realized cost never beats the theoretical lower bound.
#[test]
fn invariant_cost_never_beats_theoretical_minimum() {
    let stocks = vec![stock(96.0, 8.0), stock(144.0, 11.0)];
    let cuts = vec![cut(48.0, 3, "F"), cut(72.0, 2, "G")];
    let plan = Engine::new(stocks, cuts, EngineConfig::default())
        .unwrap()
        .optimize()
        .unwrap();

    assert!(plan.total_cost >= plan.bounds.min_theoretical_cost - TOL);
}
