//! Planner lifecycle integration tests.
//!
//! These tests verify the complete recommendation path: raw catalog ->
//! candidate filter -> model -> solve -> extraction -> plausibility ->
//! diversification, with a scripted solver behind the seam.

use std::sync::Arc;

use basketeer_core::{
    filter_for_solver,
    testing::{MockSolver, StaticCatalogSource},
    BasketPlanner, CatalogSource, FilterConfig, Item, ItemCategory, PlanRequest, PlannerConfig,
    SolverSolution,
};

fn make_item(id: &str, name: &str, flea_price: u64, base_price: u64) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        normalized_name: name.to_lowercase().replace(' ', "-"),
        icon_link: None,
        categories: vec![ItemCategory::Barter],
        base_price,
        flea_price: Some(flea_price),
    }
}

fn solution_of(values: &[(&str, f64)]) -> SolverSolution {
    SolverSolution {
        objective: None,
        values: values
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect(),
    }
}

/// A small catalog with one unpriced item and one armor item that the
/// candidate filter must drop.
fn test_catalog() -> Vec<Item> {
    let mut armor = make_item("armor", "6B43 body armor", 100_000, 900_000);
    armor.categories = vec![ItemCategory::Armor, ItemCategory::Wearable];

    let mut unpriced = make_item("kappa", "Secure container Kappa", 0, 5_000_000);
    unpriced.flea_price = None;

    vec![
        make_item("gpu", "Graphics card", 290_000, 500_000),
        make_item("ledx", "LEDX Skin Transilluminator", 650_000, 800_000),
        make_item("bitcoin", "Physical Bitcoin", 180_000, 450_000),
        armor,
        unpriced,
    ]
}

#[tokio::test]
async fn test_catalog_to_baskets_round_trip() {
    let source = StaticCatalogSource::new(test_catalog());
    let items = source.fetch_items().await.unwrap();

    let filter = FilterConfig {
        min_base_price: 30_000,
        max_base_price: None,
        excluded_categories: vec![ItemCategory::Armor],
    };
    let candidates = filter_for_solver(&items, &filter);

    // Armor and the unpriced container are gone
    assert_eq!(candidates.len(), 3);
    assert!(candidates.iter().all(|i| i.id != "armor" && i.id != "kappa"));

    let solver = MockSolver::new();
    // Round 1: cheapest way to 450k value is the bitcoin alone.
    solver.push_solution(solution_of(&[("x3", 1.0)])).await;
    // Round 2 solves over {gpu, ledx}: the gpu alone clears the floor.
    solver.push_solution(solution_of(&[("x1", 1.0)])).await;

    let handle = solver.clone();
    let config = PlannerConfig {
        value_floor: 450_000,
        max_items: 2,
        rounds: 2,
        ..PlannerConfig::default()
    };
    let planner = BasketPlanner::new(config, Arc::new(solver));

    let report = planner.plan(&candidates).await;

    assert_eq!(report.baskets.len(), 2);
    assert_eq!(report.failed_rounds, 0);

    // Extraction resolved by identity even though round 2 solved a
    // reduced universe
    assert_eq!(report.baskets[0].entries[0].item.id, "bitcoin");
    assert_eq!(report.baskets[1].entries[0].item.id, "gpu");

    // Disjoint composition across baskets
    let first: Vec<&str> = report.baskets[0].item_ids().collect();
    let second: Vec<&str> = report.baskets[1].item_ids().collect();
    assert!(first.iter().all(|id| !second.contains(id)));

    // The second round's model no longer offered the bitcoin
    let models = handle.solved_models().await;
    assert_eq!(models.len(), 2);
    assert!(models[1].variables.iter().all(|v| v.item_id != "bitcoin"));

    // Constraints hold on everything returned
    for basket in &report.baskets {
        assert!(basket.total_base_value() >= 450_000);
        assert!(basket.total_count() <= 2);
        assert!(basket.is_plausible());
    }
}

#[tokio::test]
async fn test_exhausted_universe_returns_fewer_baskets() {
    let items = vec![make_item("gpu", "Graphics card", 290_000, 500_000)];

    let solver = MockSolver::new();
    solver.push_solution(solution_of(&[("x1", 1.0)])).await;
    // Nothing queued after that: the mock reports infeasible, but the
    // universe is already empty so no further round starts.

    let handle = solver.clone();
    let config = PlannerConfig {
        value_floor: 500_000,
        max_items: 1,
        rounds: 5,
        ..PlannerConfig::default()
    };
    let planner = BasketPlanner::new(config, Arc::new(solver));

    let report = planner.plan(&items).await;

    assert_eq!(report.baskets.len(), 1);
    assert_eq!(report.rounds_attempted, 1);
    assert_eq!(handle.solve_count().await, 1);
}

#[tokio::test]
async fn test_request_overrides_reach_the_model() {
    let items = vec![
        make_item("gpu", "Graphics card", 290_000, 500_000),
        make_item("ledx", "LEDX Skin Transilluminator", 650_000, 800_000),
    ];

    let solver = MockSolver::new();
    solver.push_solution(solution_of(&[("x2", 1.0)])).await;

    let handle = solver.clone();
    let planner = BasketPlanner::new(PlannerConfig::default(), Arc::new(solver));

    let request = PlanRequest {
        value_floor: Some(750_000),
        max_items: Some(3),
        rounds: Some(1),
    };
    let report = planner.plan_with(&items, &request).await;

    assert_eq!(report.baskets.len(), 1);
    assert_eq!(report.baskets[0].entries[0].item.id, "ledx");

    let models = handle.solved_models().await;
    assert_eq!(models[0].value_floor, 750_000);
    assert_eq!(models[0].count_ceiling, 3);
}
